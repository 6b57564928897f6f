use std::path::PathBuf;

use diarynotes::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".diarynotesrc");
    let content = r"
# comment
--autosave-file journal.txt


--log-file=diary.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.autosave_file, Some(PathBuf::from("journal.txt")));
    assert_eq!(flags.log_file, Some(PathBuf::from("diary.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".diarynotesrc");
    std::fs::write(&path, "--autosave-file file.txt\n--log-file file.log\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "diarynotes".to_string(),
        "--autosave-file".to_string(),
        "cli.txt".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(
        effective.autosave_file,
        Some(PathBuf::from("cli.txt")),
        "cli should override autosave path"
    );
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_override_wins_over_global() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("global");
    let local = dir.path().join("local");
    save_config_flags(
        &global,
        &ConfigFlags {
            autosave_file: Some(PathBuf::from("global.txt")),
            log_file: Some(PathBuf::from("global.log")),
        },
    )
    .unwrap();
    std::fs::write(&local, "--autosave-file=local.txt\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());

    assert_eq!(merged.autosave_file, Some(PathBuf::from("local.txt")));
    assert_eq!(merged.log_file, Some(PathBuf::from("global.log")));
}

#[test]
fn test_missing_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("nope")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
