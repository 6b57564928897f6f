//! Diarynotes - A tabbed note-taking app with autosave.
//!
//! # Usage
//!
//! ```bash
//! diarynotes
//! diarynotes --autosave-file ~/notes/autosave.txt
//! diarynotes --log-file diary.log --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use diarynotes::app::App;
use diarynotes::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use diarynotes::notebook::DEFAULT_AUTOSAVE_FILE;

/// A tabbed note-taking app for the terminal
#[derive(Parser, Debug)]
#[command(name = "diarynotes", version, about, long_about = None)]
struct Cli {
    /// File every edit is autosaved to, restored into the first tab at startup
    #[arg(long, value_name = "PATH")]
    autosave_file: Option<PathBuf>,

    /// Write log output to a file (discarded otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        autosave_file: cli.autosave_file,
        log_file: cli.log_file,
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    diarynotes::logging::init(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    let autosave_path = effective
        .autosave_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_AUTOSAVE_FILE));

    let mut app = App::new()
        .with_autosave_path(autosave_path)
        .with_config_paths(
            Some(global_path),
            local_path.exists().then_some(local_path),
        );

    app.run().context("Application error")
}
