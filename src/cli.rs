use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ConfigOverrides, GAME_DIR_ENV};

#[derive(Debug, Parser)]
#[command(name = "gmod-preset")]
#[command(about = "Import a Steam Workshop collection as a Garry's Mod addon preset")]
#[command(version)]
pub struct Cli {
    /// Workshop collection id or URL; prompted for when omitted
    pub collection: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to addonpresets.txt, skipping install discovery
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Garry's Mod install root (the folder containing `garrysmod/`)
    #[arg(short, long, env = GAME_DIR_ENV)]
    pub game_dir: Option<PathBuf>,

    /// Directory for presetbackup.txt (defaults to the presets file's folder)
    #[arg(long)]
    pub backup_dir: Option<PathBuf>,

    /// Do not back up the presets file before writing it
    #[arg(long)]
    pub no_backup: bool,

    /// What to do when a preset with the collection's title already exists
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Ask)]
    pub on_conflict: ConflictPolicy,

    /// New preset name used with `--on-conflict rename`
    #[arg(long, value_name = "NAME")]
    pub rename_to: Option<String>,

    /// Resolve and merge, but leave the presets file untouched
    #[arg(long)]
    pub dry_run: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictPolicy {
    Ask,
    Overwrite,
    Rename,
    Cancel,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            store: self.store.clone(),
            game_dir: self.game_dir.clone(),
            backup_dir: self.backup_dir.clone(),
            no_backup: self.no_backup,
        }
    }
}

pub fn show_banner() {
    println!("# ------------------------------------------------------------------ #");
    println!("# Garry's Mod Collection to Preset");
    println!("# Executing date: {}", crate::utils::current_human_timestamp());
    println!("# ------------------------------------------------------------------ #");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_non_interactive_invocation() {
        let cli = Cli::try_parse_from([
            "gmod-preset",
            "2841591236",
            "--store",
            "/tmp/addonpresets.txt",
            "--on-conflict",
            "rename",
            "--rename-to",
            "Server pack",
            "--dry-run",
        ])
        .expect("parse args");

        assert_eq!(cli.collection.as_deref(), Some("2841591236"));
        assert_eq!(cli.on_conflict, ConflictPolicy::Rename);
        assert_eq!(cli.rename_to.as_deref(), Some("Server pack"));
        assert!(cli.dry_run);
        assert_eq!(
            cli.overrides().store,
            Some(PathBuf::from("/tmp/addonpresets.txt"))
        );
    }

    #[test]
    fn defaults_to_asking_on_conflict() {
        let cli = Cli::try_parse_from(["gmod-preset"]).expect("parse args");
        assert_eq!(cli.on_conflict, ConflictPolicy::Ask);
        assert!(cli.collection.is_none());
        assert!(!cli.no_backup);
    }
}
