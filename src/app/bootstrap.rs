use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{load_config, validator, Config};
use crate::error::{AppError, Result};
use crate::locate::{locate_store, StoreLocation};

/// Everything resolved before talking to Steam.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub store_path: PathBuf,
}

/// Build the config and find the preset store; failures are plain errors.
pub fn initialize(cli: &Cli) -> Result<Session> {
    let config = build_config(cli)?;

    let store_path = match locate_store(&config)? {
        StoreLocation::Present(path) => path,
        StoreLocation::Missing(path) => return Err(AppError::StoreNotFound(path)),
    };
    println!("Found presets file at {}", store_path.display());

    Ok(Session { config, store_path })
}

/// Defaults, then the optional JSON file, then command-line flags.
pub fn build_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::builtin(),
    };
    let config = base.with_overrides(cli.overrides());
    validator::validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::store_path_for;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cli_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("gmod-preset.json");
        fs::write(
            &config_path,
            r#"{ "backup": { "file_name": "before-import.txt" }, "paths": { "store": "from-file.txt" } }"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "gmod-preset",
            "--config",
            config_path.to_str().unwrap(),
            "--store",
            "/explicit/addonpresets.txt",
            "--no-backup",
        ])
        .unwrap();

        let config = build_config(&cli).expect("build config");
        assert_eq!(config.backup.file_name, "before-import.txt");
        assert!(!config.backup.enabled);
        assert_eq!(
            config.paths.store,
            Some(PathBuf::from("/explicit/addonpresets.txt"))
        );
    }

    #[test]
    fn missing_store_is_reported_with_its_path() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "gmod-preset",
            "--game-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let err = initialize(&cli).expect_err("store does not exist yet");
        assert!(matches!(err, AppError::StoreNotFound(path) if path == store_path_for(dir.path())));
    }

    #[test]
    fn present_store_starts_a_session() {
        let dir = TempDir::new().unwrap();
        let store = store_path_for(dir.path());
        fs::create_dir_all(store.parent().unwrap()).unwrap();
        fs::write(&store, "{}").unwrap();

        let cli = Cli::try_parse_from([
            "gmod-preset",
            "--game-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let session = initialize(&cli).expect("initialize");
        assert_eq!(session.store_path, store);
        assert_eq!(session.config.app_id, 4000);
    }
}
