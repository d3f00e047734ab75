use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::{AppError, Context, Result};

use super::{validator, Config};

/// Load a JSON config file and layer it over the built-in defaults.
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<Config> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config JSON at {}", path.display()))?;

    let raw: RawConfig = serde_json::from_str(&json)
        .map_err(|err| AppError::parse(format!("config JSON at {}", path.display()), err))?;

    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let config = raw.apply(Config::builtin(), &root)?;

    validator::validate_config(&config)?;
    log::debug!("loaded config from {}", path.display());

    Ok(config)
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    app_id: Option<u32>,
    #[serde(default)]
    api: RawApiConfig,
    #[serde(default)]
    backup: RawBackupConfig,
    #[serde(default)]
    paths: RawPathsConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawApiConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawBackupConfig {
    enabled: Option<bool>,
    file_name: Option<String>,
    dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPathsConfig {
    store: Option<String>,
    game_dir: Option<String>,
}

impl RawConfig {
    fn apply(self, mut config: Config, root: &Path) -> Result<Config> {
        if let Some(app_id) = self.app_id {
            config.app_id = app_id;
        }

        if let Some(base_url) = self.api.base_url {
            config.api.base_url = base_url;
        }
        if let Some(secs) = self.api.timeout_secs {
            config.api.timeout = Duration::from_secs(secs);
        }

        if let Some(enabled) = self.backup.enabled {
            config.backup.enabled = enabled;
        }
        if let Some(file_name) = self.backup.file_name {
            config.backup.file_name = file_name;
        }
        if let Some(dir) = self.backup.dir {
            config.backup.dir = Some(normalize_path(root, dir, "backup.dir")?);
        }

        if let Some(store) = self.paths.store {
            config.paths.store = Some(normalize_path(root, store, "paths.store")?);
        }
        if let Some(game_dir) = self.paths.game_dir {
            config.paths.game_dir = Some(normalize_path(root, game_dir, "paths.game_dir")?);
        }

        Ok(config)
    }
}

fn normalize_path(root: &Path, value: String, field: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(AppError::Config(format!("{field} must not be empty")));
    }

    let path = PathBuf::from(&value);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn empty_object_yields_builtin_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{}");

        let config = load_config(&path).expect("load config");
        assert_eq!(config.app_id, 4000);
        assert_eq!(config.api.base_url, "https://api.steampowered.com");
        assert_eq!(config.api.timeout, Duration::from_secs(10));
        assert!(config.paths.store.is_none());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "api": { "timeout_secs": 3 },
                "backup": { "dir": "backups", "file_name": "before.txt" },
                "paths": { "store": "settings/addonpresets.txt" }
            }"#,
        );

        let config = load_config(&path).expect("load config");
        assert_eq!(config.api.timeout, Duration::from_secs(3));
        assert_eq!(config.backup.file_name, "before.txt");
        assert_eq!(config.backup.dir, Some(dir.path().join("backups")));
        assert_eq!(
            config.paths.store,
            Some(dir.path().join("settings/addonpresets.txt"))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "colour": "blue" }"#);

        let err = load_config(&path).expect_err("unknown field should fail");
        assert!(
            matches!(err, AppError::Parse { .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn invalid_values_fail_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "api": { "timeout_secs": 0 } }"#);

        let err = load_config(&path).expect_err("zero timeout should fail");
        assert!(
            err.to_string().contains("timeout"),
            "unexpected error message: {err}"
        );
    }
}
