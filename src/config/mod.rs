use std::path::PathBuf;
use std::time::Duration;

pub mod loader;
pub mod validator;

pub use loader::load_config;

/// Steam application id of Garry's Mod.
pub const GMOD_APP_ID: u32 = 4000;
pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";
pub const DEFAULT_BACKUP_FILE: &str = "presetbackup.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Environment variable pointing at the Garry's Mod install root.
pub const GAME_DIR_ENV: &str = "GMOD_DIR";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct BackupConfig {
    pub enabled: bool,
    pub file_name: String,
    /// Directory receiving backups; `None` means next to the preset store.
    pub dir: Option<PathBuf>,
}

/// Explicit locations that bypass Steam discovery.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub store: Option<PathBuf>,
    pub game_dir: Option<PathBuf>,
}

/// Resolved runtime configuration for one import run.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: u32,
    pub api: ApiConfig,
    pub backup: BackupConfig,
    pub paths: PathOverrides,
}

/// Values supplied on the command line, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub store: Option<PathBuf>,
    pub game_dir: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
    pub no_backup: bool,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            app_id: GMOD_APP_ID,
            api: ApiConfig {
                base_url: DEFAULT_API_BASE.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            backup: BackupConfig {
                enabled: true,
                file_name: DEFAULT_BACKUP_FILE.to_string(),
                dir: None,
            },
            paths: PathOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.store.is_some() {
            self.paths.store = overrides.store;
        }
        if overrides.game_dir.is_some() {
            self.paths.game_dir = overrides.game_dir;
        }
        if overrides.backup_dir.is_some() {
            self.backup.dir = overrides.backup_dir;
        }
        if overrides.no_backup {
            self.backup.enabled = false;
        }
        self
    }

    /// Full endpoint URL for a `ISteamRemoteStorage` method.
    pub fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/ISteamRemoteStorage/{}/v1/",
            self.api.base_url.trim_end_matches('/'),
            method
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_targets_garrys_mod() {
        let config = Config::builtin();
        assert_eq!(config.app_id, 4000);
        assert_eq!(config.backup.file_name, "presetbackup.txt");
        assert!(config.backup.enabled);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let mut config = Config::builtin();
        config.api.base_url = "http://localhost:8080/".to_string();
        assert_eq!(
            config.endpoint("GetCollectionDetails"),
            "http://localhost:8080/ISteamRemoteStorage/GetCollectionDetails/v1/"
        );
    }

    #[test]
    fn overrides_only_replace_supplied_values() {
        let mut base = Config::builtin();
        base.paths.game_dir = Some(PathBuf::from("/games/gmod"));

        let config = base.with_overrides(ConfigOverrides {
            store: Some(PathBuf::from("/tmp/addonpresets.txt")),
            no_backup: true,
            ..ConfigOverrides::default()
        });

        assert_eq!(
            config.paths.store.as_deref(),
            Some(std::path::Path::new("/tmp/addonpresets.txt"))
        );
        assert_eq!(
            config.paths.game_dir.as_deref(),
            Some(std::path::Path::new("/games/gmod"))
        );
        assert!(!config.backup.enabled);
    }
}
