//! Finding `addonpresets.txt` for the current machine.
//!
//! Explicit paths win; otherwise the install root comes from Steam's library
//! folders via `steamlocate`.

use std::path::{Path, PathBuf};

use steamlocate::SteamDir;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Where the preset store lives, and whether the game has created it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Present(PathBuf),
    /// The install exists but the game has not written any preset yet.
    Missing(PathBuf),
}

impl StoreLocation {
    pub fn path(&self) -> &Path {
        match self {
            StoreLocation::Present(path) | StoreLocation::Missing(path) => path,
        }
    }

    fn classify(path: PathBuf) -> Self {
        if path.is_file() {
            StoreLocation::Present(path)
        } else {
            StoreLocation::Missing(path)
        }
    }
}

/// Preset store path inside a Garry's Mod install root.
pub fn store_path_for(install_root: &Path) -> PathBuf {
    install_root
        .join("garrysmod")
        .join("settings")
        .join("addonpresets.txt")
}

pub fn locate_store(config: &Config) -> Result<StoreLocation> {
    if let Some(store) = &config.paths.store {
        log::debug!("using explicit preset store {}", store.display());
        return Ok(StoreLocation::classify(store.clone()));
    }

    let root = install_root(config)?;
    log::info!("Garry's Mod install root: {}", root.display());
    Ok(StoreLocation::classify(store_path_for(&root)))
}

fn install_root(config: &Config) -> Result<PathBuf> {
    match &config.paths.game_dir {
        Some(dir) if dir.is_dir() => Ok(dir.clone()),
        Some(dir) => Err(AppError::InstallNotFound(format!(
            "{} is not a directory",
            dir.display()
        ))),
        None => steam_install_root(config.app_id),
    }
}

fn steam_install_root(app_id: u32) -> Result<PathBuf> {
    let steam_dir = SteamDir::locate().map_err(|err| {
        AppError::InstallNotFound(format!("Steam installation could not be located ({err})"))
    })?;
    log::debug!("Steam directory: {}", steam_dir.path().display());

    match steam_dir.find_app(app_id)? {
        Some((app, library)) => Ok(library.resolve_app_dir(&app)),
        None => Err(AppError::InstallNotFound(format!(
            "no Steam library folder contains app {app_id}"
        ))),
    }
}
