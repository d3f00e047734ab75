use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{AppError, Context, Result};

use super::PresetStore;

/// Read the whole preset store into memory.
///
/// A missing file is reported as [`AppError::StoreNotFound`]; a file holding
/// only whitespace is treated as an empty store.
pub fn load_store(path: &Path) -> Result<PresetStore> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::StoreNotFound(path.to_path_buf()));
        }
        Err(err) => {
            return Err(AppError::message(format!(
                "Failed to read preset store {}: {}",
                path.display(),
                err
            )));
        }
    };

    if data.trim().is_empty() {
        log::warn!("preset store {} is empty", path.display());
        return Ok(PresetStore::new());
    }

    let store = serde_json::from_str(&data)
        .map_err(|err| AppError::parse(format!("preset store {}", path.display()), err))?;
    Ok(store)
}

/// Overwrite the store file with compact JSON.
pub fn save_store(path: &Path, store: &PresetStore) -> Result<()> {
    let json = serde_json::to_string(store).context("Failed to serialize preset store")?;

    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to open preset store {:?} for writing", path))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write preset store {:?}", path))?;

    log::info!("wrote {} presets to {}", store.len(), path.display());
    Ok(())
}
