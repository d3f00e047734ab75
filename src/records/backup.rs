use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::BackupConfig;
use crate::error::{AppError, Context, Result};

/// Copy `source` into the configured backup directory.
///
/// Without an explicit directory the backup lands next to the source file.
pub fn backup(source: &Path, config: &BackupConfig) -> Result<PathBuf> {
    let target = backup_target(source, config);
    if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create backup directory {}", dir.display()))?;
    }

    backup_to(source, &target)
}

/// Preferred backup path for `source`, before collision avoidance.
pub fn backup_target(source: &Path, config: &BackupConfig) -> PathBuf {
    let dir = match &config.dir {
        Some(dir) => dir.clone(),
        None => source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    dir.join(&config.file_name)
}

/// Copy `source` verbatim to `target`, or to the first free `<stem>_<n><ext>`
/// sibling of it when `target` is taken. Existing files are never overwritten.
pub fn backup_to(source: &Path, target: &Path) -> Result<PathBuf> {
    let contents = fs::read(source)
        .with_context(|| format!("Failed to read {} for backup", source.display()))?;

    let mut counter = 0u32;
    loop {
        let candidate = numbered_path(target, counter);
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut file) => {
                file.write_all(&contents).with_context(|| {
                    format!("Failed to write backup {}", candidate.display())
                })?;
                log::info!(
                    "backed up {} to {}",
                    source.display(),
                    candidate.display()
                );
                return Ok(candidate);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                counter = counter.checked_add(1).ok_or_else(|| {
                    AppError::message("Exhausted backup file names")
                })?;
            }
            Err(err) => {
                return Err(AppError::message(format!(
                    "Failed to create backup {}: {}",
                    candidate.display(),
                    err
                )));
            }
        }
    }
}

/// First path in the `target`, `<stem>_1<ext>`, `<stem>_2<ext>`... sequence
/// that does not exist yet.
pub fn next_backup_path(target: &Path) -> PathBuf {
    let mut counter = 0u32;
    loop {
        let candidate = numbered_path(target, counter);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn numbered_path(target: &Path, counter: u32) -> PathBuf {
    if counter == 0 {
        return target.to_path_buf();
    }

    let stem = target
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match target.extension() {
        Some(ext) => format!("{stem}_{counter}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{counter}"),
    };
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_source(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("addonpresets.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn successive_backups_never_overwrite() {
        let dir = TempDir::new().unwrap();
        let source = seed_source(&dir, "first");
        let target = dir.path().join("presetbackup.txt");

        let first = backup_to(&source, &target).expect("first backup");
        fs::write(&source, "second").unwrap();
        let second = backup_to(&source, &target).expect("second backup");
        fs::write(&source, "third").unwrap();
        let third = backup_to(&source, &target).expect("third backup");

        assert_eq!(first, dir.path().join("presetbackup.txt"));
        assert_eq!(second, dir.path().join("presetbackup_1.txt"));
        assert_eq!(third, dir.path().join("presetbackup_2.txt"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(fs::read_to_string(&third).unwrap(), "third");
    }

    #[test]
    fn fills_gaps_in_the_sequence() {
        let dir = TempDir::new().unwrap();
        let source = seed_source(&dir, "{}");
        let target = dir.path().join("presetbackup.txt");
        fs::write(&target, "old").unwrap();
        fs::write(dir.path().join("presetbackup_2.txt"), "old").unwrap();

        assert_eq!(next_backup_path(&target), dir.path().join("presetbackup_1.txt"));
        let written = backup_to(&source, &target).expect("backup");
        assert_eq!(written, dir.path().join("presetbackup_1.txt"));
    }

    #[test]
    fn suffix_without_extension_goes_at_the_end() {
        let target = Path::new("/tmp/backups/presets");
        assert_eq!(numbered_path(target, 3), PathBuf::from("/tmp/backups/presets_3"));
    }

    #[test]
    fn default_directory_is_next_to_the_source() {
        let dir = TempDir::new().unwrap();
        let source = seed_source(&dir, "{}");
        let config = BackupConfig {
            enabled: true,
            file_name: "presetbackup.txt".to_string(),
            dir: None,
        };

        let written = backup(&source, &config).expect("backup");
        assert_eq!(written, dir.path().join("presetbackup.txt"));
    }

    #[test]
    fn configured_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let source = seed_source(&dir, "{}");
        let config = BackupConfig {
            enabled: true,
            file_name: "presetbackup.txt".to_string(),
            dir: Some(dir.path().join("nested").join("backups")),
        };

        let written = backup(&source, &config).expect("backup");
        assert_eq!(
            written,
            dir.path().join("nested").join("backups").join("presetbackup.txt")
        );
        assert_eq!(fs::read_to_string(written).unwrap(), "{}");
    }

    #[test]
    fn unreadable_source_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let result = backup_to(&missing, &dir.path().join("presetbackup.txt"));
        assert!(result.is_err());
        assert!(!dir.path().join("presetbackup.txt").exists());
    }
}
