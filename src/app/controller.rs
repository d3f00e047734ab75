use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fetch::Workshop;
use crate::records::{self, ConflictResolver, MergeOutcome};

/// Summary of one import, printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub collection_id: String,
    pub title: String,
    pub member_count: usize,
    pub outcome: MergeOutcome,
    pub store_path: PathBuf,
    pub backup_path: Option<PathBuf>,
    pub written: bool,
}

/// Drives resolve → merge → backup → save for a single collection.
pub struct PresetImporter<'a, W: Workshop> {
    config: &'a Config,
    workshop: W,
}

impl<'a, W: Workshop> PresetImporter<'a, W> {
    pub fn new(config: &'a Config, workshop: W) -> Self {
        Self { config, workshop }
    }

    /// Import `collection_id` into the store at `store_path`.
    ///
    /// Nothing is written unless every step before the save succeeded and the
    /// merge was not cancelled. With `dry_run` the file is never written.
    pub fn import(
        &self,
        store_path: &Path,
        collection_id: &str,
        resolver: &mut dyn ConflictResolver,
        dry_run: bool,
    ) -> Result<ImportReport> {
        let mut store = records::load_store(store_path)?;
        log::info!(
            "loaded {} presets from {}",
            store.len(),
            store_path.display()
        );

        let title = self.workshop.resolve_title(collection_id)?;
        println!("Collection {collection_id}: {title}");
        let members = self.workshop.resolve_members(collection_id)?;
        let member_count = members.len();
        println!("Found {member_count} addons in the collection.");

        let outcome = records::merge(&mut store, &title, members, resolver)?;

        let mut report = ImportReport {
            collection_id: collection_id.to_string(),
            title,
            member_count,
            outcome,
            store_path: store_path.to_path_buf(),
            backup_path: None,
            written: false,
        };

        if report.outcome.is_cancelled() {
            return Ok(report);
        }

        if dry_run {
            if self.config.backup.enabled {
                let target = records::backup_target(store_path, &self.config.backup);
                report.backup_path = Some(records::next_backup_path(&target));
            }
            return Ok(report);
        }

        if self.config.backup.enabled {
            report.backup_path = Some(records::backup(store_path, &self.config.backup)?);
        }

        records::save_store(store_path, &store)?;
        report.written = true;
        Ok(report)
    }
}
