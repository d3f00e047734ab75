pub mod bootstrap;
pub mod controller;
pub mod policy;

use crate::cli::{Cli, ConflictPolicy};
use crate::error::Result;
use crate::fetch::SteamWorkshop;
use crate::records::{ConflictResolver, MergeOutcome};
use crate::ui::{prompt_collection_id, TerminalConflictResolver};
use crate::utils::parse_collection_id;

pub use bootstrap::{initialize, Session};
pub use controller::{ImportReport, PresetImporter};
pub use policy::FixedConflictPolicy;

/// Run one import as described by the command line.
pub fn run(cli: &Cli) -> Result<ImportReport> {
    let session = initialize(cli)?;

    let collection_id = match &cli.collection {
        Some(raw) => parse_collection_id(raw)?,
        None => prompt_collection_id()?,
    };

    let mut resolver: Box<dyn ConflictResolver> = match cli.on_conflict {
        ConflictPolicy::Ask => Box::new(TerminalConflictResolver),
        policy => Box::new(FixedConflictPolicy::from_cli(policy, cli.rename_to.clone())?),
    };

    let workshop = SteamWorkshop::new(&session.config)?;
    let importer = PresetImporter::new(&session.config, workshop);
    let report = importer.import(
        &session.store_path,
        &collection_id,
        resolver.as_mut(),
        cli.dry_run,
    )?;

    print_report(&report);
    Ok(report)
}

pub fn print_report(report: &ImportReport) {
    if let Some(path) = &report.backup_path {
        if report.written {
            println!("Presets file backed up to {}", path.display());
        } else {
            println!("Would back up presets file to {}", path.display());
        }
    }

    match &report.outcome {
        MergeOutcome::Cancelled => println!("Aborted. No changes made to the presets."),
        MergeOutcome::Added { name } | MergeOutcome::Replaced { name } if !report.written => {
            println!(
                "Dry run: preset '{}' with {} addons was not written to {}.",
                name,
                report.member_count,
                report.store_path.display()
            );
        }
        MergeOutcome::Added { name } => println!(
            "Preset '{}' successfully added to {}.",
            name,
            report.store_path.display()
        ),
        MergeOutcome::Replaced { name } => println!(
            "Preset '{}' successfully replaced in {}.",
            name,
            report.store_path.display()
        ),
    }
}
