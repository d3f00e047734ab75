use crate::cli::ConflictPolicy;
use crate::error::{AppError, Result};
use crate::records::{ConflictChoice, ConflictResolver};

/// Non-interactive answer to name collisions, chosen on the command line.
#[derive(Debug, Clone)]
pub struct FixedConflictPolicy {
    choice: ConflictChoice,
}

impl FixedConflictPolicy {
    pub fn new(choice: ConflictChoice) -> Self {
        Self { choice }
    }

    /// Build from `--on-conflict` / `--rename-to`. `Ask` has no fixed answer.
    pub fn from_cli(policy: ConflictPolicy, rename_to: Option<String>) -> Result<Self> {
        let choice = match (policy, rename_to) {
            (ConflictPolicy::Rename, Some(name)) => ConflictChoice::Rename(name),
            (ConflictPolicy::Rename, None) => {
                return Err(AppError::Config(
                    "--on-conflict rename requires --rename-to <NAME>".to_string(),
                ));
            }
            (ConflictPolicy::Ask, _) => {
                return Err(AppError::Config(
                    "`ask` is resolved interactively, not by a fixed policy".to_string(),
                ));
            }
            (policy, rename_to) => {
                if rename_to.is_some() {
                    log::warn!("--rename-to is ignored with --on-conflict {policy:?}");
                }
                match policy {
                    ConflictPolicy::Overwrite => ConflictChoice::Overwrite,
                    _ => ConflictChoice::Cancel,
                }
            }
        };
        Ok(Self::new(choice))
    }
}

impl ConflictResolver for FixedConflictPolicy {
    fn resolve_conflict(&mut self, name: &str) -> Result<ConflictChoice> {
        log::info!("preset `{name}` exists, applying {:?}", self.choice);
        Ok(self.choice.clone())
    }
}
