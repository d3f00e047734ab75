use crate::error::{AppError, Result};

use super::{Preset, PresetStore};

/// How to proceed when the incoming preset name is already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Rename(String),
    Cancel,
}

/// Capability answering name collisions, interactive or not.
pub trait ConflictResolver {
    fn resolve_conflict(&mut self, name: &str) -> Result<ConflictChoice>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Added { name: String },
    Replaced { name: String },
    Cancelled,
}

impl MergeOutcome {
    /// Name the preset ended up under, unless the merge was cancelled.
    pub fn preset_name(&self) -> Option<&str> {
        match self {
            MergeOutcome::Added { name } | MergeOutcome::Replaced { name } => Some(name),
            MergeOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, MergeOutcome::Cancelled)
    }
}

/// Insert a preset built from `members` under `title`.
///
/// The store is only touched once the conflict, if any, has been settled; on
/// cancel or error it is left exactly as it was.
pub fn merge(
    store: &mut PresetStore,
    title: &str,
    members: Vec<String>,
    resolver: &mut dyn ConflictResolver,
) -> Result<MergeOutcome> {
    let mut name = title.to_string();

    if store.contains(title) {
        match resolver.resolve_conflict(title)? {
            ConflictChoice::Overwrite => {
                log::debug!("overwriting existing preset `{title}`");
            }
            ConflictChoice::Rename(new_name) => {
                let new_name = validate_rename(title, &new_name)?;
                if store.contains(&new_name) {
                    log::warn!("renamed preset `{new_name}` already exists and will be replaced");
                }
                name = new_name;
            }
            ConflictChoice::Cancel => return Ok(MergeOutcome::Cancelled),
        }
    }

    let preset = Preset::from_members(name.clone(), members);
    match store.insert(name.clone(), preset) {
        Some(_) => Ok(MergeOutcome::Replaced { name }),
        None => Ok(MergeOutcome::Added { name }),
    }
}

/// Check a replacement name against the one it is meant to replace.
pub fn validate_rename(original: &str, candidate: &str) -> Result<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "The new preset name cannot be empty.".to_string(),
        ));
    }
    if trimmed == original {
        return Err(AppError::Validation(format!(
            "The new name cannot be the same as the existing name `{original}`."
        )));
    }
    Ok(trimmed.to_string())
}
