use crate::error::{AppError, Result};
use crate::records::merge::validate_rename;
use crate::records::{ConflictChoice, ConflictResolver};
use crate::utils::parse_collection_id;

use super::{run_conflict_picker, run_text_prompt, ConflictAction, UiRoute};

/// Asks the user through the terminal whenever a preset name is taken.
#[derive(Debug, Default)]
pub struct TerminalConflictResolver;

impl ConflictResolver for TerminalConflictResolver {
    fn resolve_conflict(&mut self, name: &str) -> Result<ConflictChoice> {
        loop {
            match run_conflict_picker(name)? {
                ConflictAction::Overwrite => return Ok(ConflictChoice::Overwrite),
                ConflictAction::Cancel => return Ok(ConflictChoice::Cancel),
                ConflictAction::Rename => {
                    let hint = format!("Enter a new name for the preset (currently '{name}').");
                    let renamed = run_text_prompt(
                        UiRoute::RenamePrompt,
                        "New name",
                        &hint,
                        name,
                        |candidate| validate_rename(name, candidate),
                    )?;
                    // Backing out of the rename returns to the choice list.
                    if let Some(new_name) = renamed {
                        return Ok(ConflictChoice::Rename(new_name));
                    }
                }
            }
        }
    }
}

/// Ask for the Workshop collection to import.
pub fn prompt_collection_id() -> Result<String> {
    run_text_prompt(
        UiRoute::CollectionPrompt,
        "Collection ID",
        "Paste a Steam Workshop collection id or its URL.",
        "",
        parse_collection_id,
    )?
    .ok_or(AppError::Cancelled)
}
