pub mod components;
pub mod flows;
pub mod navigation;
pub mod resolver;
pub mod styles;

pub use components::TerminalGuard;
pub use flows::{run_conflict_picker, run_text_prompt, ConflictAction};
pub use navigation::UiRoute;
pub use resolver::{prompt_collection_id, TerminalConflictResolver};
