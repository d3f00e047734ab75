pub mod conflict_picker;
pub mod text_prompt;

pub use conflict_picker::{run_conflict_picker, ConflictAction};
pub use text_prompt::run_text_prompt;
