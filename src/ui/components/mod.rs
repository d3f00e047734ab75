pub mod layout;
pub mod terminal;

pub use layout::{centered_rect, split_vertical};
pub use terminal::TerminalGuard;
