pub mod text;
pub mod time;

pub use text::parse_collection_id;
pub use time::current_human_timestamp;
