use crate::error::Result;

pub mod decode;
pub mod workshop;

pub use workshop::SteamWorkshop;

/// Remote source resolving a Workshop id into a preset title and its members.
pub trait Workshop {
    /// Title of the item, verified to belong to the configured app.
    fn resolve_title(&self, id: &str) -> Result<String>;

    /// Ordered member ids of the collection.
    fn resolve_members(&self, id: &str) -> Result<Vec<String>>;
}
