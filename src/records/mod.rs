use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod backup;
pub mod merge;
pub mod store;

pub use backup::{backup, backup_target, backup_to, next_backup_path};
pub use merge::{merge, ConflictChoice, ConflictResolver, MergeOutcome};
pub use store::{load_store, save_store};

/// Value written to `newAction` for presets created by this tool.
pub const DEFAULT_NEW_ACTION: &str = "disable";

/// One entry of `addonpresets.txt`.
///
/// Fields the game adds in the future are kept in `extra` so rewriting the
/// store never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub disabled: Vec<String>,
    #[serde(default)]
    pub enabled: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "newAction", default = "default_new_action")]
    pub new_action: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_new_action() -> String {
    DEFAULT_NEW_ACTION.to_string()
}

impl Preset {
    /// Build a fresh preset enabling every collection member.
    pub fn from_members(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            disabled: Vec::new(),
            enabled: members,
            name: name.into(),
            new_action: default_new_action(),
            extra: Map::new(),
        }
    }
}

/// Insertion-ordered map of preset name to preset, mirroring the file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetStore {
    presets: IndexMap<String, Preset>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.presets.iter().map(|(name, preset)| (name.as_str(), preset))
    }

    /// Insert under `name`, appending at the end of the map.
    ///
    /// An existing entry with the same key is removed first, so a replaced
    /// preset moves to the end just like a freshly added one.
    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) -> Option<Preset> {
        let name = name.into();
        let previous = self.presets.shift_remove(&name);
        self.presets.insert(name, preset);
        previous
    }
}
