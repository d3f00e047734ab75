/// Screens shown during an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRoute {
    CollectionPrompt,
    ConflictPicker,
    RenamePrompt,
}

impl UiRoute {
    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            UiRoute::CollectionPrompt => "Import Collection",
            UiRoute::ConflictPicker => "Preset Already Exists",
            UiRoute::RenamePrompt => "Rename Preset",
        }
    }
}
