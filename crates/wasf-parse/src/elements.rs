use serde::{Deserialize, Serialize};

/// Metadata recovered from one raw model response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// English asset name, empty when none was found.
    pub english_name: String,
    /// Arabic asset name, empty when none was found.
    pub arabic_name: String,
    /// Normalized tags joined with `", "`.
    pub tags: String,
}

impl Metadata {
    pub fn is_empty(&self) -> bool {
        self.english_name.is_empty() && self.arabic_name.is_empty() && self.tags.is_empty()
    }
}
