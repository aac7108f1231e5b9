use serde::{Deserialize, Serialize};

use wasf_parse::text::{split_tags, TAG_JOINER};
use wasf_parse::Metadata;

/// One asset awaiting parsing: the model's raw response, or the reason the
/// upstream call produced none.
#[derive(Debug, Clone)]
pub struct AssetTask {
    pub task_id: String,
    pub display_label: String,
    pub output: Result<String, String>,
}

impl AssetTask {
    pub fn new(
        task_id: impl Into<String>,
        display_label: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            display_label: display_label.into(),
            output: Ok(raw_text.into()),
        }
    }

    /// A task whose model call failed upstream.
    pub fn failed(
        task_id: impl Into<String>,
        display_label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            display_label: display_label.into(),
            output: Err(message.into()),
        }
    }
}

/// Final per-asset metadata. Tags are deduplicated and capped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAsset {
    pub english_name: String,
    pub arabic_name: String,
    pub tags: Vec<String>,
}

impl ParsedAsset {
    /// Build from parser output, keeping at most `max_tags` tags.
    pub fn from_metadata(meta: Metadata, max_tags: usize) -> Self {
        let mut tags = split_tags(&meta.tags);
        tags.truncate(max_tags);
        Self {
            english_name: meta.english_name,
            arabic_name: meta.arabic_name,
            tags,
        }
    }

    pub fn tags_joined(&self) -> String {
        self.tags.join(TAG_JOINER)
    }
}

/// A parsed asset in its batch, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub task_id: String,
    pub display_label: String,
    pub asset: ParsedAsset,
    /// Raw text the asset was parsed from, kept for diagnostics.
    pub raw_text: String,
    /// The asset came from a corrective rewrite.
    pub corrected: bool,
    /// Upstream failure message, if the model produced no output.
    pub error: Option<String>,
}

/// Flat output row handed to spreadsheet and HTTP writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub task_id: String,
    pub display_label: String,
    pub english_name: String,
    pub arabic_name: String,
    pub tags: String,
    pub raw_text: String,
}

impl AssetRecord {
    pub const COLUMNS: [&'static str; 4] = [
        "Uploaded file name",
        "Asset name (English)",
        "Asset name (Arabic)",
        "Tags",
    ];

    /// Cells in `COLUMNS` order.
    pub fn row(&self) -> [&str; 4] {
        [
            self.display_label.as_str(),
            self.english_name.as_str(),
            self.arabic_name.as_str(),
            self.tags.as_str(),
        ]
    }
}

impl From<BatchEntry> for AssetRecord {
    fn from(entry: BatchEntry) -> Self {
        let tags = match &entry.error {
            Some(message) => format!("Error: {message}"),
            None => entry.asset.tags_joined(),
        };
        Self {
            task_id: entry.task_id,
            display_label: entry.display_label,
            english_name: entry.asset.english_name,
            arabic_name: entry.asset.arabic_name,
            tags,
            raw_text: entry.raw_text,
        }
    }
}
