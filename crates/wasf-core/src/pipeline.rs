//! Per-asset resolution and the batch pass.
//!
//! Parsing and scoring are pure. The only side channel is the optional
//! [`Corrector`], which the caller supplies to re-ask the model once when the
//! quality gate rejects a parse.

use std::convert::Infallible;

use wasf_parse::{parse_metadata, Metadata};

use crate::config::AppConfig;
use crate::dedup::apply_duplicate_suffixes;
use crate::models::{AssetTask, BatchEntry, ParsedAsset};
use crate::quality::assess;

/// Obtains a rewritten model response for an asset whose first parse fell
/// short. Implementations own any network call, timeout and retry policy.
pub trait Corrector {
    type Error: std::error::Error;

    /// Ask for a corrected response. `prompt` is the enforcement text from
    /// the correction config.
    fn correct(&self, task: &AssetTask, previous: &str, prompt: &str) -> Result<String, Self::Error>;

    /// Whether this corrector can be asked at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Corrector for callers that never re-ask the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl Corrector for NoCorrection {
    type Error = Infallible;

    fn correct(&self, _task: &AssetTask, _previous: &str, _prompt: &str) -> Result<String, Self::Error> {
        Ok(String::new())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Parse one task, asking `corrector` for at most one rewrite when the
/// quality gate fails.
///
/// A rewrite replaces the first parse wholesale, and only when its tag
/// string is non-empty. Fields are never merged across the two attempts.
pub fn resolve_asset<C: Corrector>(task: &AssetTask, config: &AppConfig, corrector: &C) -> BatchEntry {
    let raw = match &task.output {
        Ok(raw) => raw,
        Err(message) => {
            tracing::warn!(task = %task.task_id, error = %message, "Upstream failure, recording sentinel");
            return BatchEntry {
                task_id: task.task_id.clone(),
                display_label: task.display_label.clone(),
                asset: ParsedAsset::default(),
                raw_text: String::new(),
                corrected: false,
                error: Some(message.clone()),
            };
        }
    };

    let mut meta = parse_metadata(raw);
    let mut raw_text = raw.clone();
    let mut corrected = false;

    let verdict = assess(&meta.arabic_name, &meta.tags, &config.quality);
    if verdict.needs_correction() {
        tracing::warn!(
            task = %task.task_id,
            reasons = ?verdict.shortfalls(),
            "Parsed output needs correction"
        );
        if config.correction.enabled && corrector.is_available() {
            if let Some((retry_meta, retry_raw)) = request_correction(task, raw, config, corrector) {
                meta = retry_meta;
                raw_text = retry_raw;
                corrected = true;
            }
        }
    }

    BatchEntry {
        task_id: task.task_id.clone(),
        display_label: task.display_label.clone(),
        asset: ParsedAsset::from_metadata(meta, config.tags.max_tags),
        raw_text,
        corrected,
        error: None,
    }
}

/// One corrective round-trip. Returns the replacement only if it carries tags.
fn request_correction<C: Corrector>(
    task: &AssetTask,
    previous: &str,
    config: &AppConfig,
    corrector: &C,
) -> Option<(Metadata, String)> {
    let rewritten = match corrector.correct(task, previous, &config.correction.prompt) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(task = %task.task_id, error = %e, "Correction request failed, keeping first parse");
            return None;
        }
    };

    let meta = parse_metadata(&rewritten);
    if meta.tags.is_empty() {
        tracing::debug!(task = %task.task_id, "Correction produced no tags, keeping first parse");
        return None;
    }
    Some((meta, rewritten))
}

/// Resolve every task, then disambiguate duplicate names across the batch.
///
/// Output order matches `tasks`.
pub fn process_batch<C: Corrector>(tasks: &[AssetTask], config: &AppConfig, corrector: &C) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = tasks
        .iter()
        .map(|task| resolve_asset(task, config, corrector))
        .collect();

    let corrected = entries.iter().filter(|e| e.corrected).count();
    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    tracing::info!(
        total = entries.len(),
        corrected,
        failed,
        "Batch parsed, applying duplicate suffixes"
    );

    apply_duplicate_suffixes(entries)
}
