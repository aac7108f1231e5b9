//! Raw model output intake.
//!
//! Walks a directory of saved model responses and turns each file into an
//! [`AssetTask`], in sorted path order so batch numbering is reproducible.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::WasfError;
use crate::models::AssetTask;

/// Load every file under `dir` whose extension is in `extensions`.
///
/// The task id is the path relative to `dir`; the display label is the file
/// stem, so `logo.png.txt` is labeled `logo.png`. Unreadable files become
/// failed tasks instead of aborting the batch.
pub fn load_raw_outputs(dir: &Path, extensions: &[String]) -> Result<Vec<AssetTask>, WasfError> {
    if !dir.is_dir() {
        return Err(WasfError::Intake(format!("{} is not a directory", dir.display())));
    }

    tracing::info!(path = %dir.display(), "Scanning raw output folder");

    let mut tasks = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let Some(ext) = ext else {
            continue;
        };
        if !extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)) {
            continue;
        }

        let task_id = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| task_id.clone());

        match std::fs::read_to_string(path) {
            Ok(text) => tasks.push(AssetTask::new(task_id, label, text)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read raw output");
                tasks.push(AssetTask::failed(task_id, label, e.to_string()));
            }
        }
    }

    tracing::info!(count = tasks.len(), "Raw outputs loaded");
    Ok(tasks)
}
