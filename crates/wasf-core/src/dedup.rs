use std::collections::HashMap;

use crate::canonical::canonical_key;
use crate::models::BatchEntry;

/// Append `" - NNN"` to every name whose canonical key is shared with another
/// name in `names`.
///
/// Numbering is 1-based per key group and follows input order. Names with a
/// unique key, or a blank key, are only whitespace-collapsed.
pub fn apply_suffixes(names: &[String]) -> Vec<String> {
    let keys: Vec<String> = names.iter().map(|name| canonical_key(name)).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys.iter().filter(|key| !key.is_empty()) {
        *counts.entry(key.as_str()).or_default() += 1;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    names
        .iter()
        .zip(&keys)
        .map(|(name, key)| {
            let base = name.split_whitespace().collect::<Vec<_>>().join(" ");
            if base.is_empty() || counts.get(key.as_str()).copied().unwrap_or(0) <= 1 {
                return base;
            }
            let index = seen.entry(key.as_str()).or_default();
            *index += 1;
            format!("{base} - {index:03}")
        })
        .collect()
}

/// Disambiguate names across a whole batch, English and Arabic lists
/// independently. Must run once, after every entry is final.
pub fn apply_duplicate_suffixes(mut entries: Vec<BatchEntry>) -> Vec<BatchEntry> {
    let english: Vec<String> = entries.iter().map(|e| e.asset.english_name.clone()).collect();
    let arabic: Vec<String> = entries.iter().map(|e| e.asset.arabic_name.clone()).collect();

    let english = apply_suffixes(&english);
    let arabic = apply_suffixes(&arabic);

    for ((entry, en), ar) in entries.iter_mut().zip(english).zip(arabic) {
        entry.asset.english_name = en;
        entry.asset.arabic_name = ar;
    }
    entries
}
