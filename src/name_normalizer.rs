//! # Name Normalizer
//!
//! Turns an ingredient name into the key used to group contributions from
//! different recipes. The key is only used for grouping; display names keep
//! their original casing.
//!
//! The default implementation is a naive depluralizer, not a stemmer:
//! "onions" and "tomatoes" fold onto their singulars, but irregular plurals
//! such as "leaves" do not. Swap in another [`NameNormalizer`] to change that
//! without touching the aggregator.

use log::trace;

/// Canonicalizes ingredient names into grouping keys
pub trait NameNormalizer: Send + Sync {
    /// Produce the grouping key for a name. An empty key means "not groupable".
    fn normalize(&self, name: &str) -> String;
}

/// Lower-case, collapse whitespace, strip a trailing `s`/`es`
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDepluralizer;

impl NameNormalizer for NaiveDepluralizer {
    fn normalize(&self, name: &str) -> String {
        let collapsed = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let key = depluralize(&collapsed);
        trace!("Normalized '{}' -> '{}'", name, key);
        key
    }
}

/// Strip a trailing plural suffix from an already lower-cased string.
///
/// `es` is removed only after a sibilant or `o` ("tomatoes", "peaches",
/// "boxes"); otherwise a lone `s` is removed. Words ending in `ss` are left
/// alone, and a strip that would leave nothing is skipped.
pub fn depluralize(word: &str) -> String {
    if word.ends_with("ss") || !word.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("es") {
        let takes_es = ["s", "x", "z", "ch", "sh", "o"]
            .iter()
            .any(|ending| stem.ends_with(ending));
        if takes_es && !stem.is_empty() {
            return stem.to_string();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) if !stem.trim().is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
