//! File-backed synonym lookup.
//!
//! The table is a JSON object mapping a word to its list of synonyms (see
//! `data/synonyms.json`). Lookups check both directions, so each pair only
//! needs to be listed once.

use cotejo_engine::SynonymLookup;
use rustc_hash::FxHashMap;
use std::path::Path;

pub struct FileSynonyms {
    table: FxHashMap<String, Vec<String>>,
}

impl FileSynonyms {
    /// Load the synonym table from disk. A missing or unparsable file
    /// degrades to an empty table with a warning; losing synonym detection
    /// should never abort a comparison.
    pub fn load(path: &Path) -> Self {
        let table = match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(table) => table,
                Err(e) => {
                    log::warn!("could not parse synonym table {}: {e}", path.display());
                    FxHashMap::default()
                }
            },
            Err(e) => {
                log::warn!("could not read synonym table {}: {e}", path.display());
                FxHashMap::default()
            }
        };
        Self { table }
    }
}

impl SynonymLookup for FileSynonyms {
    fn are_synonyms(&self, a: &str, b: &str) -> bool {
        let listed = |word: &str, other: &str| {
            self.table
                .get(word)
                .is_some_and(|synonyms| synonyms.iter().any(|s| s == other))
        };
        listed(a, b) || listed(b, a)
    }
}
