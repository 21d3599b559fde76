//! Text normalization applied before tagging and grading.
//!
//! Both the learner's attempt and the reference translation go through the
//! same normalization so that capitalization, stray punctuation, and missing
//! accents never show up as edit operations.

/// Punctuation stripped outright before grading.
const PUNCTUATION: &[char] = &['.', ',', '\'', ':', ';', '!', '?'];

/// Accented characters folded to their bare forms, so "está" grades the same
/// as "esta". Learners typing without a Spanish keyboard layout shouldn't be
/// penalized for missing accents.
fn fold_diacritic(c: char) -> char {
    match c {
        'ü' => 'u',
        'ñ' => 'n',
        'é' => 'e',
        'á' => 'a',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        _ => c,
    }
}

/// Normalize text for grading purposes: lowercase, strip the fixed
/// punctuation set, fold diacritics, and collapse whitespace.
pub fn normalize_for_grading(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .map(fold_diacritic)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
