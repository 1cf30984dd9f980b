//! Interval-based segmentation of a word from candidate atoms.
//!
//! The engine turns a word and a list of candidate atoms into a
//! delimiter-joined segmentation: every case-insensitive occurrence of a
//! valid atom contributes its start and end offsets as boundary points, and
//! the word is cut at the union of all boundaries. Overlapping atom spans are
//! never merged; they simply contribute overlapping boundaries.

use crate::config::SplitterConfig;
use crate::DELIMITER;
use std::collections::{BTreeSet, HashSet};

/// Lowercases a string one char at a time, keeping a 1:1 correspondence
/// between input and output positions so offsets into the folded form map
/// directly onto the original.
fn fold_chars(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Case-insensitive equality.
pub(crate) fn equals_fold(a: &str, b: &str) -> bool {
    fold_chars(a) == fold_chars(b)
}

/// Case-insensitive substring test.
pub(crate) fn contains_fold(haystack: &str, needle: &str) -> bool {
    find_fold(&fold_chars(haystack), &fold_chars(needle)).is_some()
}

/// True if the string has at least one cased char and no lowercase chars.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// First occurrence of `needle` in `haystack`, as a char offset.
fn find_fold(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| &haystack[start..start + needle.len()] == needle)
}

/// Filters candidate atoms down to the ones usable as split evidence:
/// long enough, case-insensitively different from the word, not entirely
/// uppercase, and contained in the word. Duplicates keep their first
/// occurrence so downstream ordering is reproducible.
fn valid_atoms<'a>(word: &str, atoms: &[&'a str], min_word_length: usize) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut valid = Vec::new();
    for &atom in atoms {
        if atom.chars().count() < min_word_length {
            continue;
        }
        if equals_fold(atom, word) || is_all_uppercase(atom) || !contains_fold(word, atom) {
            continue;
        }
        if seen.insert(atom) {
            valid.push(atom);
        }
    }
    valid
}

/// Splits `word` at the boundaries of every valid candidate atom.
///
/// Returns `None` when no atom survives filtering — a normal outcome meaning
/// "no segmentation", not an error. The output with delimiters removed always
/// equals `word` char for char.
pub fn generate_compound(word: &str, atoms: &[&str], config: &SplitterConfig) -> Option<String> {
    let mut valid = valid_atoms(word, atoms, config.min_word_length);
    if valid.is_empty() {
        return None;
    }
    // longest atoms first; stable, so equal lengths keep input order
    valid.sort_by_key(|atom| std::cmp::Reverse(atom.chars().count()));

    let word_chars: Vec<char> = word.chars().collect();
    let word_fold = fold_chars(word);
    let mut boundaries = BTreeSet::new();
    for atom in valid {
        // containment was established during filtering; re-verify before
        // trusting the offset
        if let Some(start) = find_fold(&word_fold, &fold_chars(atom)) {
            boundaries.insert(start);
            boundaries.insert(start + atom.chars().count());
        }
    }

    let mut out = String::with_capacity(word.len() + boundaries.len());
    let mut prev = 0;
    for &offset in &boundaries {
        if offset == 0 {
            continue;
        }
        out.extend(&word_chars[prev..offset]);
        out.push(DELIMITER);
        prev = offset;
    }
    out.extend(&word_chars[prev..]);
    if out.ends_with(DELIMITER) {
        out.pop();
    }
    Some(out)
}
