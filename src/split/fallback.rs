//! Fallback segmentation for words absent from the knowledge base.
//!
//! Candidate atoms are synthesized by scanning the single-word index for
//! substrings of the query word, keeping only maximal (non-nested) matches.

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::scoring::Scorer;
use crate::split::engine::{self, contains_fold, equals_fold};
use crate::split::refine;
use std::collections::BTreeSet;

/// Outcome of the unknown-word fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResult {
    /// The refined segmentation, or the word unchanged when no candidate
    /// atoms were found.
    pub segmentation: String,
    /// The maximal candidate atoms that fed the segmentation. Diagnostic
    /// only; the split decision never reads this.
    pub atoms: Vec<String>,
    /// Short fragments absorbed during refinement (diagnostic).
    pub absorbed: usize,
}

/// Segments `word` using atoms harvested from the single-word index.
pub fn unknown_word_compounding(
    word: &str,
    single_words: &BTreeSet<String>,
    scorer: &Scorer<'_>,
    config: &SplitterConfig,
) -> Result<FallbackResult> {
    let mut candidates: Vec<&str> = Vec::new();
    for atom in single_words {
        if contains_fold(word, atom) && !equals_fold(word, atom) {
            candidates.push(atom);
        }
    }
    // keep only maximal matches: an atom nested inside another candidate
    // contributes nothing the larger atom does not
    let maximal: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|atom| {
            !candidates
                .iter()
                .any(|other| contains_fold(other, atom) && !equals_fold(other, atom))
        })
        .collect();

    let atoms: Vec<String> = maximal.iter().map(|atom| atom.to_string()).collect();
    match engine::generate_compound(word, &maximal, config) {
        Some(raw) => {
            let refined = refine::append_suffix_and_prefix(&raw, scorer, config)?;
            Ok(FallbackResult {
                segmentation: refined.segmentation,
                atoms,
                absorbed: refined.absorbed,
            })
        }
        None => Ok(FallbackResult {
            segmentation: word.to_string(),
            atoms,
            absorbed: 0,
        }),
    }
}
