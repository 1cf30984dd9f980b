//! Frequency-based ranking of candidate segmentations.

use crate::config::SplitterConfig;
use crate::error::{Result, SplitError};
use crate::knowledge::WordCounts;
use crate::DELIMITER;

/// Scores a segmentation by the geometric mean of the Laplace-smoothed
/// relative corpus frequencies of its atoms.
///
/// With a positive smoothing factor every score lies in (0, 1], so even a
/// segmentation made entirely of unknown atoms ranks above nothing at all.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    counts: &'a WordCounts,
    epsilon: f64,
    uppercase_first_letter: bool,
}

impl<'a> Scorer<'a> {
    /// Creates a scorer over the given word counts.
    pub fn new(counts: &'a WordCounts, config: &SplitterConfig) -> Self {
        Self {
            counts,
            epsilon: config.epsilon,
            uppercase_first_letter: config.uppercase_first_letter,
        }
    }

    /// Smoothed relative frequency of a single atom:
    /// `(count + ε) / (total + ε · vocabulary)`.
    fn atom_frequency(&self, atom: &str) -> Result<f64> {
        let vocabulary = self.counts.vocabulary_size();
        if vocabulary == 0 {
            return Err(SplitError::EmptyVocabulary);
        }
        let count = if self.uppercase_first_letter {
            self.counts.get(&capitalize(atom))
        } else {
            self.counts.get(atom)
        };
        let denominator = self.counts.total() as f64 + self.epsilon * vocabulary as f64;
        Ok((count as f64 + self.epsilon) / denominator)
    }

    /// Scores a delimiter-joined segmentation.
    pub fn score(&self, segmentation: &str) -> Result<f64> {
        let mut product = 1.0;
        let mut atoms = 0usize;
        for atom in segmentation.split(DELIMITER) {
            product *= self.atom_frequency(atom)?;
            atoms += 1;
        }
        if atoms == 0 {
            return Err(SplitError::EmptySegmentation);
        }
        Ok(product.powf(1.0 / atoms as f64))
    }

    /// Returns the index and score of the best-scoring candidate.
    ///
    /// Ties keep the earliest candidate; an empty slice yields `Ok(None)`.
    pub fn best_candidate<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Option<(usize, f64)>> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.score(candidate.as_ref())?;
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        Ok(best)
    }
}

/// Uppercases the first char of an atom, as frequency tables for
/// case-sensitive languages key nouns by their capitalized form.
fn capitalize(atom: &str) -> String {
    let mut chars = atom.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> WordCounts {
        let mut counts = WordCounts::default();
        for (word, count) in pairs {
            counts.insert(word.to_string(), *count);
        }
        counts
    }

    #[test]
    fn test_score_known_value() {
        let counts = counts(&[("Haus", 100), ("Tür", 80)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        // single atom: (100 + 0.01) / (180 + 0.01 * 2)
        let expected = 100.01 / 180.02;
        let score = scorer.score("Haus").unwrap();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_geometric_mean() {
        let counts = counts(&[("Haus", 100), ("Tür", 80)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let haus = scorer.score("Haus").unwrap();
        let tuer = scorer.score("Tür").unwrap();
        let both = scorer.score("Haus-Tür").unwrap();
        assert!((both - (haus * tuer).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_score_in_unit_interval() {
        let counts = counts(&[("Haus", 100), ("Tür", 80)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        for segmentation in ["Haus", "Haus-Tür", "xyz", "xyz-abc-def"] {
            let score = scorer.score(segmentation).unwrap();
            assert!(score > 0.0 && score <= 1.0, "score {score} out of range");
        }
    }

    #[test]
    fn test_unknown_atom_gets_smoothed_frequency() {
        let counts = counts(&[("Haus", 100)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let expected = 0.01 / 100.01;
        let score = scorer.score("Wagen").unwrap();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uppercase_first_letter_lookup() {
        let counts = counts(&[("Tür", 80)]);
        let mut config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let lowercase_miss = scorer.score("tür").unwrap();
        config.uppercase_first_letter = true;
        let scorer = Scorer::new(&counts, &config);
        let capitalized_hit = scorer.score("tür").unwrap();
        assert!(capitalized_hit > lowercase_miss);
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let counts = WordCounts::default();
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        assert!(matches!(
            scorer.score("Haus"),
            Err(SplitError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_best_candidate_argmax() {
        let counts = counts(&[("Haus", 100), ("Tür", 80)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let candidates = ["xyz", "Haus-Tür", "Haus"];
        let (index, score) = scorer.best_candidate(&candidates).unwrap().unwrap();
        assert_eq!(index, 2);
        assert!(score > 0.0);
    }

    #[test]
    fn test_best_candidate_tie_keeps_earliest() {
        let counts = counts(&[("Haus", 100)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let candidates = ["Haus", "Haus"];
        let (index, _) = scorer.best_candidate(&candidates).unwrap().unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_best_candidate_empty_input() {
        let counts = counts(&[("Haus", 100)]);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        let empty: [&str; 0] = [];
        assert!(scorer.best_candidate(&empty).unwrap().is_none());
    }
}
