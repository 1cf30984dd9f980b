//! Configuration for the decompound engine.

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};

/// How words containing a dash are treated during knowledge ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPolicy {
    /// Skip dashed words entirely.
    Remove,
    /// Process each dash-separated sub-token independently against the same
    /// candidate atoms, keyed per sub-token.
    Split,
    /// Process the whole word unmodified.
    Ignore,
}

/// Configuration for the splitting engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Laplace smoothing factor for frequency scoring.
    /// Default: 0.01.
    pub epsilon: f64,

    /// Minimum length (in chars) of a candidate atom.
    /// Default: 5.
    pub min_word_length: usize,

    /// Minimum corpus frequency for a knowledge word to be ingested.
    /// 0 disables frequency filtering.
    /// Default: 50.
    pub min_word_count: u64,

    /// Fragments of at most this length (in chars) are glued to their right
    /// neighbor during refinement.
    /// Default: 3.
    pub prefix_length: usize,

    /// Fragments of at most this length (in chars) are glued to their left
    /// neighbor during refinement.
    /// Default: 3.
    pub suffix_length: usize,

    /// Treatment of dashed words during knowledge ingestion.
    /// Default: [`DashPolicy::Ignore`].
    pub dash_words: DashPolicy,

    /// Capitalize the first letter of each atom before frequency lookup.
    /// Useful for case-sensitive vocabularies such as German.
    /// Default: false.
    pub uppercase_first_letter: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            min_word_length: 5,
            min_word_count: 50,
            prefix_length: 3,
            suffix_length: 3,
            dash_words: DashPolicy::Ignore,
            uppercase_first_letter: false,
        }
    }
}

impl SplitterConfig {
    /// Validates the configuration.
    ///
    /// The smoothing factor must be finite and strictly positive; with
    /// `epsilon == 0` an all-unknown segmentation would score 0, outside the
    /// documented (0, 1] range.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SplitError::Config(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert!((config.epsilon - 0.01).abs() < 1e-12);
        assert_eq!(config.min_word_length, 5);
        assert_eq!(config.min_word_count, 50);
        assert_eq!(config.prefix_length, 3);
        assert_eq!(config.suffix_length, 3);
        assert_eq!(config.dash_words, DashPolicy::Ignore);
        assert!(!config.uppercase_first_letter);
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        let mut config = SplitterConfig::default();
        config.epsilon = 0.0;
        assert!(config.validate().is_err());
        config.epsilon = f64::NAN;
        assert!(config.validate().is_err());
        config.epsilon = 0.01;
        assert!(config.validate().is_ok());
    }
}
