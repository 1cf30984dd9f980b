//! # Decompound - Unsupervised Compound Splitting
//!
//! Decompound splits a compound word into its constituent atoms (e.g.
//! "Haustür" → "Haus-tür") using statistics learned without any labeled
//! segmentation data: a corpus frequency table and a per-word candidate-atom
//! knowledge base derived from a distributional thesaurus.
//!
//! ## Overview
//!
//! For every query word, three knowledge-derived candidate segmentations
//! (one per thesaurus strategy column) compete with a fallback candidate
//! synthesized from the global index of known atoms. Candidates are scored
//! by the geometric mean of their atoms' smoothed corpus frequencies, and
//! the best one wins.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use decompound::{Splitter, SplitterConfig};
//!
//! // Load the frequency table and knowledge file (plain or .gz)
//! let splitter = Splitter::prepare(
//!     SplitterConfig::default(),
//!     "word_counts.tsv",
//!     "knowledge.tsv",
//! )?;
//!
//! // Split compounds
//! let result = splitter.split("Haustür")?;
//! ```
//!
//! ## Architecture
//!
//! - [`knowledge`] - Frequency table, candidate maps, single-word index
//! - [`split`] - Segmentation engine, refinement pass, fallback
//! - [`scoring`] - Geometric-mean frequency ranking
//! - [`splitter`] - The facade tying it all together
//!
//! The load phase streams both input files line by line and must complete
//! before the first query; afterwards the splitter is immutable and safe to
//! share across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod knowledge;
pub mod scoring;
pub mod split;
pub mod splitter;

// Re-export commonly used types
pub use config::{DashPolicy, SplitterConfig};
pub use error::{Result, SplitError};
pub use knowledge::{KnowledgeStore, Strategy, WordCounts};
pub use scoring::Scorer;
pub use split::{FallbackResult, Refined};
pub use splitter::{SplitReport, Splitter};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Character marking a segmentation boundary in output strings.
pub const DELIMITER: char = '-';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(DELIMITER, '-');
    }
}
