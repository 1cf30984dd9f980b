//! The splitter facade: prepare once from the input files, then serve
//! split queries against the immutable knowledge store.

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::knowledge::{KnowledgeStore, Strategy};
use crate::scoring::Scorer;
use crate::split::fallback::{self, FallbackResult};
use crate::DELIMITER;
use std::path::Path;

/// Candidate labels in ranking order: the three knowledge strategies, then
/// the fallback.
const CANDIDATE_LABELS: [&str; 4] = ["C1", "C2", "C3", "U"];

/// Label reported when no candidate carries a split.
const WORD_LABEL: &str = "W";

/// Compound word splitter over a loaded knowledge store.
///
/// A `Splitter` is immutable after [`Splitter::prepare`]; queries take
/// `&self` and touch no shared mutable state, so a prepared splitter can be
/// shared freely across threads.
pub struct Splitter {
    config: SplitterConfig,
    store: KnowledgeStore,
}

/// Diagnostic view of one split decision, as emitted by the batch driver.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// The query word.
    pub word: String,
    /// Label of the winning candidate (`C1`/`C2`/`C3`/`U`, or `W` when no
    /// candidate exists).
    pub winner_label: &'static str,
    /// The winning segmentation.
    pub winner: String,
    /// Label of the first candidate containing a delimiter (`W` when none
    /// does) — a secondary heuristic kept for evaluation tooling.
    pub first_dash_label: &'static str,
    /// The first delimited candidate, or the word itself.
    pub first_dash: String,
    /// All four raw candidates in strategy order.
    pub candidates: [String; 4],
    /// Atoms the fallback harvested from the single-word index.
    pub fallback_atoms: Vec<String>,
    /// Short fragments absorbed while refining the fallback candidate.
    pub fallback_absorbed: usize,
    /// Corpus frequency of the query word, `None` when unknown.
    pub frequency: Option<u64>,
}

impl Splitter {
    /// Validates the configuration and loads the knowledge store.
    ///
    /// Must complete before any [`split`](Self::split) call; there is no
    /// partial-load querying.
    pub fn prepare<P, Q>(config: SplitterConfig, word_counts: P, knowledge: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        config.validate()?;
        let store = KnowledgeStore::load(word_counts.as_ref(), knowledge.as_ref(), &config)?;
        Ok(Self { config, store })
    }

    /// The active configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// The loaded knowledge store.
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Assembles the four candidates for a word: one per knowledge strategy
    /// (the word itself where a strategy has no entry) plus the fallback.
    fn candidates(&self, word: &str) -> Result<([String; 4], FallbackResult)> {
        let scorer = Scorer::new(self.store.counts(), &self.config);
        let fallback = fallback::unknown_word_compounding(
            word,
            self.store.single_words(),
            &scorer,
            &self.config,
        )?;
        let mut all: [String; 4] = Default::default();
        for strategy in Strategy::ALL {
            all[strategy.index()] = self
                .store
                .candidate(strategy, word)
                .unwrap_or(word)
                .to_string();
        }
        all[3] = fallback.segmentation.clone();
        Ok((all, fallback))
    }

    /// Returns the best-scoring segmentation for `word`, or `None` when no
    /// candidate exists.
    ///
    /// The winner is returned even when it textually equals the unsplit
    /// word; callers wanting "was anything split" compare with the query.
    pub fn split(&self, word: &str) -> Result<Option<String>> {
        let (candidates, _) = self.candidates(word)?;
        let scorer = Scorer::new(self.store.counts(), &self.config);
        match scorer.best_candidate(&candidates)? {
            Some((index, _)) => Ok(candidates.into_iter().nth(index)),
            None => Ok(None),
        }
    }

    /// Runs a split and returns the full diagnostic record.
    pub fn split_report(&self, word: &str) -> Result<SplitReport> {
        let (candidates, fallback) = self.candidates(word)?;
        let scorer = Scorer::new(self.store.counts(), &self.config);
        let (winner_label, winner) = match scorer.best_candidate(&candidates)? {
            Some((index, _)) => (CANDIDATE_LABELS[index], candidates[index].clone()),
            None => (WORD_LABEL, word.to_string()),
        };
        let (first_dash_label, first_dash) =
            match candidates.iter().position(|c| c.contains(DELIMITER)) {
                Some(index) => (CANDIDATE_LABELS[index], candidates[index].clone()),
                None => (WORD_LABEL, word.to_string()),
            };
        Ok(SplitReport {
            word: word.to_string(),
            winner_label,
            winner,
            first_dash_label,
            first_dash,
            candidates,
            fallback_atoms: fallback.atoms,
            fallback_absorbed: fallback.absorbed,
            frequency: self.store.counts().lookup(word),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_splitter_is_send_and_sync() {
        assert_send_sync::<Splitter>();
    }
}
