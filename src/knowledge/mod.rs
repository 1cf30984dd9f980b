//! The knowledge store: corpus frequencies and thesaurus-derived candidate
//! segmentations.
//!
//! The store is built once from two files — a word-count table and a
//! knowledge file with three candidate-atom columns — and is immutable
//! afterwards. Candidate segmentations are refined at load time, so query
//! paths only ever read.

pub mod io;

use crate::config::{DashPolicy, SplitterConfig};
use crate::error::Result;
use crate::scoring::Scorer;
use crate::split::{engine, refine};
use crate::DELIMITER;
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Number of candidate strategy columns in a knowledge file.
pub const STRATEGY_COUNT: usize = 3;

/// The three thesaurus-derived candidate columns of a knowledge file.
///
/// All three are processed identically; they differ only in how the upstream
/// trainer derived them from the distributional thesaurus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Atoms overlapping with direct thesaurus neighbors.
    Direct,
    /// Atoms overlapping with neighbors of neighbors.
    Transitive,
    /// Union of the direct and transitive columns.
    Combined,
}

impl Strategy {
    /// All strategies, in knowledge-file column order.
    pub const ALL: [Strategy; STRATEGY_COUNT] =
        [Strategy::Direct, Strategy::Transitive, Strategy::Combined];

    /// Zero-based column index of this strategy.
    pub fn index(self) -> usize {
        match self {
            Strategy::Direct => 0,
            Strategy::Transitive => 1,
            Strategy::Combined => 2,
        }
    }
}

/// Corpus frequency table: word → occurrence count, with the derived total.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
    total: u64,
}

impl WordCounts {
    /// Records a count for a word. Re-inserting a word overwrites its count
    /// but still accumulates the total, matching line-by-line ingestion of
    /// a table with duplicate rows.
    pub fn insert(&mut self, word: String, count: u64) {
        self.counts.insert(word, count);
        self.total += count;
    }

    /// Count for a word, 0 when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Count for a word, `None` when absent.
    pub fn lookup(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }
}

/// The loaded knowledge: frequencies, one candidate map per strategy, and
/// the single-word index feeding the unknown-word fallback.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    counts: WordCounts,
    candidates: [HashMap<String, String>; STRATEGY_COUNT],
    single_words: BTreeSet<String>,
}

impl KnowledgeStore {
    /// Loads the store from a word-count file and a knowledge file.
    ///
    /// Both files may be gzip-compressed (`.gz` suffix). The word counts
    /// must load first: candidate ingestion filters on them and refinement
    /// scores against them.
    pub fn load(
        word_count_path: &Path,
        knowledge_path: &Path,
        config: &SplitterConfig,
    ) -> Result<Self> {
        let mut store = Self::default();
        info!("reading word counts from {}", word_count_path.display());
        store.load_word_counts(word_count_path)?;
        info!("reading knowledge from {}", knowledge_path.display());
        store.load_candidates(knowledge_path, config)?;
        info!("extracting single words");
        store.build_single_word_index();
        info!(
            "knowledge loaded: {} words, {} candidate entries, {} single words",
            store.counts.vocabulary_size(),
            store.candidates[Strategy::Direct.index()].len(),
            store.single_words.len()
        );
        Ok(store)
    }

    /// Streams `<word>\t<count>` lines into the frequency table.
    fn load_word_counts(&mut self, path: &Path) -> Result<()> {
        io::for_each_line(path, |number, line| {
            let line = line.trim();
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                warn!(
                    "{}:{number}: expected <word>\\t<count>, skipping",
                    path.display()
                );
                return Ok(());
            }
            let count: u64 = match fields[1].parse() {
                Ok(count) => count,
                Err(_) => {
                    warn!(
                        "{}:{number}: non-integer count {:?}, skipping",
                        path.display(),
                        fields[1]
                    );
                    return Ok(());
                }
            };
            self.counts.insert(fields[0].to_string(), count);
            Ok(())
        })
    }

    /// Streams `<word>\t<col1>\t<col2>\t<col3>` lines into the three
    /// candidate maps, applying the configured dash policy per word.
    fn load_candidates(&mut self, path: &Path, config: &SplitterConfig) -> Result<()> {
        io::for_each_line(path, |number, line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 1 + STRATEGY_COUNT {
                warn!(
                    "{}:{number}: expected a word and {STRATEGY_COUNT} candidate columns, skipping",
                    path.display()
                );
                return Ok(());
            }
            let word = fields[0];
            if discard_word(&self.counts, word, config) {
                return Ok(());
            }
            for strategy in Strategy::ALL {
                let atoms: Vec<&str> = fields[1 + strategy.index()].split(' ').collect();
                let map = &mut self.candidates[strategy.index()];
                match config.dash_words {
                    DashPolicy::Remove if word.contains(DELIMITER) => {}
                    DashPolicy::Split => {
                        for sub_token in word.split(DELIMITER) {
                            insert_candidate(map, &self.counts, sub_token, &atoms, config)?;
                        }
                    }
                    _ => insert_candidate(map, &self.counts, word, &atoms, config)?,
                }
            }
            Ok(())
        })
    }

    /// Collects every atom appearing in a delimited first-column candidate.
    fn build_single_word_index(&mut self) {
        for segmentation in self.candidates[Strategy::Direct.index()].values() {
            if segmentation.contains(DELIMITER) {
                for piece in segmentation.split(DELIMITER) {
                    self.single_words.insert(piece.to_string());
                }
            }
        }
    }

    /// The frequency table.
    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    /// Stored candidate segmentation for a word under one strategy.
    pub fn candidate(&self, strategy: Strategy, word: &str) -> Option<&str> {
        self.candidates[strategy.index()]
            .get(word)
            .map(String::as_str)
    }

    /// The single-word index feeding the fallback.
    pub fn single_words(&self) -> &BTreeSet<String> {
        &self.single_words
    }
}

/// True when a knowledge word should not be ingested: nothing left after
/// removing dashes, or too infrequent while frequency filtering is on.
fn discard_word(counts: &WordCounts, word: &str, config: &SplitterConfig) -> bool {
    if word.chars().all(|c| c == DELIMITER) {
        return true;
    }
    if config.min_word_count == 0 {
        return false;
    }
    counts.get(word) < config.min_word_count
}

/// Runs the engine for one word against one column's atoms and stores the
/// refined result. A `None` from the engine stores nothing.
fn insert_candidate(
    map: &mut HashMap<String, String>,
    counts: &WordCounts,
    word: &str,
    atoms: &[&str],
    config: &SplitterConfig,
) -> Result<()> {
    let raw = match engine::generate_compound(word, atoms, config) {
        Some(raw) => raw,
        None => return Ok(()),
    };
    let scorer = Scorer::new(counts, config);
    let refined = refine::append_suffix_and_prefix(&raw, &scorer, config)?;
    debug!("candidate: {word}\t{raw}\t{}", refined.segmentation);
    map.insert(word.to_string(), refined.segmentation);
    Ok(())
}
