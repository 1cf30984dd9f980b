//! Refinement of raw segmentations: fragments at or below a length threshold
//! are absorbed into a neighboring atom instead of standing alone.
//!
//! Gluing left (`append_suffix`) and gluing right (`append_prefix`) do not
//! commute, so both orders are computed and the higher-scoring one wins.

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::scoring::Scorer;
use crate::DELIMITER;

/// A refined segmentation together with the number of short fragments that
/// were glued to a neighbor while producing it.
///
/// The absorbed count is diagnostic only; it is returned per call rather
/// than accumulated in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refined {
    /// Delimiter-joined segmentation after refinement.
    pub segmentation: String,
    /// Short fragments glued to a neighbor along the winning direction.
    pub absorbed: usize,
}

/// Glues fragments of at most `suffix_length` chars to their left neighbor.
///
/// Returns the rebuilt segmentation and the number of glued fragments.
pub fn append_suffix(segmentation: &str, suffix_length: usize) -> (String, usize) {
    let mut out = String::with_capacity(segmentation.len());
    let mut absorbed = 0;
    for fragment in segmentation.split(DELIMITER) {
        if fragment.chars().count() > suffix_length {
            out.push(DELIMITER);
        } else {
            absorbed += 1;
        }
        out.push_str(fragment);
    }
    (out.trim_matches(DELIMITER).to_string(), absorbed)
}

/// Glues fragments of at most `prefix_length` chars to their right neighbor.
///
/// Returns the rebuilt segmentation and the number of glued fragments.
pub fn append_prefix(segmentation: &str, prefix_length: usize) -> (String, usize) {
    let mut out = String::with_capacity(segmentation.len());
    let mut absorbed = 0;
    for fragment in segmentation.split(DELIMITER) {
        out.push_str(fragment);
        if fragment.chars().count() > prefix_length {
            out.push(DELIMITER);
        } else {
            absorbed += 1;
        }
    }
    let trimmed = match out.strip_suffix(DELIMITER) {
        Some(stripped) => stripped.to_string(),
        None => out,
    };
    (trimmed, absorbed)
}

/// Applies both refinement orders and keeps the higher-scoring result,
/// preferring suffix-then-prefix on a tie.
pub fn append_suffix_and_prefix(
    segmentation: &str,
    scorer: &Scorer<'_>,
    config: &SplitterConfig,
) -> Result<Refined> {
    let (prefixed, prefixed_absorbed) = append_prefix(segmentation, config.prefix_length);
    let (sp, sp_absorbed) = append_suffix(&prefixed, config.suffix_length);

    let (suffixed, suffixed_absorbed) = append_suffix(segmentation, config.suffix_length);
    let (ps, ps_absorbed) = append_prefix(&suffixed, config.prefix_length);

    let sp_score = scorer.score(&sp)?;
    let ps_score = scorer.score(&ps)?;
    if sp_score > ps_score {
        Ok(Refined {
            segmentation: sp,
            absorbed: prefixed_absorbed + sp_absorbed,
        })
    } else {
        Ok(Refined {
            segmentation: ps,
            absorbed: suffixed_absorbed + ps_absorbed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::WordCounts;

    fn atom_count(segmentation: &str) -> usize {
        segmentation.split(DELIMITER).count()
    }

    #[test]
    fn test_append_suffix_glues_left() {
        let (result, absorbed) = append_suffix("Straße-n-bahn", 3);
        assert_eq!(result, "Straßen-bahn");
        assert_eq!(absorbed, 1);
    }

    #[test]
    fn test_append_prefix_glues_right() {
        let (result, absorbed) = append_prefix("Straße-n-bahn", 3);
        assert_eq!(result, "Straße-nbahn");
        assert_eq!(absorbed, 1);
    }

    #[test]
    fn test_long_fragments_untouched() {
        let (result, absorbed) = append_suffix("Haus-Tür", 3);
        assert_eq!(result, "Haus-Tür");
        assert_eq!(absorbed, 0);
        let (result, absorbed) = append_prefix("Haus-Tür", 3);
        assert_eq!(result, "Haus-Tür");
        assert_eq!(absorbed, 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // a fragment of exactly the threshold length is glued
        let (result, _) = append_suffix("Haus-tür", 3);
        assert_eq!(result, "Haustür");
        let (result, _) = append_prefix("alt-Haus", 3);
        assert_eq!(result, "altHaus");
    }

    #[test]
    fn test_leading_short_fragment() {
        let (result, absorbed) = append_suffix("ab-cdef", 3);
        assert_eq!(result, "ab-cdef");
        assert_eq!(absorbed, 1);
        let (result, _) = append_prefix("ab-cdef", 3);
        assert_eq!(result, "abcdef");
    }

    #[test]
    fn test_direction_chosen_by_score() {
        let mut counts = WordCounts::default();
        counts.insert("Straßen".to_string(), 100);
        counts.insert("bahn".to_string(), 100);
        counts.insert("Straße".to_string(), 1);
        let config = SplitterConfig {
            min_word_count: 0,
            ..SplitterConfig::default()
        };
        let scorer = Scorer::new(&counts, &config);
        let refined = append_suffix_and_prefix("Straße-n-bahn", &scorer, &config).unwrap();
        // ps glues "n" leftward into the frequent "Straßen"
        assert_eq!(refined.segmentation, "Straßen-bahn");
        assert_eq!(refined.absorbed, 1);
    }

    #[test]
    fn test_tie_prefers_prefix_after_suffix() {
        let mut counts = WordCounts::default();
        counts.insert("Haus".to_string(), 10);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        // both directions collapse to the same string, a tie by construction
        let refined = append_suffix_and_prefix("Haus-tür", &scorer, &config).unwrap();
        assert_eq!(refined.segmentation, "Haustür");
    }

    #[test]
    fn test_never_increases_atom_count() {
        let mut counts = WordCounts::default();
        counts.insert("Haus".to_string(), 10);
        let config = SplitterConfig::default();
        let scorer = Scorer::new(&counts, &config);
        for segmentation in ["Haus-tür", "Straße-n-bahn", "a-b-c", "Bahnhof"] {
            let refined = append_suffix_and_prefix(segmentation, &scorer, &config).unwrap();
            assert!(atom_count(&refined.segmentation) <= atom_count(segmentation));
        }
    }
}
