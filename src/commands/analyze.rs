//! Rack analysis command
//!
//! Shows how many words each length yields for a rack.

use crate::core::{Rack, Word};
use crate::game::{find_matching_words, score_words};
use std::collections::BTreeMap;

/// Result of analyzing a rack
pub struct AnalysisResult {
    /// The normalized rack letters
    pub letters: String,
    /// Total buildable words
    pub total_matches: usize,
    /// (word length, match count), ascending by length
    pub by_length: Vec<(usize, usize)>,
    /// All words of the maximum length
    pub longest_words: Vec<String>,
    /// The score this rack would earn
    pub score: u32,
}

/// Analyze the buildable words for a nine-letter rack
///
/// # Errors
///
/// Returns an error if `letters` is not exactly nine ASCII letters.
pub fn analyze_letters(letters: &str, dictionary: &[Word]) -> Result<AnalysisResult, String> {
    let rack = Rack::new(letters).map_err(|e| format!("Invalid letters: {e}"))?;

    let matched = find_matching_words(rack.letters(), dictionary);
    let outcome = score_words(&matched);

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for word in &matched {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    Ok(AnalysisResult {
        letters: rack.text(),
        total_matches: matched.len(),
        by_length: counts.into_iter().collect(),
        longest_words: outcome.longest_words,
        score: outcome.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_slice;

    fn sample_dictionary() -> Vec<Word> {
        dictionary_from_slice(&["countdown", "count", "town", "down", "own", "no", "on"])
    }

    #[test]
    fn analysis_counts_matches_by_length() {
        let dictionary = sample_dictionary();

        let result = analyze_letters("owqndtaey", &dictionary).unwrap();

        assert_eq!(result.total_matches, 5);
        assert_eq!(result.by_length, [(2, 2), (3, 1), (4, 2)]);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn analysis_of_full_rack() {
        let dictionary = sample_dictionary();

        let result = analyze_letters("countdown", &dictionary).unwrap();

        assert_eq!(result.total_matches, 7);
        assert_eq!(result.score, 18);
        assert_eq!(result.longest_words, ["countdown"]);
        // Lengths present: 2 (no, on), 3 (own), 4 (town, down), 5 (count), 9.
        assert_eq!(result.by_length, [(2, 2), (3, 1), (4, 2), (5, 1), (9, 1)]);
    }

    #[test]
    fn analysis_with_no_matches() {
        let dictionary = sample_dictionary();

        let result = analyze_letters("uuuxxxxqq", &dictionary).unwrap();

        assert_eq!(result.total_matches, 0);
        assert!(result.by_length.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn analysis_rejects_invalid_racks() {
        let dictionary = sample_dictionary();
        assert!(analyze_letters("tooshort", &dictionary).is_err());
    }
}
