//! Rack solving command
//!
//! Finds the best words for a nine-letter rack given on the command line -
//! one round's core without the prompt loop.

use crate::core::{Rack, Word};
use crate::game::{find_matching_words, score_words};

/// Result of solving a rack
pub struct SolveResult {
    /// The normalized rack letters
    pub letters: String,
    /// Every buildable word, longest first, ties alphabetical
    pub matches: Vec<String>,
    /// All words of the maximum length
    pub longest_words: Vec<String>,
    /// The score this rack would earn
    pub score: u32,
}

/// Find the matches and score for a nine-letter rack
///
/// # Errors
///
/// Returns an error if `letters` is not exactly nine ASCII letters.
pub fn solve_letters(letters: &str, dictionary: &[Word]) -> Result<SolveResult, String> {
    let rack = Rack::new(letters).map_err(|e| format!("Invalid letters: {e}"))?;

    let matched = find_matching_words(rack.letters(), dictionary);
    let outcome = score_words(&matched);

    let mut matches: Vec<String> = matched.iter().map(|word| word.text().to_string()).collect();
    matches.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    Ok(SolveResult {
        letters: rack.text(),
        matches,
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
    fn solve_finds_longest_words() {
        let dictionary = sample_dictionary();

        let result = solve_letters("owqndtaey", &dictionary).unwrap();

        assert_eq!(result.letters, "owqndtaey");
        assert_eq!(result.score, 4);

        let mut winners = result.longest_words.clone();
        winners.sort_unstable();
        assert_eq!(winners, ["down", "own", "town"]);
    }

    #[test]
    fn solve_sorts_matches_longest_first() {
        let dictionary = sample_dictionary();

        let result = solve_letters("owqndtaey", &dictionary).unwrap();

        assert_eq!(result.matches, ["down", "town", "own", "no", "on"]);
    }

    #[test]
    fn solve_full_rack_scores_eighteen() {
        let dictionary = sample_dictionary();

        let result = solve_letters("countdown", &dictionary).unwrap();

        assert_eq!(result.score, 18);
        assert_eq!(result.longest_words, ["countdown"]);
    }

    #[test]
    fn solve_accepts_uppercase_input() {
        let dictionary = sample_dictionary();

        let result = solve_letters("COUNTDOWN", &dictionary).unwrap();

        assert_eq!(result.letters, "countdown");
        assert_eq!(result.score, 18);
    }

    #[test]
    fn solve_with_no_matches_scores_zero() {
        let dictionary = sample_dictionary();

        let result = solve_letters("uuuxxxxqq", &dictionary).unwrap();

        assert_eq!(result.score, 0);
        assert!(result.matches.is_empty());
        assert!(result.longest_words.is_empty());
    }

    #[test]
    fn solve_rejects_invalid_racks() {
        let dictionary = sample_dictionary();

        assert!(solve_letters("own", &dictionary).is_err());
        assert!(solve_letters("owqndta3y", &dictionary).is_err());
        assert!(solve_letters("", &dictionary).is_err());
    }
}
