//! Round scoring
//!
//! Score = length of the longest matching word, except a word using all nine
//! letters scores 18. All co-longest words are winners; there is no tie-break.

use crate::core::{RACK_SIZE, Word};

/// Score awarded when a word uses every one of the nine letters
pub const FULL_RACK_SCORE: u32 = 18;

/// Outcome of scoring one round's matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    pub score: u32,
    pub longest_words: Vec<String>,
}

/// Reduce the matched words to a round score and the co-longest word(s)
///
/// No matches score 0 with no winning words. Every length maps to itself
/// except the full-rack length of 9, which scores 18.
///
/// # Examples
/// ```
/// use countdown_letters::game::score_words;
///
/// let outcome = score_words(&[]);
/// assert_eq!(outcome.score, 0);
/// assert!(outcome.longest_words.is_empty());
/// ```
#[must_use]
pub fn score_words(matches: &[&Word]) -> RoundScore {
    let Some(max_length) = matches.iter().map(|word| word.len()).max() else {
        return RoundScore {
            score: 0,
            longest_words: Vec::new(),
        };
    };

    let longest_words = matches
        .iter()
        .filter(|word| word.len() == max_length)
        .map(|word| word.text().to_string())
        .collect();

    let score = if max_length == RACK_SIZE {
        FULL_RACK_SCORE
    } else {
        max_length as u32
    };

    RoundScore {
        score,
        longest_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn score_texts(texts: &[&str]) -> RoundScore {
        let owned = words(texts);
        let refs: Vec<&Word> = owned.iter().collect();
        score_words(&refs)
    }

    #[test]
    fn no_matches_score_zero() {
        let outcome = score_words(&[]);
        assert_eq!(outcome.score, 0);
        assert!(outcome.longest_words.is_empty());
    }

    #[test]
    fn single_longest_word_wins() {
        let outcome = score_texts(&["no", "on", "town"]);
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.longest_words, ["town"]);
    }

    #[test]
    fn all_ties_are_kept() {
        let outcome = score_texts(&["down", "town", "no", "on", "own"]);
        assert_eq!(outcome.score, 4);

        let mut winners = outcome.longest_words;
        winners.sort_unstable();
        assert_eq!(winners, ["down", "own", "town"]);
    }

    #[test]
    fn nine_letter_word_scores_eighteen() {
        let outcome = score_texts(&["countdown", "count", "down"]);
        assert_eq!(outcome.score, FULL_RACK_SCORE);
        assert_eq!(outcome.longest_words, ["countdown"]);
    }

    #[test]
    fn nine_letter_ties_all_score_eighteen() {
        let outcome = score_texts(&["education", "auctioned"]);
        assert_eq!(outcome.score, FULL_RACK_SCORE);
        assert_eq!(outcome.longest_words.len(), 2);
    }

    #[test]
    fn shorter_lengths_map_to_themselves() {
        for (texts, expected) in [
            (vec!["no"], 2),
            (vec!["own"], 3),
            (vec!["count"], 5),
            (vec!["lighters"], 8),
        ] {
            let outcome = score_texts(&texts);
            assert_eq!(outcome.score, expected);
        }
    }
}
