//! Game engine
//!
//! Drives rounds against one progressively depleting bag and one shared
//! dictionary, accumulating the total score. Holds no other state.

use super::draw::{ChoiceSource, DrawError, collect_round_letters};
use super::matcher::find_matching_words;
use super::scorer::{RoundScore, score_words};
use crate::core::{LetterBag, Word};

/// Rounds in a standard game
pub const DEFAULT_ROUNDS: usize = 4;

/// One game: a bag, a dictionary, and a running total
pub struct Game<'a> {
    bag: LetterBag,
    dictionary: &'a [Word],
    total_score: u32,
    rounds_played: usize,
}

/// Everything one round produced, for presentation
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// The nine letters in draw order
    pub letters: Vec<char>,
    /// How many dictionary words were buildable
    pub match_count: usize,
    /// All words of the maximum length found
    pub longest_words: Vec<String>,
    /// The round's score
    pub score: u32,
}

impl<'a> Game<'a> {
    /// Create a game over the given bag and dictionary
    ///
    /// The bag serves every round of this game; pools are never replenished
    /// between rounds.
    #[must_use]
    pub const fn new(bag: LetterBag, dictionary: &'a [Word]) -> Self {
        Self {
            bag,
            dictionary,
            total_score: 0,
            rounds_played: 0,
        }
    }

    /// Play one round: draw nine letters, match, score
    ///
    /// The round's score is added to the running total before returning, so
    /// the result can be reported before the next round begins.
    ///
    /// # Errors
    /// Returns `DrawError` when the draw phase fails fatally; the total and
    /// round count are unchanged in that case.
    pub fn play_round<C: ChoiceSource>(&mut self, source: &mut C) -> Result<RoundResult, DrawError> {
        let rack = collect_round_letters(&mut self.bag, source)?;
        let matches = find_matching_words(rack.letters(), self.dictionary);
        let RoundScore {
            score,
            longest_words,
        } = score_words(&matches);

        self.total_score += score;
        self.rounds_played += 1;

        Ok(RoundResult {
            letters: rack.letters().to_vec(),
            match_count: matches.len(),
            longest_words,
            score,
        })
    }

    /// Cumulative score across the rounds played so far
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Number of rounds completed
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// The game's bag (depleted as rounds are played)
    #[inline]
    #[must_use]
    pub const fn bag(&self) -> &LetterBag {
        &self.bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterKind::{Consonant, Vowel};
    use crate::game::draw::ScriptedChoices;
    use crate::wordlists::loader::dictionary_from_slice;

    fn sample_dictionary() -> Vec<Word> {
        dictionary_from_slice(&["countdown", "count", "town", "down", "own", "no", "on"])
    }

    #[test]
    fn round_reports_matches_and_score() {
        let dictionary = sample_dictionary();
        // Pools pop from the end: vowels come out o, e, i; consonants w, n, d...
        let bag = LetterBag::from_pools(
            vec!['i', 'e', 'o'],
            vec!['q', 'z', 't', 'd', 'n', 'w'],
        );
        let mut game = Game::new(bag, &dictionary);
        let mut script = ScriptedChoices::new([
            Vowel, Vowel, Vowel, Consonant, Consonant, Consonant, Consonant, Consonant, Consonant,
        ]);

        let result = game.play_round(&mut script).unwrap();

        assert_eq!(result.letters, ['o', 'e', 'i', 'w', 'n', 'd', 't', 'z', 'q']);
        assert_eq!(result.match_count, 5); // down, town, own, no, on
        assert_eq!(result.score, 4);

        let mut winners = result.longest_words.clone();
        winners.sort_unstable();
        assert_eq!(winners, ["down", "own", "town"]);

        assert_eq!(game.total_score(), 4);
        assert_eq!(game.rounds_played(), 1);
        assert!(game.bag().is_empty());
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let dictionary = sample_dictionary();
        // Two rounds' worth of letters; each round spells the same matches.
        let bag = LetterBag::from_pools(
            vec!['i', 'e', 'o', 'i', 'e', 'o'],
            vec!['q', 'z', 't', 'd', 'n', 'w', 'q', 'z', 't', 'd', 'n', 'w'],
        );
        let mut game = Game::new(bag, &dictionary);

        for _ in 0..2 {
            let mut script = ScriptedChoices::new([
                Vowel, Vowel, Vowel, Consonant, Consonant, Consonant, Consonant, Consonant,
                Consonant,
            ]);
            let result = game.play_round(&mut script).unwrap();
            assert_eq!(result.score, 4);
        }

        assert_eq!(game.total_score(), 8);
        assert_eq!(game.rounds_played(), 2);
    }

    #[test]
    fn bag_depletes_across_rounds() {
        let dictionary = sample_dictionary();
        let bag = LetterBag::standard();
        let mut game = Game::new(bag, &dictionary);

        for round in 1..=4 {
            let mut script = ScriptedChoices::new([
                Vowel, Vowel, Vowel, Consonant, Consonant, Consonant, Consonant, Consonant,
                Consonant,
            ]);
            game.play_round(&mut script).unwrap();
            assert_eq!(game.bag().total_remaining(), 98 - round * 9);
        }

        assert_eq!(game.bag().vowels_remaining(), 42 - 4 * 3);
        assert_eq!(game.bag().consonants_remaining(), 56 - 4 * 6);
    }

    #[test]
    fn unsatisfiable_bag_fails_the_round_without_scoring() {
        let dictionary = sample_dictionary();
        let bag = LetterBag::from_pools(vec!['a'], vec!['b', 'c', 'd', 'f']);
        let mut game = Game::new(bag, &dictionary);
        let mut script = ScriptedChoices::new(std::iter::repeat_n(Consonant, 9));

        let result = game.play_round(&mut script);

        assert!(matches!(result, Err(DrawError::Unsatisfiable { .. })));
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.rounds_played(), 0);
    }

    #[test]
    fn round_with_no_matches_scores_zero() {
        let dictionary = dictionary_from_slice(&["xylophone"]);
        let bag = LetterBag::from_pools(
            vec!['a', 'e', 'i'],
            vec!['b', 'c', 'd', 'f', 'g', 'h'],
        );
        let mut game = Game::new(bag, &dictionary);
        let mut script = ScriptedChoices::new([
            Vowel, Vowel, Vowel, Consonant, Consonant, Consonant, Consonant, Consonant, Consonant,
        ]);

        let result = game.play_round(&mut script).unwrap();

        assert_eq!(result.match_count, 0);
        assert_eq!(result.score, 0);
        assert!(result.longest_words.is_empty());
        assert_eq!(game.total_score(), 0);
    }
}
