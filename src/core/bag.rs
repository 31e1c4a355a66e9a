//! The letter bag
//!
//! Holds the remaining vowel and consonant supply for one game as two separate
//! pools. Drawing policy: each pool is shuffled exactly once at construction
//! and tiles are then popped off the end in order, mimicking the pre-shuffled
//! letter stacks of the televised game. Draws are NOT uniform samples of the
//! live pool. Rejected selections go back to the bottom of their pools, so
//! they are drawn last.

use super::letter::{LetterKind, is_vowel};
use rand::Rng;
use rand::seq::SliceRandom;

/// Initial vowel frequencies (42 tiles)
const VOWEL_DISTRIBUTION: &[(char, usize)] = &[('a', 9), ('e', 12), ('i', 9), ('o', 8), ('u', 4)];

/// Initial consonant frequencies (56 tiles)
const CONSONANT_DISTRIBUTION: &[(char, usize)] = &[
    ('b', 2),
    ('c', 2),
    ('d', 4),
    ('f', 2),
    ('g', 3),
    ('h', 2),
    ('j', 1),
    ('k', 1),
    ('l', 4),
    ('m', 2),
    ('n', 6),
    ('p', 2),
    ('q', 1),
    ('r', 6),
    ('s', 4),
    ('t', 6),
    ('v', 2),
    ('w', 2),
    ('x', 1),
    ('y', 2),
    ('z', 1),
];

/// The two depleting letter pools of one game
///
/// Constructed once per game, mutated only by draws and by returns of
/// rejected selections, discarded at game end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl LetterBag {
    /// Create a bag with the standard distribution in table order (unshuffled)
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::LetterBag;
    ///
    /// let bag = LetterBag::standard();
    /// assert_eq!(bag.vowels_remaining(), 42);
    /// assert_eq!(bag.consonants_remaining(), 56);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self {
            vowels: expand(VOWEL_DISTRIBUTION),
            consonants: expand(CONSONANT_DISTRIBUTION),
        }
    }

    /// Create a standard bag with both pools shuffled once
    ///
    /// This is the one shuffle a bag ever receives; all subsequent draws pop
    /// the pre-shuffled order. Pass a seeded RNG for a reproducible game.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bag = Self::standard();
        bag.vowels.shuffle(rng);
        bag.consonants.shuffle(rng);
        bag
    }

    /// Create a bag from explicit pools
    ///
    /// Letters are classified by the caller's placement, not re-checked.
    #[must_use]
    pub const fn from_pools(vowels: Vec<char>, consonants: Vec<char>) -> Self {
        Self { vowels, consonants }
    }

    /// Remove and return the top letter of the chosen pool
    ///
    /// Returns `None` when that pool is empty.
    pub fn draw(&mut self, kind: LetterKind) -> Option<char> {
        self.pool_mut(kind).pop()
    }

    /// Return letters to the bag after a rejected selection
    ///
    /// Each letter is classified and inserted at the bottom (front) of its
    /// pool, preserving relative order, so returned letters are drawn last.
    pub fn return_letters(&mut self, letters: &[char]) {
        let (vowels, consonants): (Vec<char>, Vec<char>) =
            letters.iter().copied().partition(|&letter| is_vowel(letter));
        self.vowels.splice(0..0, vowels);
        self.consonants.splice(0..0, consonants);
    }

    /// Letters left in the chosen pool
    #[must_use]
    pub fn remaining(&self, kind: LetterKind) -> usize {
        self.pool(kind).len()
    }

    /// Vowels left in the bag
    #[inline]
    #[must_use]
    pub fn vowels_remaining(&self) -> usize {
        self.vowels.len()
    }

    /// Consonants left in the bag
    #[inline]
    #[must_use]
    pub fn consonants_remaining(&self) -> usize {
        self.consonants.len()
    }

    /// Letters left across both pools
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.vowels.len() + self.consonants.len()
    }

    /// True when both pools are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vowels.is_empty() && self.consonants.is_empty()
    }

    fn pool(&self, kind: LetterKind) -> &Vec<char> {
        match kind {
            LetterKind::Vowel => &self.vowels,
            LetterKind::Consonant => &self.consonants,
        }
    }

    fn pool_mut(&mut self, kind: LetterKind) -> &mut Vec<char> {
        match kind {
            LetterKind::Vowel => &mut self.vowels,
            LetterKind::Consonant => &mut self.consonants,
        }
    }
}

fn expand(distribution: &[(char, usize)]) -> Vec<char> {
    let size = distribution.iter().map(|&(_, freq)| freq).sum();
    let mut pool = Vec::with_capacity(size);
    for &(letter, freq) in distribution {
        for _ in 0..freq {
            pool.push(letter);
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_bag_has_full_distribution() {
        let bag = LetterBag::standard();
        assert_eq!(bag.vowels_remaining(), 42);
        assert_eq!(bag.consonants_remaining(), 56);
        assert_eq!(bag.total_remaining(), 98);
        assert!(!bag.is_empty());
    }

    #[test]
    fn draw_decrements_the_chosen_pool() {
        let mut bag = LetterBag::standard();

        let vowel = bag.draw(LetterKind::Vowel).unwrap();
        assert!(is_vowel(vowel));
        assert_eq!(bag.vowels_remaining(), 41);
        assert_eq!(bag.consonants_remaining(), 56);

        let consonant = bag.draw(LetterKind::Consonant).unwrap();
        assert!(!is_vowel(consonant));
        assert_eq!(bag.consonants_remaining(), 55);
    }

    #[test]
    fn draw_from_empty_pool_returns_none() {
        let mut bag = LetterBag::from_pools(vec![], vec!['b', 'c']);
        assert_eq!(bag.draw(LetterKind::Vowel), None);
        assert_eq!(bag.draw(LetterKind::Consonant), Some('c'));
    }

    #[test]
    fn draw_pops_from_the_end() {
        let mut bag = LetterBag::from_pools(vec!['a', 'e', 'i'], vec![]);
        assert_eq!(bag.draw(LetterKind::Vowel), Some('i'));
        assert_eq!(bag.draw(LetterKind::Vowel), Some('e'));
        assert_eq!(bag.draw(LetterKind::Vowel), Some('a'));
        assert_eq!(bag.draw(LetterKind::Vowel), None);
    }

    #[test]
    fn returned_letters_go_to_the_bottom() {
        let mut bag = LetterBag::from_pools(vec!['a', 'e'], vec!['b', 'c']);

        bag.return_letters(&['i', 'd']);

        assert_eq!(bag.vowels_remaining(), 3);
        assert_eq!(bag.consonants_remaining(), 3);
        // Existing tiles still draw first; returned tiles come out last.
        assert_eq!(bag.draw(LetterKind::Vowel), Some('e'));
        assert_eq!(bag.draw(LetterKind::Vowel), Some('a'));
        assert_eq!(bag.draw(LetterKind::Vowel), Some('i'));
        assert_eq!(bag.draw(LetterKind::Consonant), Some('c'));
        assert_eq!(bag.draw(LetterKind::Consonant), Some('b'));
        assert_eq!(bag.draw(LetterKind::Consonant), Some('d'));
    }

    #[test]
    fn return_preserves_relative_order() {
        let mut bag = LetterBag::from_pools(vec![], vec![]);
        bag.return_letters(&['o', 'w', 'n', 'a']);

        assert_eq!(bag.draw(LetterKind::Vowel), Some('a'));
        assert_eq!(bag.draw(LetterKind::Vowel), Some('o'));
        assert_eq!(bag.draw(LetterKind::Consonant), Some('n'));
        assert_eq!(bag.draw(LetterKind::Consonant), Some('w'));
    }

    #[test]
    fn shuffled_bag_is_deterministic_for_a_seed() {
        let mut first = LetterBag::shuffled(&mut StdRng::seed_from_u64(7));
        let mut second = LetterBag::shuffled(&mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
        for _ in 0..10 {
            assert_eq!(first.draw(LetterKind::Vowel), second.draw(LetterKind::Vowel));
            assert_eq!(
                first.draw(LetterKind::Consonant),
                second.draw(LetterKind::Consonant)
            );
        }
    }

    #[test]
    fn shuffled_bag_keeps_the_distribution() {
        let bag = LetterBag::shuffled(&mut StdRng::seed_from_u64(1));
        assert_eq!(bag.vowels_remaining(), 42);
        assert_eq!(bag.consonants_remaining(), 56);
    }

    #[test]
    fn bag_drains_to_empty() {
        let mut bag = LetterBag::from_pools(vec!['a'], vec!['b']);
        bag.draw(LetterKind::Vowel);
        bag.draw(LetterKind::Consonant);
        assert!(bag.is_empty());
        assert_eq!(bag.total_remaining(), 0);
    }
}
