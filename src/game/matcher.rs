//! Subset-with-multiplicity word matching
//!
//! Finds every dictionary word buildable from a subset of the drawn letters.
//! This is anagram/subset matching, not substring matching: a word matches
//! iff each of its letter counts is covered by the rack's letter counts.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Find every dictionary word constructible from a subset of `letters`
///
/// Pure function. Letters are normalized to lowercase; non-ASCII input
/// contributes nothing to the available counts. Empty letters or an empty
/// dictionary yield an empty result. The scan is parallelized across the
/// dictionary; the result preserves dictionary order.
///
/// # Examples
/// ```
/// use countdown_letters::game::find_matching_words;
/// use countdown_letters::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["down", "town", "count"]);
/// let letters: Vec<char> = "owqndtaey".chars().collect();
///
/// let matches = find_matching_words(&letters, &dictionary);
/// let texts: Vec<&str> = matches.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["down", "town"]);
/// ```
#[must_use]
pub fn find_matching_words<'a>(letters: &[char], dictionary: &'a [Word]) -> Vec<&'a Word> {
    let available = letter_counts(letters);

    dictionary
        .par_iter()
        .filter(|word| can_build(word, &available))
        .collect()
}

/// Count the available letters, lowercased
fn letter_counts(letters: &[char]) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            *counts.entry(letter as u8).or_insert(0u8) += 1;
        }
    }
    counts
}

/// True iff every letter the word needs is available in sufficient quantity
fn can_build(word: &Word, available: &FxHashMap<u8, u8>) -> bool {
    word.char_counts()
        .iter()
        .all(|(letter, &needed)| available.get(letter).copied().unwrap_or(0) >= needed)
}
