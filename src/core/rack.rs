//! A round's drawn letters
//!
//! A `Rack` holds the nine letters drawn for one round along with its
//! vowel/consonant tallies. Construction validates shape only; whether the
//! composition satisfies the round minimum is a separate check, since racks
//! are also built for arbitrary solve requests.

use super::letter::is_vowel;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters drawn per round
pub const RACK_SIZE: usize = 9;

/// Minimum vowels a round selection must contain
pub const MIN_VOWELS: usize = 3;

/// Minimum consonants a round selection must contain
pub const MIN_CONSONANTS: usize = 4;

/// Nine drawn letters in draw order, lowercase ASCII
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: [char; RACK_SIZE],
    vowels: usize,
    consonants: usize,
}

/// Error type for invalid racks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Rack must be exactly {RACK_SIZE} letters, got {len}")
            }
            Self::InvalidLetter(letter) => {
                write!(f, "Rack may only contain ASCII letters, got '{letter}'")
            }
        }
    }
}

impl std::error::Error for RackError {}

impl Rack {
    /// Create a rack from a string of nine letters
    ///
    /// # Errors
    /// Returns `RackError` if the input is not exactly nine ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::Rack;
    ///
    /// let rack = Rack::new("owqndtaey").unwrap();
    /// assert_eq!(rack.vowel_count(), 3);
    /// assert_eq!(rack.consonant_count(), 6);
    /// assert!(rack.satisfies_minimum());
    ///
    /// assert!(Rack::new("own").is_err());
    /// assert!(Rack::new("owqndta3y").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, RackError> {
        let text: String = text.into();
        let letters: Vec<char> = text.chars().collect();
        Self::from_letters(&letters)
    }

    /// Create a rack from drawn letters
    ///
    /// Letters are normalized to lowercase; vowel and consonant tallies are
    /// computed here, once.
    ///
    /// # Errors
    /// Returns `RackError` if the slice is not exactly nine ASCII letters.
    pub fn from_letters(letters: &[char]) -> Result<Self, RackError> {
        if letters.len() != RACK_SIZE {
            return Err(RackError::InvalidLength(letters.len()));
        }

        let mut rack = ['a'; RACK_SIZE];
        let mut vowels = 0;
        let mut consonants = 0;

        for (slot, &letter) in letters.iter().enumerate() {
            let letter = letter.to_ascii_lowercase();
            if !letter.is_ascii_lowercase() {
                return Err(RackError::InvalidLetter(letter));
            }
            if is_vowel(letter) {
                vowels += 1;
            } else {
                consonants += 1;
            }
            rack[slot] = letter;
        }

        Ok(Self {
            letters: rack,
            vowels,
            consonants,
        })
    }

    /// The letters in draw order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letters as a lowercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// How many of the nine letters are vowels
    #[inline]
    #[must_use]
    pub const fn vowel_count(&self) -> usize {
        self.vowels
    }

    /// How many of the nine letters are consonants
    #[inline]
    #[must_use]
    pub const fn consonant_count(&self) -> usize {
        self.consonants
    }

    /// Whether the composition meets the round minimum (3 vowels, 4 consonants)
    #[inline]
    #[must_use]
    pub const fn satisfies_minimum(&self) -> bool {
        self.vowels >= MIN_VOWELS && self.consonants >= MIN_CONSONANTS
    }

    /// Count of each letter on the rack
    ///
    /// Used for the subset-with-multiplicity match against dictionary words.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter as u8).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_creation_valid() {
        let rack = Rack::new("owqndtaey").unwrap();
        assert_eq!(rack.text(), "owqndtaey");
        assert_eq!(rack.letters().len(), RACK_SIZE);
    }

    #[test]
    fn rack_creation_uppercase_normalized() {
        let rack = Rack::new("OWQNDTAEY").unwrap();
        assert_eq!(rack.text(), "owqndtaey");
    }

    #[test]
    fn rack_creation_invalid_length() {
        assert!(matches!(Rack::new("own"), Err(RackError::InvalidLength(3))));
        assert!(matches!(
            Rack::new("owqndtaeyx"),
            Err(RackError::InvalidLength(10))
        ));
        assert!(matches!(Rack::new(""), Err(RackError::InvalidLength(0))));
    }

    #[test]
    fn rack_creation_invalid_letters() {
        assert!(matches!(
            Rack::new("owqndta3y"),
            Err(RackError::InvalidLetter('3'))
        ));
        assert!(Rack::new("owqndta y").is_err());
        assert!(Rack::new("owqndta!y").is_err());
    }

    #[test]
    fn rack_counts_vowels_and_consonants() {
        let rack = Rack::new("owqndtaey").unwrap();
        assert_eq!(rack.vowel_count(), 3); // o, a, e
        assert_eq!(rack.consonant_count(), 6); // w, q, n, d, t, y
    }

    #[test]
    fn minimum_composition_boundary() {
        // 3 vowels / 6 consonants: valid
        assert!(Rack::new("owqndtaey").unwrap().satisfies_minimum());
        // 5 vowels / 4 consonants: valid
        assert!(Rack::new("aeioubcdf").unwrap().satisfies_minimum());
        // 2 vowels / 7 consonants: too few vowels
        assert!(!Rack::new("bcdfghjae").unwrap().satisfies_minimum());
        // 6 vowels / 3 consonants: too few consonants
        assert!(!Rack::new("aeiouabcd").unwrap().satisfies_minimum());
        // All consonants
        assert!(!Rack::new("bcdfghjkl").unwrap().satisfies_minimum());
    }

    #[test]
    fn rack_char_counts_multiplicity() {
        let rack = Rack::new("countdown").unwrap();
        let counts = rack.char_counts();
        assert_eq!(counts.get(&b'o'), Some(&2));
        assert_eq!(counts.get(&b'n'), Some(&2));
        assert_eq!(counts.get(&b'c'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn rack_from_letters_matches_new() {
        let from_letters =
            Rack::from_letters(&['o', 'w', 'q', 'n', 'd', 't', 'a', 'e', 'y']).unwrap();
        let from_text = Rack::new("owqndtaey").unwrap();
        assert_eq!(from_letters, from_text);
    }

    #[test]
    fn rack_display() {
        let rack = Rack::new("OWQNDTAEY").unwrap();
        assert_eq!(format!("{rack}"), "owqndtaey");
    }
}
