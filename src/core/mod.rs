//! Core domain types for the letters round
//!
//! This module contains the fundamental domain types with no game logic.
//! All types here are pure, testable, and have clear invariants.

mod bag;
mod letter;
mod rack;
mod word;

pub use bag::LetterBag;
pub use letter::{LetterKind, VOWELS, is_vowel};
pub use rack::{MIN_CONSONANTS, MIN_VOWELS, RACK_SIZE, Rack, RackError};
pub use word::{Word, WordError};
