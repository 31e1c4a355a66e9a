//! Countdown Letters
//!
//! A simulator of the letters round: draw nine letters under a
//! vowel/consonant ratio constraint, find the longest buildable dictionary
//! word(s), and accumulate a score across a fixed number of rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_letters::core::Rack;
//! use countdown_letters::game::{find_matching_words, score_words};
//! use countdown_letters::wordlists::loader::dictionary_from_slice;
//!
//! let dictionary = dictionary_from_slice(&["down", "town", "own", "no", "on"]);
//! let rack = Rack::new("owqndtaey").unwrap();
//!
//! let matches = find_matching_words(rack.letters(), &dictionary);
//! let outcome = score_words(&matches);
//! assert_eq!(outcome.score, 4);
//! ```

// Core domain types
pub mod core;

// Round mechanics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
