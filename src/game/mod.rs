//! Round mechanics
//!
//! Draw collection, word matching, scoring, and the engine that composes
//! them into rounds.

mod draw;
mod engine;
mod matcher;
mod scorer;

pub use draw::{ChoiceSource, DrawError, RandomChoices, ScriptedChoices, collect_round_letters};
pub use engine::{DEFAULT_ROUNDS, Game, RoundResult};
pub use matcher::find_matching_words;
pub use scorer::{FULL_RACK_SCORE, RoundScore, score_words};
