//! Draw collection and composition validation
//!
//! Collects the nine draws of a round from a `ChoiceSource` and enforces the
//! minimum 3-vowel/4-consonant composition, restarting the selection (with
//! the letters returned to the bag) until it holds.

use crate::core::{LetterBag, LetterKind, MIN_CONSONANTS, MIN_VOWELS, RACK_SIZE, Rack};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt;

/// Error type for a round's draw phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The bag can never produce a valid composition, so retrying is useless
    Unsatisfiable { vowels: usize, consonants: usize },
    /// Both pools ran dry in the middle of a selection
    Exhausted,
    /// The choice source failed to produce a choice
    Choice(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsatisfiable { vowels, consonants } => write!(
                f,
                "cannot complete the round: the bag has {vowels} vowels and {consonants} \
                 consonants left, but a selection needs at least {MIN_VOWELS} vowels and \
                 {MIN_CONSONANTS} consonants among {RACK_SIZE} letters"
            ),
            Self::Exhausted => write!(f, "cannot complete the round: both letter pools are empty"),
            Self::Choice(reason) => write!(f, "choice source failed: {reason}"),
        }
    }
}

impl std::error::Error for DrawError {}

/// A source of vowel/consonant decisions, one per draw slot
///
/// The interactive game backs this with console prompts; tests and the
/// benchmark use the scripted and random sources below. A source only ever
/// sees one pending request at a time.
pub trait ChoiceSource {
    /// Choose the pool for draw slot `slot` (1-based), given the letters
    /// drawn so far this attempt.
    ///
    /// # Errors
    /// Returns `DrawError::Choice` if no choice can be produced.
    fn choose(&mut self, slot: usize, drawn: &[char]) -> Result<LetterKind, DrawError>;

    /// Called when the chosen pool was empty and the draw was redirected
    fn on_forced(&mut self, _forced_to: LetterKind) {}

    /// Called when an attempt was rejected and the selection restarts
    fn on_restart(&mut self) {}
}

/// A fixed sequence of choices
///
/// Errors once the script runs out, which conveniently fails tests that
/// consume more choices than expected.
pub struct ScriptedChoices {
    choices: VecDeque<LetterKind>,
}

impl ScriptedChoices {
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = LetterKind>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(&mut self, slot: usize, _drawn: &[char]) -> Result<LetterKind, DrawError> {
        self.choices
            .pop_front()
            .ok_or_else(|| DrawError::Choice(format!("script ran out of choices at slot {slot}")))
    }
}

/// Seeded random choices that always satisfy the round minimum
///
/// Each batch of nine is the required 3 vowels and 4 consonants plus two
/// free picks, shuffled, so a round driven by this source never restarts.
pub struct RandomChoices {
    rng: StdRng,
    queue: Vec<LetterKind>,
}

impl RandomChoices {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            queue: Vec::new(),
        }
    }

    fn refill(&mut self) {
        self.queue
            .extend(std::iter::repeat_n(LetterKind::Vowel, MIN_VOWELS));
        self.queue
            .extend(std::iter::repeat_n(LetterKind::Consonant, MIN_CONSONANTS));
        for _ in 0..RACK_SIZE - MIN_VOWELS - MIN_CONSONANTS {
            self.queue.push(if self.rng.random() {
                LetterKind::Vowel
            } else {
                LetterKind::Consonant
            });
        }
        self.queue.shuffle(&mut self.rng);
    }
}

impl ChoiceSource for RandomChoices {
    fn choose(&mut self, _slot: usize, _drawn: &[char]) -> Result<LetterKind, DrawError> {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue
            .pop()
            .ok_or_else(|| DrawError::Choice("choice queue unexpectedly empty".to_string()))
    }
}

/// Collect a round's nine letters from the bag
///
/// One draw per choice; a choice for an empty pool is forced to the other
/// pool. After nine draws the composition is validated: on failure all nine
/// letters are returned to the bottom of their pools and the selection
/// restarts from scratch. The loop exits only with a valid rack or a fatal
/// error.
///
/// # Errors
/// - `DrawError::Unsatisfiable` if the bag cannot produce 3 vowels, 4
///   consonants, and 9 letters no matter the choices (checked before each
///   attempt, so an impossible bag never loops forever).
/// - `DrawError::Exhausted` if both pools run dry mid-selection.
/// - `DrawError::Choice` if the source fails.
///
/// # Panics
/// Will not panic - nine letters drawn from the bag always form a valid rack.
pub fn collect_round_letters<C: ChoiceSource>(
    bag: &mut LetterBag,
    source: &mut C,
) -> Result<Rack, DrawError> {
    loop {
        if bag.vowels_remaining() < MIN_VOWELS
            || bag.consonants_remaining() < MIN_CONSONANTS
            || bag.total_remaining() < RACK_SIZE
        {
            return Err(DrawError::Unsatisfiable {
                vowels: bag.vowels_remaining(),
                consonants: bag.consonants_remaining(),
            });
        }

        let mut drawn = Vec::with_capacity(RACK_SIZE);
        for slot in 1..=RACK_SIZE {
            let mut kind = source.choose(slot, &drawn)?;
            if bag.remaining(kind) == 0 {
                kind = kind.other();
                if bag.remaining(kind) == 0 {
                    return Err(DrawError::Exhausted);
                }
                source.on_forced(kind);
            }
            let Some(letter) = bag.draw(kind) else {
                return Err(DrawError::Exhausted);
            };
            drawn.push(letter);
        }

        let rack = Rack::from_letters(&drawn).expect("bag letters form a valid rack");
        if rack.satisfies_minimum() {
            return Ok(rack);
        }

        bag.return_letters(rack.letters());
        source.on_restart();
    }
}
