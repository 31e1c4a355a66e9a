//! Interactive console game
//!
//! The full letters-round game: prompt-driven draws, per-round results, and
//! the final total.

use crate::core::{LetterBag, LetterKind, MIN_CONSONANTS, MIN_VOWELS, RACK_SIZE, Word};
use crate::game::{ChoiceSource, DrawError, Game};
use crate::output::{print_game_summary, print_round_result};
use crate::output::formatters::format_letters;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Configuration for an interactive game
pub struct PlayConfig {
    pub rounds: usize,
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: Option<u64>) -> Self {
        Self { rounds, seed }
    }
}

/// Run the interactive console game
///
/// # Errors
///
/// Returns an error if reading user input fails or the bag cannot complete
/// a round.
pub fn run_play(dictionary: &[Word], config: &PlayConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Countdown Letters - Game Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Welcome! Each round you pick {RACK_SIZE} letters, one pool at a time.");
    println!(
        "A valid selection needs at least {MIN_VOWELS} vowels and {MIN_CONSONANTS} consonants."
    );
    println!("The longest word buildable from your letters scores its length;");
    println!("a word using all {RACK_SIZE} letters scores 18.\n");
    println!("Playing {} rounds against {} words.", config.rounds, dictionary.len());

    let bag = match config.seed {
        Some(seed) => LetterBag::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => LetterBag::shuffled(&mut rand::rng()),
    };
    let mut game = Game::new(bag, dictionary);
    let mut console = ConsoleChoices;

    for round in 1..=config.rounds {
        println!(
            "\n{}",
            format!("--- Round {round}/{} ---", config.rounds)
                .bright_cyan()
                .bold()
        );

        let result = game.play_round(&mut console).map_err(|error| match error {
            DrawError::Unsatisfiable { .. } | DrawError::Exhausted => {
                format!("{error}; ending the game early")
            }
            DrawError::Choice(reason) => reason,
        })?;

        print_round_result(&result);
    }

    print_game_summary(game.total_score(), game.rounds_played());
    Ok(())
}

/// Console-backed choice source
///
/// Prompts for each of the nine slots and re-prompts indefinitely on
/// anything that is not a vowel/consonant answer.
struct ConsoleChoices;

impl ChoiceSource for ConsoleChoices {
    fn choose(&mut self, slot: usize, drawn: &[char]) -> Result<LetterKind, DrawError> {
        if slot == 1 {
            println!("\nChoose {RACK_SIZE} letters. Type 'v' for vowel, 'c' for consonant.\n");
        } else {
            println!("Current letters: {}", format_letters(drawn).bright_yellow());
        }

        loop {
            let input = get_user_input(&format!("Pick letter {slot}/{RACK_SIZE} (v/c)"))
                .map_err(DrawError::Choice)?;

            match input.to_lowercase().as_str() {
                "v" | "vowel" => return Ok(LetterKind::Vowel),
                "c" | "consonant" => return Ok(LetterKind::Consonant),
                _ => println!("Invalid input. Please type 'v' or 'c'."),
            }
        }
    }

    fn on_forced(&mut self, forced_to: LetterKind) {
        println!(
            "{}",
            format!("That pool is empty - drawing a {forced_to} instead.").yellow()
        );
    }

    fn on_restart(&mut self) {
        println!(
            "\n{}",
            format!(
                "Invalid selection. You must choose at least {MIN_VOWELS} vowels and \
                 {MIN_CONSONANTS} consonants.\nStarting over..."
            )
            .red()
        );
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
