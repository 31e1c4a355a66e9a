//! Benchmark command
//!
//! Auto-plays seeded games with random draws and reports matcher and score
//! statistics.

use crate::core::{LetterBag, Word};
use crate::game::{DrawError, Game, RandomChoices};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_rounds: usize,
    pub total_score: u32,
    pub average_round_score: f64,
    pub average_matches: f64,
    /// Longest word found across all rounds
    pub best_word: Option<String>,
    /// Rounds per round-score value
    pub score_distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Auto-play `games` games of `rounds_per_game` rounds each
///
/// Every game gets a freshly shuffled bag and its own choice stream, both
/// derived from `seed`, so a run is fully reproducible.
///
/// # Errors
///
/// Returns `DrawError::Unsatisfiable` if `rounds_per_game` asks for more
/// letters than one bag holds.
pub fn run_benchmark(
    dictionary: &[Word],
    games: usize,
    rounds_per_game: usize,
    seed: u64,
) -> Result<BenchmarkResult, DrawError> {
    println!("🎯 Playing {games} games of {rounds_per_game} rounds...");

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut total_rounds = 0;
    let mut total_score = 0u32;
    let mut total_matches = 0usize;
    let mut best_word: Option<String> = None;
    let mut score_distribution: HashMap<u32, usize> = HashMap::new();

    let start = Instant::now();

    for game_index in 0..games {
        let bag = LetterBag::shuffled(&mut rng);
        let mut game = Game::new(bag, dictionary);
        let mut choices = RandomChoices::new(seed.wrapping_add(game_index as u64));

        for _ in 0..rounds_per_game {
            let round = game.play_round(&mut choices)?;

            total_rounds += 1;
            total_score += round.score;
            total_matches += round.match_count;
            *score_distribution.entry(round.score).or_insert(0) += 1;

            if let Some(longest) = round.longest_words.first() {
                let better = best_word
                    .as_ref()
                    .is_none_or(|current| longest.len() > current.len());
                if better {
                    best_word = Some(longest.clone());
                }
            }
        }

        pb.set_message(format!(
            "avg score {:.1}",
            f64::from(total_score) / total_rounds as f64
        ));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: games,
        total_rounds,
        total_score,
        average_round_score: f64::from(total_score) / total_rounds.max(1) as f64,
        average_matches: total_matches as f64 / total_rounds.max(1) as f64,
        best_word,
        score_distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64(),
    })
}
