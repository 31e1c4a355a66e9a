//! Display functions for command results

use super::formatters::{create_progress_bar, format_letters, format_word_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::{FULL_RACK_SCORE, RoundResult};
use colored::Colorize;

/// Print one round's outcome
pub fn print_round_result(result: &RoundResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters drawn: {}",
        format_letters(&result.letters).bright_yellow().bold()
    );

    if result.longest_words.is_empty() {
        println!("No valid words can be formed from these letters.");
    } else {
        let length = result.longest_words[0].len();
        println!(
            "Longest word(s) ({length} letters): {}",
            format_word_list(&result.longest_words).bright_white().bold()
        );
        println!("Words found: {}", result.match_count);
    }

    let score_line = format!("Round score: {}", result.score);
    if result.score == FULL_RACK_SCORE {
        println!("{} {}", score_line.bright_green().bold(), "(full rack!)".bright_green());
    } else {
        println!("{}", score_line.bright_cyan());
    }
}

/// Print the end-of-game summary
pub fn print_game_summary(total_score: u32, rounds_played: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nTotal score after {rounds_played} rounds: {}\n",
        total_score.to_string().bright_yellow().bold()
    );
}

/// Print the result of solving a rack
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        format_letters(&result.letters.chars().collect::<Vec<_>>())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.longest_words.is_empty() {
        println!("\n{}", "No valid words can be formed.".red());
    } else {
        let length = result.longest_words[0].len();
        println!(
            "\nLongest word(s) ({length} letters): {}",
            format_word_list(&result.longest_words).bright_white().bold()
        );
        println!("Words found: {}", result.matches.len());
    }
    println!(
        "Score: {}",
        result.score.to_string().bright_cyan().bold()
    );

    if verbose && !result.matches.is_empty() {
        println!("\nAll matches (longest first):");
        for word in &result.matches {
            println!("  {} {}", format!("{:>2}", word.len()).bright_black(), word);
        }
    }
}

/// Print the match histogram for a rack
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RACK ANALYSIS:".bright_cyan().bold(),
        format_letters(&result.letters.chars().collect::<Vec<_>>())
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.by_length.is_empty() {
        println!("\nNo buildable words.");
        return;
    }

    let max_count = result
        .by_length
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(1);

    println!("\nBuildable words by length:");
    for &(length, count) in &result.by_length {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {length}: {} {count:4}", bar.green());
    }

    println!("\nTotal matches: {}", result.total_matches);
    println!(
        "Best ({} letters): {}",
        result.longest_words.first().map_or(0, String::len),
        format_word_list(&result.longest_words).bright_white().bold()
    );
    println!("Score: {}", result.score.to_string().bright_yellow());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_round_score)
            .bright_yellow()
            .bold()
    );
    println!("   Average matches:  {:.1}", result.average_matches);
    if let Some(word) = &result.best_word {
        println!(
            "   Best word:        {} ({} letters)",
            word.to_uppercase().bright_white().bold(),
            word.len()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Round score distribution:".bright_cyan().bold());
    let max_count = result
        .score_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);

    let mut scores: Vec<_> = result.score_distribution.iter().collect();
    scores.sort_unstable();
    for (&score, &count) in scores {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {score:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
