//! Countdown Letters - CLI
//!
//! Letters-round word game: pick nine letters, find the longest word,
//! score across rounds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_letters::{
    commands::{PlayConfig, analyze_letters, run_benchmark, run_play, solve_letters},
    core::Word,
    game::DEFAULT_ROUNDS,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{
        BUILTIN,
        loader::{dictionary_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "countdown_letters",
    about = "Letters-round word game: draw nine letters, find the longest word",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a word file (e.g. words_alpha.txt)
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for deterministic shuffles and draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive console game (default)
    Play {
        /// Number of rounds per game
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,
    },

    /// Find the best words for a nine-letter rack
    Solve {
        /// The nine drawn letters, e.g. owqndtaey
        letters: String,

        /// List every match, longest first
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how many words each length yields for a rack
    Analyze {
        /// The nine drawn letters
        letters: String,
    },

    /// Auto-play games with random draws and report statistics
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        games: usize,

        /// Rounds per game
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "builtin": the small embedded list, playable with zero setup
/// - `<path>`: a whitespace-delimited word file
fn load_wordlist(mode: &str) -> Result<Vec<Word>> {
    match mode {
        "builtin" => Ok(dictionary_from_slice(BUILTIN)),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;
    if dictionary.is_empty() {
        anyhow::bail!("wordlist '{}' contains no usable words", cli.wordlist);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        rounds: DEFAULT_ROUNDS,
    });

    match command {
        Commands::Play { rounds } => {
            let config = PlayConfig::new(rounds, cli.seed);
            run_play(&dictionary, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { letters, verbose } => {
            let result = solve_letters(&letters, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { letters } => {
            let result = analyze_letters(&letters, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { games, rounds } => {
            let result = run_benchmark(&dictionary, games, rounds, cli.seed.unwrap_or(0))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
