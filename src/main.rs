//! Hangman Solver - CLI
//!
//! Guesses the player's word one letter at a time, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        SimpleConfig, SolveConfig, analyze_pattern, run_benchmark, run_simple, select_targets,
        solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{
        GameConfig, Strategy, StrategyType,
        config::{DEFAULT_MAX_WRONG_GUESSES, DEFAULT_THINKING_LIMIT},
    },
    wordlists::loader::{embedded_words, load_from_file},
};
use log::info;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman guesser that narrows a ranked word list and picks the most likely letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: weighted (default), uniform, random
    #[arg(short, long, global = true, default_value = "weighted")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file ordered most common first
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed before the player wins
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
    max_wrong: usize,

    /// Candidates to show while thinking, 0 for all of them
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_THINKING_LIMIT)]
    thinking: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Word length, asked for each game when omitted
        #[arg(short, long)]
        length: Option<usize>,

        /// Do not clear the screen between rounds
        #[arg(long)]
        no_clear: bool,
    },

    /// Play against a known word
    Solve {
        /// The word to guess
        word: String,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show what the solver sees in a position
    Analyze {
        /// Revealed pattern, '_' or '.' for unknown letters (e.g. _a_e)
        pattern: String,

        /// Letters already guessed and missed
        #[arg(short = 'x', long, default_value = "")]
        misses: String,
    },

    /// Benchmark solver performance on words of one length
    Benchmark {
        /// Number of random words to test, all of them when omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Word length to test
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(embedded_words()),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let words = load_words(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let thinking_limit = (cli.thinking > 0).then_some(cli.thinking);
    info!("{} words loaded, strategy {}", words.len(), strategy.name());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(strategy, &words, cli.max_wrong, thinking_limit),
        Commands::Simple { length, no_clear } => run_simple(
            strategy,
            &words,
            SimpleConfig {
                length,
                max_wrong_guesses: cli.max_wrong,
                thinking_limit,
                clear_screen: !no_clear,
            },
        ),
        Commands::Solve { word, verbose } => {
            run_solve_command(strategy, &word, verbose, &words, cli.max_wrong)
        }
        Commands::Analyze { pattern, misses } => {
            // Length comes from the pattern; only the budget and limit matter here
            let config = GameConfig::new(1)?
                .with_max_wrong_guesses(cli.max_wrong)?
                .with_thinking_limit(thinking_limit);
            let result = analyze_pattern(&pattern, &misses, strategy, &words, config)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(strategy, &words, count, length, seed, cli.max_wrong),
    }
}

fn run_solve_command<S: Strategy>(
    strategy: S,
    word: &str,
    verbose: bool,
    words: &[Word],
    max_wrong_guesses: usize,
) -> Result<()> {
    let config = SolveConfig {
        target: word.to_string(),
        max_wrong_guesses,
    };
    let result = solve_word(&config, strategy, words)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy: StrategyType,
    words: &[Word],
    count: Option<usize>,
    length: usize,
    seed: Option<u64>,
    max_wrong_guesses: usize,
) -> Result<()> {
    let targets = select_targets(words, length, count, seed);
    if targets.is_empty() {
        anyhow::bail!("No words of length {length} in the word list");
    }

    println!(
        "Running benchmark on {} words of length {length} with the {} strategy...",
        targets.len(),
        strategy.name()
    );

    let result = run_benchmark(strategy, words, &targets, max_wrong_guesses, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(
    strategy: StrategyType,
    words: &[Word],
    max_wrong_guesses: usize,
    thinking_limit: Option<usize>,
) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    // Fail before entering the alternate screen
    GameConfig::new(1)?.with_max_wrong_guesses(max_wrong_guesses)?;

    let app = App::new(words, strategy, max_wrong_guesses, thinking_limit);
    run_tui(app)
}
