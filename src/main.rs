//! Mastermind Solver - CLI
//!
//! Knuth-style minimax codebreaker for bulls-and-cows Mastermind.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_guess, play_game, print_test_all_statistics, random_secrets,
        run_benchmark, run_simple, run_test_all, solve_secret,
    },
    core::GameConfig,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using worst-case minimax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of distinct digits (alphabet size)
    #[arg(short, long, global = true, default_value = "10")]
    base: u8,

    /// Number of positions in a code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Guess rows on the board (0 for unlimited)
    #[arg(short, long, global = true, default_value = "10")]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Crack a random secret (default)
    Play {
        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive mode: you keep the secret, the solver guesses
    Simple,

    /// Crack a specific secret
    Solve {
        /// The secret code, e.g. 3719
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess partitions every possible secret
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible secret selection
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let game = GameConfig::new(cli.base, cli.length)?.with_max_guesses(cli.max_guesses);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { verbose: false });

    match command {
        Commands::Play { verbose } => run_play_command(&game, verbose),
        Commands::Simple => run_simple(&game),
        Commands::Solve { secret, verbose } => {
            let result = solve_secret(&SolveConfig::new(secret, game))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, &game)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random secrets...");
            let secrets = random_secrets(&game, count, seed);
            let result = run_benchmark(&game, &secrets)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(&game, limit),
    }
}

fn run_play_command(game: &GameConfig, verbose: bool) -> Result<()> {
    let Some(&secret) = random_secrets(game, 1, None).first() else {
        anyhow::bail!("no secret exists for base {} length {}", game.base(), game.code_len());
    };

    println!("🎲 Secret drawn at random.");
    let result = play_game(game, secret)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(game: &GameConfig, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nBase {}, length {}: {} possible secrets",
        game.base(),
        game.code_len(),
        game.space_size()
    );
    match game.max_guesses() {
        Some(rows) => println!("Guess rows: {rows}"),
        None => println!("Guess rows: {}", "unlimited".bright_black()),
    }
    println!();

    let stats = run_test_all(game, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}
