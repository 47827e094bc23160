//! Display functions for command results

use super::formatters::{create_progress_bar, pegs_to_string};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the transcript of a solved (or lost) game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Cracking: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            step.guess.to_string().bold(),
            pegs_to_string(step.response, result.code_len),
            step.response.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Code safe after {} guesses (secret was {})",
                result.guesses.len(),
                result.secret
            )
            .red()
            .bold()
        );
    }
}

/// Print how a guess partitions the combination space
pub fn print_analysis_result(result: &AnalysisResult) {
    let len = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} remain", result.worst_case).bright_yellow()
    );
    println!("   Eliminated:  at least {}", result.eliminated);

    println!("\n📈 {}", "Response groups:".bright_cyan().bold());
    let largest = result.worst_case as f64;
    for (response, count) in &result.groups {
        let bar = create_progress_bar(*count as f64, largest, 30);
        let line = format!(
            "   {} {:>5} [{}] {count}",
            pegs_to_string(*response, len),
            response.to_string(),
            bar
        );
        if *count == result.worst_case {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_games);
    println!("   Cracked:          {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
