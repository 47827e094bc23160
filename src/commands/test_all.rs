//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every secret in the combination space and
//! generates statistics. The solver is deterministic, so games against
//! different secrets share their moves until the responses differ; the
//! evaluation walks that decision tree once instead of replaying every game
//! from the start.

use crate::core::{Code, CombinationSpace, GameConfig, Response};
use crate::error::SolverError;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Result from playing against a single secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
}

impl SecretTestResult {
    /// Number of guesses made, including the winning one
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening: Option<Code>,
    pub hardest: Vec<(Code, usize)>,
}

/// Run the solver on every secret (or the first `limit` in generation order)
///
/// # Errors
///
/// Returns the solver's error if it rejects a truthful response.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_test_all(game: &GameConfig, limit: Option<usize>) -> Result<TestAllStatistics, SolverError> {
    let space = CombinationSpace::for_config(game);
    let secrets: Vec<Code> = space
        .iter()
        .copied()
        .take(limit.unwrap_or(space.len()))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results = evaluate_secrets(game, &secrets, &pb)?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&results, start.elapsed()))
}

/// Play every secret in `secrets`, returning one result per secret in input order
///
/// # Errors
///
/// Returns the solver's error if it rejects a truthful response.
pub fn evaluate_secrets(
    game: &GameConfig,
    secrets: &[Code],
    pb: &ProgressBar,
) -> Result<Vec<SecretTestResult>, SolverError> {
    let mut results = Vec::with_capacity(secrets.len());
    if secrets.is_empty() {
        return Ok(results);
    }

    let mut solver = Solver::new(*game);
    let opening = solver.first_guess()?;
    let mut path = vec![opening];
    walk(&solver, secrets.to_vec(), &mut path, &mut results, pb)?;

    let order: HashMap<Code, usize> = secrets.iter().enumerate().map(|(i, s)| (*s, i)).collect();
    results.sort_by_key(|r| order.get(&r.secret).copied().unwrap_or(usize::MAX));
    Ok(results)
}

/// Split `secrets` by their response to the guess at the end of `path` and
/// follow each branch
fn walk(
    solver: &Solver,
    secrets: Vec<Code>,
    path: &mut Vec<Code>,
    results: &mut Vec<SecretTestResult>,
    pb: &ProgressBar,
) -> Result<(), SolverError> {
    let len = solver.config().code_len();
    let Some(&guess) = path.last() else {
        return Ok(());
    };

    let mut groups: BTreeMap<Response, Vec<Code>> = BTreeMap::new();
    for secret in secrets {
        groups
            .entry(Response::score(&guess, &secret))
            .or_default()
            .push(secret);
    }

    for (response, group) in groups {
        if response.is_perfect(len) {
            results.push(SecretTestResult {
                secret: guess,
                guesses: path.clone(),
                success: true,
            });
            pb.inc(1);
            continue;
        }

        let mut branch = solver.clone();
        match branch.guess_again(response) {
            Ok(next) => {
                pb.set_message(format!("{} candidates after {guess}", group.len()));
                path.push(next);
                walk(&branch, group, path, results, pb)?;
                path.pop();
            }
            Err(SolverError::Exhausted { .. }) => {
                pb.inc(group.len() as u64);
                results.extend(group.into_iter().map(|secret| SecretTestResult {
                    secret,
                    guesses: path.clone(),
                    success: false,
                }));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Aggregate per-secret results
#[must_use]
pub fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses()).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses()).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses()).min().unwrap_or(0);

    let mut hardest: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses() == max_guesses)
        .map(|r| (r.secret, r.num_guesses()))
        .collect();
    hardest.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        opening: results.first().and_then(|r| r.guesses.first().copied()),
        hardest,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    if let Some(opening) = stats.opening {
        println!("  Opening guess:        {opening}");
    }
    println!(
        "  Cracked:              {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved, stats.total_secrets)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Out of guesses:       {} {}",
            stats.failed,
            format!("({:.1}%)", percent(stats.failed, stats.total_secrets)).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Worst case:           {}",
        format!("{} guesses", stats.max_guesses).yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 && guesses > 0 {
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!(
                "  {guesses} guesses: {bar} {count:5} ({:5.1}%)",
                percent(count, stats.solved)
            );
        }
    }

    if !stats.hardest.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Secrets ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        for (secret, _) in stats.hardest.iter().take(5) {
            println!("  {}", secret.to_string().yellow());
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
