//! Whole-space properties of the 10-digit, 4-position game

use indicatif::ProgressBar;
use mastermind_solver::commands::{evaluate_secrets, summarize};
use mastermind_solver::core::{Code, CombinationSpace, GameConfig, Response};
use mastermind_solver::solver::{Solver, SolverState};
use std::collections::HashSet;
use std::time::Duration;

fn unlimited() -> GameConfig {
    GameConfig::default().with_max_guesses(0)
}

fn code(text: &str) -> Code {
    Code::parse(text, &GameConfig::default()).unwrap()
}

#[test]
fn space_is_exhaustive_and_distinct() {
    let space = CombinationSpace::generate(10, 4).unwrap();

    assert_eq!(space.len(), 5040);
    let unique: HashSet<Code> = space.iter().copied().collect();
    assert_eq!(unique.len(), 5040);

    for code in &space {
        let digits: HashSet<u8> = code.digits().iter().copied().collect();
        assert_eq!(digits.len(), 4);
        assert!(code.digits().iter().all(|&d| d < 10));
    }
}

#[test]
fn too_long_codes_are_a_configuration_error() {
    assert!(CombinationSpace::generate(3, 4).is_err());
}

#[test]
fn scoring_examples() {
    assert_eq!(Response::score(&code("1234"), &code("1234")), Response::new(4, 0));
    assert_eq!(Response::score(&code("1234"), &code("4321")), Response::new(0, 4));
    assert_eq!(Response::score(&code("1234"), &code("1567")), Response::new(1, 0));
    assert_eq!(Response::score(&code("1234"), &code("5678")), Response::new(0, 0));
}

#[test]
fn scoring_is_symmetric_and_bounded() {
    let space = CombinationSpace::generate(10, 4).unwrap();

    for guess in space.iter().step_by(13) {
        for candidate in &space {
            let forward = Response::score(guess, candidate);
            assert_eq!(forward, Response::score(candidate, guess));
            assert!(forward.is_possible(4));
            assert_eq!(forward.is_perfect(4), guess == candidate);
        }
    }
}

#[test]
fn every_secret_is_cracked_within_seven_guesses() {
    let game = unlimited();
    let space = CombinationSpace::for_config(&game);

    let results = evaluate_secrets(&game, space.codes(), &ProgressBar::hidden()).unwrap();
    assert_eq!(results.len(), 5040);

    for result in &results {
        assert!(result.success, "{} was not cracked", result.secret);
        assert!(
            result.num_guesses() <= 7,
            "{} took {} guesses",
            result.secret,
            result.num_guesses()
        );
        assert_eq!(result.guesses.last(), Some(&result.secret));
    }

    let stats = summarize(&results, Duration::ZERO);
    assert_eq!(stats.solved, 5040);
    assert_eq!(stats.opening, Some(code("0123")));
}

#[test]
fn secret_stays_among_candidates() {
    let game = unlimited();

    for secret in ["3719", "9876", "4501", "2086", "1032"] {
        let secret = code(secret);
        let mut solver = Solver::new(game);
        let mut history: Vec<(Code, Response)> = Vec::new();
        let mut guess = solver.first_guess().unwrap();

        loop {
            let response = Response::score(&guess, &secret);
            if response.is_perfect(4) {
                break;
            }
            history.push((guess, response));
            guess = solver.guess_again(response).unwrap();

            assert!(guess == secret || solver.is_candidate(&secret));
            for candidate in solver.candidates() {
                for (past, past_response) in &history {
                    assert_eq!(Response::score(past, candidate), *past_response);
                }
            }
        }
    }
}

#[test]
fn reset_restores_fresh_state() {
    let mut solver = Solver::new(unlimited());
    let first = solver.first_guess().unwrap();
    let secret = code("8417");
    solver
        .guess_again(Response::score(&first, &secret))
        .unwrap();

    solver.reset();
    assert_eq!(solver.state(), SolverState::Fresh);
    assert_eq!(solver.candidates().len(), 5040);
    assert_eq!(solver.untried().len(), 5040);
    assert_eq!(solver.last_guess(), None);
    assert_eq!(solver.guesses_made(), 0);

    solver.reset();
    assert_eq!(solver.first_guess().unwrap(), first);
}

#[test]
fn identical_histories_give_identical_guesses() {
    let secret = code("5903");
    let mut a = Solver::new(unlimited());
    let mut b = Solver::new(unlimited());

    let mut guess_a = a.first_guess().unwrap();
    let mut guess_b = b.first_guess().unwrap();
    assert_eq!(guess_a, guess_b);

    while guess_a != secret {
        let response = Response::score(&guess_a, &secret);
        guess_a = a.guess_again(response).unwrap();
        guess_b = b.guess_again(response).unwrap();
        assert_eq!(guess_a, guess_b);
        assert_eq!(a.candidates(), b.candidates());
    }
}

#[test]
fn cracks_3719_from_0123() {
    let secret = code("3719");
    let mut solver = Solver::new(unlimited());

    let mut guess = solver.first_guess().unwrap();
    assert_eq!(guess, code("0123"));

    let mut turns = 1;
    loop {
        let response = Response::score(&guess, &secret);
        if response.is_perfect(4) {
            break;
        }
        guess = solver.guess_again(response).unwrap();
        turns += 1;
    }

    assert_eq!(guess, secret);
    assert!(turns <= 7);

    // The host may confirm the win through the solver as well.
    assert_eq!(solver.guess_again(Response::perfect(4)).unwrap(), secret);
    assert_eq!(solver.state(), SolverState::Solved);
}
