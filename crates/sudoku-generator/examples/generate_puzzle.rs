//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` backed by a `BacktrackSolver`
//! - Generate a puzzle from a random, fixed, or phrase-derived seed
//! - Display the puzzle, solution, and seed
//! - Sample many seeds in parallel to chase a high empty-cell target
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, hard, extreme, insane):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! High targets (extreme, insane) are often unreachable from a single
//! seed. Sample several seeds in parallel and keep the emptiest puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty insane --samples 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use sudoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use sudoku_solver::BacktrackSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty name (case-insensitive; unknown names mean easy).
    #[arg(short, long, value_name = "NAME", default_value = "easy")]
    difficulty: String,

    /// Fixed seed as 64 hex characters. Ignores --phrase.
    #[arg(long, value_name = "HEX")]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE", conflicts_with = "seed")]
    phrase: Option<String>,

    /// Number of random seeds to sample; the emptiest puzzle wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from_name(&args.difficulty);
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => match hex.parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    if let Some(seed) = seed {
        let puzzle = generate(&generator, difficulty, seed);
        print_puzzle(difficulty, &puzzle, None);
        return;
    }

    if args.samples == 1 {
        let puzzle = generate(&generator, difficulty, PuzzleSeed::random());
        print_puzzle(difficulty, &puzzle, None);
        return;
    }

    let seeds: Vec<_> = (0..args.samples).map(|_| PuzzleSeed::random()).collect();
    let best = seeds
        .into_par_iter()
        .map(|seed| generate(&generator, difficulty, seed))
        .max_by_key(GeneratedPuzzle::empty_cells)
        .unwrap();
    print_puzzle(difficulty, &best, Some(args.samples));
}

fn generate(
    generator: &PuzzleGenerator<'_>,
    difficulty: Difficulty,
    seed: PuzzleSeed,
) -> GeneratedPuzzle {
    match generator.generate_with_seed(difficulty, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(difficulty: Difficulty, puzzle: &GeneratedPuzzle, samples: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!("  {difficulty} (target {} empty cells)", difficulty.empty_cells());
    if let Some(samples) = samples {
        println!("  Sampled seeds: {samples}");
    }
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    if puzzle.is_exhausted() {
        println!(
            "Removal exhausted: {} of {} cells emptied.",
            puzzle.empty_cells(),
            puzzle.requested_empty_cells()
        );
    } else {
        println!("Empty cells: {}", puzzle.empty_cells());
    }
}
