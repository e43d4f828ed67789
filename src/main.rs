//! # Wordfit Solver
//!
//! Command line driver for the fit-the-words solver. The puzzle is read from
//! a JSON definition, optionally augmented by a word list, and the solved grid
//! is written to standard output, one row per line.

use std::{path::PathBuf, process::exit, time::Duration};

use clap::Parser;
use log::{debug, trace};

use wordfit_solver::puzzle::Puzzle;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving fit-the-words puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Opts
{
	/// The path to the JSON puzzle definition.
	puzzle: PathBuf,

	/// The path to a word list, one word per line. Its words are added to the
	/// candidate words of the puzzle definition.
	#[arg(short = 'w', long)]
	words: Option<PathBuf>,

	/// How long (in ms) the solver may run before giving up. Unlimited by
	/// default.
	#[arg(short = 't', long)]
	time_limit: Option<u64>,

	/// Suppress emission of the solved grid to standard output.
	#[arg(short = 'q', long)]
	quiet: bool
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options, then read and solve the puzzle.
fn main()
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Read the puzzle definition and any supplementary word list.
	let mut puzzle = Puzzle::open(&opts.puzzle)
		.unwrap_or_else(|e|
			panic!("Failed to read puzzle: {}: {}", opts.puzzle.display(), e)
		);
	if let Some(words) = &opts.words
	{
		puzzle.add_words_from_file(words)
			.unwrap_or_else(|e|
				panic!("Failed to read word list: {}: {}", words.display(), e)
			);
	}

	// Place the seed and run the solver.
	let mut solver = puzzle.solver().unwrap_or_else(|e| fail(e));
	let duration = opts.time_limit
		.map(Duration::from_millis)
		.unwrap_or(Duration::MAX);
	match solver.solve(duration)
	{
		Ok(true) => trace!("Solved after {} commits", solver.commits().len()),
		Ok(false) => fail(format!(
			"time limit exceeded with {} slots unsolved",
			solver.unsolved_count()
		)),
		Err(e) => fail(e)
	}
	if !opts.quiet
	{
		print!("{}", solver.grid());
	}
}

/// Report a failure to solve the puzzle and exit.
///
/// # Arguments
///
/// * `reason` - Why the puzzle could not be solved.
fn fail<T: std::fmt::Display>(reason: T) -> !
{
	eprintln!("Failed to solve puzzle: {}", reason);
	exit(1)
}
