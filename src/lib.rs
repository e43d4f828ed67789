//! # Wordfit Solver
//!
//! Fit-the-words is a crossword-style puzzle: the player receives a grid with
//! some squares blacked out, a list of words, and one word already placed.
//! Every other word must be fitted into the grid so that all crossings agree.
//!
//! This crate solves such puzzles by constraint propagation alone. After the
//! seed word is placed, the solver repeatedly looks for a [slot](slot::Slot)
//! that exactly one remaining word can fill, commits that word, and lets the
//! new letters complete any crossing slots. There is deliberately no search
//! and no backtracking: a puzzle that stops yielding forced moves is reported
//! as [unsolvable](solver::UnsolvableError), rather than guessed at.

pub mod candidates;
pub mod grid;
pub mod puzzle;
pub mod slot;
pub mod solver;

pub use candidates::CandidatePool;
pub use grid::{Cell, Direction, Grid, Location};
pub use puzzle::Puzzle;
pub use slot::{Slot, SlotId};
pub use solver::{
	solve, Commit, Seed, SolveError, Solver, UnsolvableError, ValidationError
};
