//! # Puzzle
//!
//! Herein is support for reading puzzle definitions. A definition is a JSON
//! document naming the dimensions of the grid, the blocked cells of each row,
//! the candidate words, and the seed:
//!
//! ```json
//! {
//!     "height": 3,
//!     "width": 5,
//!     "blocked": [[], [1, 3], []],
//!     "words": ["stare", "eater", "she", "apt", "ear"],
//!     "seed": { "word": "stare", "x": 0, "y": 0, "direction": "horizontal" }
//! }
//! ```
//!
//! Candidate words may also be supplied separately, as a word list with one
//! word per line.

use std::{
	fs::File,
	io::{self, BufReader, ErrorKind},
	path::Path
};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
	candidates::CandidatePool,
	grid::Grid,
	solver::{Seed, SolveError, Solver}
};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// The definition of a fit-the-words puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Puzzle
{
	/// The number of rows.
	pub height: usize,

	/// The number of columns.
	pub width: usize,

	/// The blocked x-coordinates of each row, starting with row 0.
	#[serde(default)]
	pub blocked: Vec<Vec<usize>>,

	/// The candidate words.
	#[serde(default)]
	pub words: Vec<String>,

	/// The word placed before solving begins.
	pub seed: Seed
}

impl Puzzle
{
	/// Read a puzzle definition from the given JSON file.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// The puzzle definition.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file is not a valid puzzle definition, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path.as_ref())?;
		let puzzle = Self::from_reader(BufReader::new(file))?;
		trace!("Read puzzle: {}", path.as_ref().display());
		Ok(puzzle)
	}

	/// Read a puzzle definition from JSON text.
	///
	/// # Errors
	///
	/// [`ErrorKind::InvalidData`] if the text is not a valid puzzle
	/// definition.
	pub fn from_json(json: &str) -> Result<Self, io::Error>
	{
		serde_json::from_str(json)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
	}

	fn from_reader<R: io::Read>(reader: R) -> Result<Self, io::Error>
	{
		serde_json::from_reader(reader)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
	}

	/// Append the words of a word list to the candidate words. Each line in
	/// the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The word list.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn add_words_from_file<T: AsRef<Path>>(
		&mut self,
		path: T
	) -> Result<(), io::Error>
	{
		let pool = CandidatePool::read_from_file(path.as_ref())?;
		trace!(
			"Read {} words: {}",
			pool.len(),
			path.as_ref().display()
		);
		self.words.extend(pool.iter().map(str::to_string));
		Ok(())
	}

	/// Construct the empty grid described by the puzzle.
	#[inline]
	pub fn grid(&self) -> Grid
	{
		Grid::new(self.height, self.width, &self.blocked)
	}

	/// Construct the candidate pool described by the puzzle.
	#[inline]
	pub fn candidates(&self) -> CandidatePool
	{
		self.words.iter().collect()
	}

	/// Construct a solver for the puzzle, with the seed already placed.
	///
	/// # Errors
	///
	/// [`SolveError::Validation`] if the seed cannot be placed.
	pub fn solver(&self) -> Result<Solver, SolveError>
	{
		Solver::new(self.grid(), self.candidates(), &self.seed)
	}

	/// Solve the puzzle.
	///
	/// # Returns
	///
	/// The solved grid.
	///
	/// # Errors
	///
	/// Any error raised while placing the seed or solving.
	pub fn solve(&self) -> Result<Grid, SolveError>
	{
		self.solver()?.solve_fully()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::io::{ErrorKind, Write};

	use crate::{
		grid::Direction,
		puzzle::Puzzle,
		solver::{Seed, SolveError, ValidationError}
	};
	use tempfile::NamedTempFile;

	/// The path to the sample puzzle.
	#[inline]
	#[must_use]
	const fn sample_path() -> &'static str { "puzzles/sample.json" }

	/// The path to the word list accompanying the large puzzle.
	#[inline]
	#[must_use]
	const fn large_words_path() -> &'static str { "puzzles/large.txt" }

	/// The path to the large puzzle, whose definition carries no words.
	#[inline]
	#[must_use]
	const fn large_path() -> &'static str { "puzzles/large.json" }

	/// Test reading a puzzle definition from text:
	///
	/// * [`Puzzle::from_json`]
	#[test]
	fn test_from_json()
	{
		let puzzle = Puzzle::from_json(
			r#"{
				"height": 1,
				"width": 3,
				"words": ["cat"],
				"seed": { "word": "cat", "x": 0, "y": 0, "direction": "horizontal" }
			}"#
		).unwrap();
		assert_eq!(puzzle.height, 1);
		assert_eq!(puzzle.width, 3);
		assert!(puzzle.blocked.is_empty());
		assert_eq!(puzzle.seed, Seed::new("cat", 0, 0, Direction::Horizontal));
		let grid = puzzle.solve().unwrap();
		assert_eq!(grid.to_string(), "cat\n");

		let error = Puzzle::from_json(r#"{ "height": 1 }"#).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::InvalidData);
		let error = Puzzle::from_json(
			r#"{
				"height": 1,
				"width": 3,
				"seed": { "word": "cat", "x": 0, "y": 0, "direction": "diagonal" }
			}"#
		).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::InvalidData);
	}

	/// Ensure that a seed placed inside a slot is rejected.
	#[test]
	fn test_invalid_seed()
	{
		let puzzle = Puzzle::from_json(
			r#"{
				"height": 1,
				"width": 3,
				"words": ["cat"],
				"seed": { "word": "at", "x": 1, "y": 0, "direction": "horizontal" }
			}"#
		).unwrap();
		assert!(matches!(
			puzzle.solve(),
			Err(SolveError::Validation(
				ValidationError::SeedNotAtSlotStart { .. }
			))
		));
	}

	/// Test reading and solving the sample puzzle:
	///
	/// * [`Puzzle::open`]
	/// * [`Puzzle::solve`]
	#[test]
	fn test_sample()
	{
		let puzzle = Puzzle::open(sample_path()).unwrap();
		let mut solver = puzzle.solver().unwrap();
		let grid = solver.clone().solve_fully().unwrap();
		assert!(grid.is_complete());
		assert_eq!(
			grid.rows().collect::<Vec<_>>(),
			vec!["stare", "h#p#a", "eater"]
		);
		// The distractor survives.
		while solver.step().unwrap().is_some() {}
		assert_eq!(solver.candidates().iter().collect::<Vec<_>>(), vec!["ape"]);
	}

	/// Test solving a puzzle whose words come from a separate word list:
	///
	/// * [`Puzzle::add_words_from_file`]
	#[test]
	fn test_large()
	{
		let mut puzzle = Puzzle::open(large_path()).unwrap();
		assert!(puzzle.words.is_empty());
		puzzle.add_words_from_file(large_words_path()).unwrap();
		let grid = puzzle.solve().unwrap();
		assert!(grid.is_complete());
		assert_eq!(
			grid.rows().collect::<Vec<_>>(),
			vec!["crane", "i#l#a", "debut", "e#u#e", "ramen"]
		);
	}

	/// Test round-tripping a definition through a file.
	#[test]
	fn test_open()
	{
		let puzzle = Puzzle::open(sample_path()).unwrap();
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "{}", serde_json::to_string(&puzzle).unwrap()).unwrap();
		assert_eq!(Puzzle::open(file.path()).unwrap(), puzzle);
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "not json").unwrap();
		assert_eq!(
			Puzzle::open(file.path()).unwrap_err().kind(),
			ErrorKind::InvalidData
		);
	}
}
