//! # Solver
//!
//! Herein is the solver for fit-the-words puzzles. The solver is a pure
//! forced-move reducer: it commits a word to a slot only when exactly one
//! remaining candidate fits that slot, and it never guesses or backtracks.
//! Puzzles that cannot be completed by a sequence of forced moves are
//! reported as [unsolvable](UnsolvableError), even if a solution exists.

use std::{
	collections::{BTreeMap, BTreeSet},
	error::Error,
	fmt::{self, Display, Formatter},
	time::{Duration, Instant}
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
	candidates::CandidatePool,
	grid::{Direction, Grid, Location},
	slot::{same_letter, SlotId}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of the solver. The puzzle is solved iteratively, one
/// forced move at a time, so the work can be time-sliced by the caller.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The grid, whose cells receive letters as slots are committed.
	grid: Grid,

	/// The words that have not yet been placed.
	candidates: CandidatePool,

	/// The slots that still have at least one unsolved cell.
	unsolved: UnsolvedSlots,

	/// Every commit made so far, the seed first.
	commits: Vec<Commit>
}

impl Solver
{
	/// Construct a new solver and place the seed word.
	///
	/// # Arguments
	///
	/// * `grid` - The grid to fill. Its cells should all be unsolved.
	/// * `candidates` - The words available for placement.
	/// * `seed` - The word to place before solving begins.
	///
	/// # Returns
	///
	/// A solver ready to [step](Self::step).
	///
	/// # Errors
	///
	/// [`SolveError::Validation`] if the seed cannot be placed.
	pub fn new(
		grid: Grid,
		candidates: CandidatePool,
		seed: &Seed
	) -> Result<Self, SolveError>
	{
		let unsolved = UnsolvedSlots::from_grid(&grid);
		let mut solver = Self
		{
			grid,
			candidates,
			unsolved,
			commits: Vec::new()
		};
		solver.place_seed(seed)?;
		Ok(solver)
	}

	/// Validate the seed against the grid and commit it.
	///
	/// # Errors
	///
	/// * [`ValidationError::SeedSlotNotFound`] if no slot runs through the
	///   seed location in the seed direction.
	/// * [`ValidationError::SeedNotAtSlotStart`] if the seed location is not
	///   the first cell of its slot.
	/// * [`ValidationError::SeedLengthMismatch`] if the seed word does not
	///   fill its slot exactly.
	fn place_seed(&mut self, seed: &Seed) -> Result<(), ValidationError>
	{
		let slot = self.grid.slot_at(seed.location, seed.direction)
			.ok_or(ValidationError::SeedSlotNotFound {
				location: seed.location,
				direction: seed.direction
			})?;
		if slot.start() != seed.location
		{
			return Err(ValidationError::SeedNotAtSlotStart {
				location: seed.location,
				direction: seed.direction,
				start: slot.start()
			})
		}
		let length = seed.word.chars().count();
		if length != slot.len()
		{
			return Err(ValidationError::SeedLengthMismatch {
				word: seed.word.clone(),
				expected: slot.len(),
				actual: length
			})
		}
		debug!("placing seed: {} ← {}", slot, seed.word);
		let id = slot.id();
		self.commit(id, &seed.word);
		Ok(())
	}

	/// Check if the solver is finished, i.e., every slot is solved and every
	/// active cell holds a letter.
	#[inline]
	#[must_use]
	pub fn is_finished(&self) -> bool
	{
		self.unsolved.is_empty()
	}

	/// Get the number of slots that are not yet solved.
	#[inline]
	#[must_use]
	pub fn unsolved_count(&self) -> usize
	{
		self.unsolved.len()
	}

	/// Get the grid in its current state.
	#[inline]
	pub fn grid(&self) -> &Grid
	{
		&self.grid
	}

	/// Get the words that have not yet been placed.
	#[inline]
	pub fn candidates(&self) -> &CandidatePool
	{
		&self.candidates
	}

	/// Get every commit made so far, in order. The seed is the first.
	#[inline]
	#[must_use]
	pub fn commits(&self) -> &[Commit]
	{
		&self.commits
	}

	/// Perform a single forced move. The unsolved slots are scanned longest
	/// first (ties in extraction order), and the first slot matched by
	/// exactly one remaining candidate is committed.
	///
	/// # Returns
	///
	/// The commit, or `None` if the solver was already finished.
	///
	/// # Errors
	///
	/// * [`UnsolvableError::NoMatches`] if a scanned slot is matched by no
	///   remaining candidate.
	/// * [`UnsolvableError::Stuck`] if every unsolved slot is matched by two
	///   or more candidates, counting duplicate copies separately.
	pub fn step(&mut self) -> Result<Option<&Commit>, SolveError>
	{
		if self.is_finished()
		{
			trace!("solver is already finished");
			return Ok(None)
		}
		for id in self.unsolved.by_descending_length()
		{
			if let Some(word) = self.forced_word(id)?
			{
				return Ok(self.commit(id, &word))
			}
		}
		Err(UnsolvableError::Stuck { unsolved: self.unsolved.len() }.into())
	}

	/// Match a slot against the remaining candidates.
	///
	/// # Returns
	///
	/// The only candidate that fits the slot, or `None` if several do.
	///
	/// # Errors
	///
	/// [`UnsolvableError::NoMatches`] if no candidate fits the slot.
	fn forced_word(&self, id: SlotId) -> Result<Option<String>, UnsolvableError>
	{
		let slot = self.grid.slot(id);
		let pattern = slot.pattern(&self.grid);
		let matches = self.candidates.matches(&pattern);
		trace!("considering: {}: {} ({} matches)", slot, pattern, matches.len());
		match matches.as_slice()
		{
			[] => Err(UnsolvableError::NoMatches { slot: id, pattern }),
			[word] =>
			{
				debug!("forced move: {} ← {}", slot, word);
				Ok(Some(word.to_string()))
			},
			_ => Ok(None)
		}
	}

	/// Run forced moves until the puzzle is finished or the specified quantum
	/// elapses. Always perform at least one step, even if the quantum is
	/// zero, to ensure that the solver always makes progress.
	///
	/// # Arguments
	///
	/// * `duration` - The maximum amount of time to run before returning
	///   control to the caller.
	///
	/// # Returns
	///
	/// `true` if the puzzle is finished, `false` if the quantum elapsed first.
	///
	/// # Errors
	///
	/// [`SolveError::Unsolvable`] if no forced move remains.
	pub fn solve(&mut self, duration: Duration) -> Result<bool, SolveError>
	{
		let start_time = Instant::now();
		loop
		{
			let progressed = self.step()?.is_some();
			if !progressed || self.is_finished()
			{
				return Ok(true)
			}
			let elapsed = start_time.elapsed();
			if elapsed >= duration
			{
				trace!("quantum elapsed: {:?}", elapsed);
				return Ok(false)
			}
		}
	}

	/// Run forced moves until the puzzle is finished.
	///
	/// # Returns
	///
	/// The solved grid, in which every active cell holds a letter.
	///
	/// # Errors
	///
	/// [`SolveError::Unsolvable`] if no forced move remains.
	pub fn solve_fully(mut self) -> Result<Grid, SolveError>
	{
		while self.step()?.is_some() {}
		debug!("solved after {} commits", self.commits.len());
		Ok(self.grid)
	}

	/// Release the grid in its current state, solved or not.
	#[inline]
	pub fn into_grid(self) -> Grid
	{
		self.grid
	}

	/// Commit a word to a slot and cascade into the crossing slots. Nothing
	/// happens if the slot is already solved.
	///
	/// # Arguments
	///
	/// * `id` - The slot to fill.
	/// * `word` - The word, which must fit the slot.
	///
	/// # Returns
	///
	/// The commit, or `None` if the slot was already solved.
	pub(crate) fn commit(&mut self, id: SlotId, word: &str) -> Option<&Commit>
	{
		let slot = self.grid.slot(id);
		if !self.unsolved.remove(slot.len(), id)
		{
			trace!("already solved: {}", slot);
			return None
		}
		debug_assert_eq!(word.chars().count(), slot.len());
		if !self.candidates.remove(word)
		{
			debug!("committed word is not a candidate: {}", word);
		}
		let locations = slot.locations().to_vec();
		let crossing = slot.direction().crossing();
		let mut completed = Vec::new();
		for (location, letter) in locations.into_iter().zip(word.chars())
		{
			match self.grid.character(location)
			{
				// The word was matched against the pattern of the slot, so a
				// filled cell already holds the same letter. The seed is
				// committed before any cell is filled.
				Some(existing) => debug_assert!(
					same_letter(existing, letter),
					"{} holds {}, not {}",
					location,
					existing,
					letter
				),
				None => { self.grid.set_character(location, letter); }
			}
			let cross = self.grid.cell(location)
				.and_then(|cell| cell.slot(crossing));
			if let Some(cross) = cross
			{
				if self.complete_crossing(cross)
				{
					completed.push(cross);
				}
			}
		}
		self.commits.push(Commit { slot: id, word: word.to_string(), completed });
		self.commits.last()
	}

	/// Retire a crossing slot whose cells are now all solved, consuming the
	/// word it spells without matching it against the candidates.
	///
	/// # Returns
	///
	/// `true` if the slot was retired, `false` if it is incomplete or already
	/// solved.
	fn complete_crossing(&mut self, id: SlotId) -> bool
	{
		let slot = self.grid.slot(id);
		let Some(word) = slot.word(&self.grid) else { return false };
		if !self.unsolved.remove(slot.len(), id)
		{
			return false
		}
		if self.candidates.remove(&word)
		{
			debug!("completed by cascade: {} = {}", slot, word);
		}
		else
		{
			debug!("completed by cascade, not a candidate: {} = {}", slot, word);
		}
		true
	}
}

/// Solve a fit-the-words puzzle from its raw description.
///
/// # Arguments
///
/// * `height` - The number of rows.
/// * `width` - The number of columns.
/// * `blocked` - The blocked x-coordinates of each row, starting with row 0.
/// * `words` - The candidate words; duplicates are tracked independently.
/// * `seed` - The word to place before solving begins.
///
/// # Returns
///
/// The solved grid.
///
/// # Errors
///
/// * [`SolveError::Validation`] if the seed cannot be placed.
/// * [`SolveError::Unsolvable`] if no forced move remains before the grid is
///   complete.
pub fn solve<B, W>(
	height: usize,
	width: usize,
	blocked: &[B],
	words: &[W],
	seed: &Seed
) -> Result<Grid, SolveError>
where
	B: AsRef<[usize]>,
	W: AsRef<str>
{
	let grid = Grid::new(height, width, blocked);
	let mut candidates = CandidatePool::new();
	candidates.populate(words);
	Solver::new(grid, candidates, seed)?.solve_fully()
}

////////////////////////////////////////////////////////////////////////////////
//                              Seeds & commits.                              //
////////////////////////////////////////////////////////////////////////////////

/// The word placed before solving begins. The location must be the first
/// cell of a slot running in the given direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed
{
	/// The word.
	pub word: String,

	/// The location of the first letter.
	#[serde(flatten)]
	pub location: Location,

	/// The direction of the slot.
	pub direction: Direction
}

impl Seed
{
	/// Construct a seed.
	#[inline]
	#[must_use]
	pub fn new(word: &str, x: usize, y: usize, direction: Direction) -> Self
	{
		Self { word: word.to_string(), location: Location::new(x, y), direction }
	}
}

/// The record of one word committed to one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit
{
	/// The slot that received the word.
	pub slot: SlotId,

	/// The word.
	pub word: String,

	/// The crossing slots that this commit completed, in reading order.
	pub completed: Vec<SlotId>
}

////////////////////////////////////////////////////////////////////////////////
//                              Unsolved slots.                               //
////////////////////////////////////////////////////////////////////////////////

/// The slots that are not yet solved, keyed by length. Within a length, slots
/// are ordered by identifier, i.e., horizontal before vertical and then in
/// scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct UnsolvedSlots(BTreeMap<usize, BTreeSet<SlotId>>);

impl UnsolvedSlots
{
	/// Collect every slot of the grid.
	fn from_grid(grid: &Grid) -> Self
	{
		let mut unsolved = Self::default();
		for slot in grid.slots()
		{
			unsolved.insert(slot.len(), slot.id());
		}
		unsolved
	}

	fn insert(&mut self, length: usize, id: SlotId)
	{
		self.0.entry(length).or_default().insert(id);
	}

	/// Remove a slot.
	///
	/// # Returns
	///
	/// `true` if the slot was present, `false` otherwise.
	fn remove(&mut self, length: usize, id: SlotId) -> bool
	{
		let Some(ids) = self.0.get_mut(&length) else { return false };
		let removed = ids.remove(&id);
		if ids.is_empty()
		{
			self.0.remove(&length);
		}
		removed
	}

	#[inline]
	fn is_empty(&self) -> bool { self.0.is_empty() }

	fn len(&self) -> usize { self.0.values().map(BTreeSet::len).sum() }

	/// Snapshot the slots, longest first.
	fn by_descending_length(&self) -> Vec<SlotId>
	{
		self.0.values().rev().flatten().copied().collect()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The seed could not be placed. Raised before solving begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError
{
	/// No slot runs through the location in the direction, either because the
	/// location is blocked or because it lies outside the grid.
	SeedSlotNotFound
	{
		location: Location,
		direction: Direction
	},

	/// The location names an interior cell of its slot rather than the first.
	SeedNotAtSlotStart
	{
		location: Location,
		direction: Direction,
		start: Location
	},

	/// The seed word does not fill its slot exactly.
	SeedLengthMismatch
	{
		word: String,
		expected: usize,
		actual: usize
	}
}

impl Display for ValidationError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::SeedSlotNotFound { location, direction } => write!(
				f,
				"no {} slot at seed coordinates {}",
				direction,
				location
			),
			Self::SeedNotAtSlotStart { location, direction, start } => write!(
				f,
				"seed coordinates {} are inside the {} slot starting at {}",
				location,
				direction,
				start
			),
			Self::SeedLengthMismatch { word, expected, actual } => write!(
				f,
				"seed word {:?} has length {}, but its slot has length {}",
				word,
				actual,
				expected
			)
		}
	}
}

impl Error for ValidationError {}

/// The puzzle cannot be completed by forced moves from the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnsolvableError
{
	/// No remaining candidate fits the slot.
	NoMatches
	{
		slot: SlotId,
		pattern: String
	},

	/// Every unsolved slot admits two or more candidates.
	Stuck
	{
		unsolved: usize
	}
}

impl Display for UnsolvableError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::NoMatches { slot, pattern } =>
				write!(f, "no matches for slot {}: {}", slot, pattern),
			Self::Stuck { unsolved } => write!(
				f,
				"no forced move among {} unsolved slots",
				unsolved
			)
		}
	}
}

impl Error for UnsolvableError {}

/// The complete enumeration of solver errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError
{
	/// The seed could not be placed.
	Validation(ValidationError),

	/// No forced move remains.
	Unsolvable(UnsolvableError)
}

impl Display for SolveError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Validation(e) => write!(f, "invalid seed: {}", e),
			Self::Unsolvable(e) => write!(f, "unsolvable: {}", e)
		}
	}
}

impl Error for SolveError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Validation(e) => Some(e),
			Self::Unsolvable(e) => Some(e)
		}
	}
}

impl From<ValidationError> for SolveError
{
	fn from(e: ValidationError) -> Self { Self::Validation(e) }
}

impl From<UnsolvableError> for SolveError
{
	fn from(e: UnsolvableError) -> Self { Self::Unsolvable(e) }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::time::Duration;

	use crate::{
		grid::{Direction, Grid, Location},
		slot::SlotId,
		solver::{
			solve, Commit, Seed, SolveError, Solver,
			UnsolvableError, ValidationError
		}
	};

	/// An open grid with no blocked cells.
	fn open(height: usize, width: usize) -> Grid
	{
		Grid::new(height, width, &Vec::<Vec<usize>>::new())
	}

	/// A solver for the 3×3 square whose rows are `cat`, `ore`, and `wed`,
	/// seeded with `cat` across the top.
	fn square(extra: &[&str]) -> Solver
	{
		let mut words = vec!["cat", "ore", "wed", "cow", "are", "ted"];
		words.extend_from_slice(extra);
		Solver::new(
			open(3, 3),
			words.iter().collect(),
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap()
	}

	fn commit(slot: usize, word: &str, completed: &[usize]) -> Commit
	{
		Commit {
			slot: SlotId(slot),
			word: word.to_string(),
			completed: completed.iter().copied().map(SlotId).collect()
		}
	}

	/// A single row solved entirely by its seed. The three one-cell columns
	/// complete by cascade even though no one-letter candidates exist.
	#[test]
	fn test_seed_only()
	{
		let solver = Solver::new(
			open(1, 3),
			["cat"].iter().collect(),
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap();
		assert!(solver.is_finished());
		assert!(solver.candidates().is_empty());
		assert_eq!(solver.commits(), [commit(0, "cat", &[1, 2, 3])]);
		let grid = solver.solve_fully().unwrap();
		assert!(grid.is_complete());
		assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["cat"]);
	}

	/// Ensure that forced moves are found longest first and in extraction
	/// order, and that the final commit completes both remaining columns by
	/// cascade.
	#[test]
	fn test_square()
	{
		let mut solver = square(&[]);
		assert_eq!(solver.unsolved_count(), 5);
		assert_eq!(solver.step().unwrap(), Some(&commit(3, "cow", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(1, "ore", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(2, "wed", &[4, 5])));
		assert!(solver.is_finished());
		assert_eq!(solver.step().unwrap(), None);
		assert!(solver.candidates().is_empty());
		assert_eq!(
			solver.grid().rows().collect::<Vec<_>>(),
			vec!["cat", "ore", "wed"]
		);
		let grid = solver.grid();
		for slot in grid.slots()
		{
			assert!(slot.is_solved(grid));
		}
		assert_eq!(grid.slot(SlotId(4)).pattern(grid), "are");
	}

	/// Ensure that matching and consumption ignore case, and that filled
	/// cells keep the letters they were given first.
	#[test]
	fn test_case_insensitive()
	{
		let words = ["CAT", "ORE", "WED", "COW", "ARE", "TED"];
		let grid = solve(
			3,
			3,
			&Vec::<Vec<usize>>::new(),
			&words,
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap();
		assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["cat", "ORE", "WED"]);
	}

	/// Ensure that the solver fails when a slot runs out of candidates after
	/// a sequence of forced moves.
	#[test]
	fn test_dead_end()
	{
		let mut solver = Solver::new(
			open(3, 3),
			["cat", "car", "art"].iter().collect(),
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap();
		assert_eq!(solver.step().unwrap(), Some(&commit(3, "car", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(1, "art", &[])));
		assert_eq!(
			solver.step(),
			Err(SolveError::Unsolvable(UnsolvableError::NoMatches {
				slot: SlotId(2),
				pattern: "r..".to_string()
			}))
		);
		assert_eq!(
			solver.grid().rows().collect::<Vec<_>>(),
			vec!["cat", "art", "r.."]
		);
	}

	/// Ensure that a slot with no candidates of its length fails the first
	/// time it is examined.
	#[test]
	fn test_missing_length()
	{
		let result = solve(
			1,
			8,
			&[vec![3]],
			&["cat", "dog"],
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		);
		assert_eq!(
			result,
			Err(SolveError::Unsolvable(UnsolvableError::NoMatches {
				slot: SlotId(1),
				pattern: "....".to_string()
			}))
		);
	}

	/// Ensure that the solver stops, rather than guesses, when every slot is
	/// ambiguous.
	#[test]
	fn test_stuck()
	{
		let mut solver = Solver::new(
			open(3, 3),
			["cat", "cow", "cob", "ant", "arm", "tea", "ten"].iter().collect(),
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap();
		assert_eq!(
			solver.solve(Duration::from_secs(1)),
			Err(SolveError::Unsolvable(UnsolvableError::Stuck { unsolved: 5 }))
		);
		assert_eq!(solver.commits().len(), 1);
		assert_eq!(solver.candidates().len(), 6);
	}

	/// Ensure that every copy of a duplicated word counts as a separate
	/// choice, and that only one copy is consumed.
	#[test]
	fn test_duplicates()
	{
		let mut solver = square(&["cow"]);
		// `c..` admits both copies of `cow`, so the first column waits.
		assert_eq!(solver.step().unwrap(), Some(&commit(4, "are", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(1, "ore", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(5, "ted", &[])));
		assert_eq!(solver.step().unwrap(), Some(&commit(2, "wed", &[3])));
		assert!(solver.is_finished());
		assert_eq!(solver.candidates().iter().collect::<Vec<_>>(), vec!["cow"]);
		assert_eq!(
			solver.grid().rows().collect::<Vec<_>>(),
			vec!["cat", "ore", "wed"]
		);
	}

	/// Ensure that copies differing only in case make a slot ambiguous.
	#[test]
	fn test_duplicates_differing_in_case()
	{
		// cat
		// ###
		// ...
		let blocked = [vec![], vec![0, 1, 2], vec![]];
		let seed = Seed::new("cat", 0, 0, Direction::Horizontal);
		let grid = solve(3, 3, &blocked, &["cat", "dog", "d", "o", "g"], &seed)
			.unwrap();
		assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["cat", "###", "dog"]);

		let mut solver = Solver::new(
			Grid::new(3, 3, &blocked),
			["cat", "dog", "DOG", "d", "o", "g"].iter().collect(),
			&seed
		).unwrap();
		assert_eq!(
			solver.step(),
			Err(SolveError::Unsolvable(UnsolvableError::Stuck { unsolved: 4 }))
		);
		assert_eq!(solver.commits(), [commit(0, "cat", &[2, 4, 6])]);
		assert_eq!(solver.candidates().len(), 5);
	}

	/// Ensure that a slot without candidates fails the scan even when a
	/// shorter slot later in the scan has a forced move.
	#[test]
	fn test_no_matches_before_forced_move()
	{
		// cat#....
		let mut solver = Solver::new(
			Grid::new(1, 8, &[vec![3]]),
			["cat", "x"].iter().collect(),
			&Seed::new("cat", 0, 0, Direction::Horizontal)
		).unwrap();
		assert_eq!(solver.candidates().matches("."), vec!["x"]);
		assert_eq!(
			solver.step(),
			Err(SolveError::Unsolvable(UnsolvableError::NoMatches {
				slot: SlotId(1),
				pattern: "....".to_string()
			}))
		);
		assert_eq!(solver.commits(), [commit(0, "cat", &[2, 3, 4])]);
		assert_eq!(solver.unsolved_count(), 5);
		assert!(solver.candidates().contains("x"));
		assert_eq!(
			solver.grid().rows().collect::<Vec<_>>(),
			vec!["cat#...."]
		);
	}

	/// Ensure that every seed precondition is enforced before solving begins.
	#[test]
	fn test_seed_validation()
	{
		let cases = [
			(
				Seed::new("at", 1, 0, Direction::Horizontal),
				ValidationError::SeedNotAtSlotStart {
					location: Location::new(1, 0),
					direction: Direction::Horizontal,
					start: Location::new(0, 0)
				}
			),
			(
				Seed::new("cats", 0, 0, Direction::Horizontal),
				ValidationError::SeedLengthMismatch {
					word: "cats".to_string(),
					expected: 3,
					actual: 4
				}
			),
			(
				Seed::new("c", 0, 1, Direction::Vertical),
				ValidationError::SeedNotAtSlotStart {
					location: Location::new(0, 1),
					direction: Direction::Vertical,
					start: Location::new(0, 0)
				}
			),
			(
				Seed::new("cat", 3, 0, Direction::Horizontal),
				ValidationError::SeedSlotNotFound {
					location: Location::new(3, 0),
					direction: Direction::Horizontal
				}
			),
			(
				Seed::new("cat", 1, 1, Direction::Vertical),
				ValidationError::SeedSlotNotFound {
					location: Location::new(1, 1),
					direction: Direction::Vertical
				}
			)
		];
		for (seed, expected) in cases
		{
			// ...
			// .#.
			let grid = Grid::new(2, 3, &[vec![], vec![1]]);
			let result = Solver::new(grid, ["cat"].iter().collect(), &seed);
			assert_eq!(
				result.map(|_| ()),
				Err(SolveError::Validation(expected)),
				"{:?}",
				seed
			);
		}
	}

	/// Ensure that committing to a solved slot changes nothing.
	#[test]
	fn test_commit_idempotent()
	{
		let mut solver = square(&["ape"]);
		assert!(solver.solve(Duration::ZERO).is_ok());
		let candidates = solver.candidates().clone();
		let commits = solver.commits().len();
		assert_eq!(solver.commit(SlotId(0), "ape"), None);
		assert_eq!(solver.commit(SlotId(3), "ape"), None);
		assert_eq!(solver.candidates(), &candidates);
		assert_eq!(solver.commits().len(), commits);
		assert_eq!(solver.unsolved_count(), 4);
	}

	/// Ensure that every word is either placed exactly once or still in the
	/// pool, at every point during solving, and that the unsolved slots
	/// decrease with every step.
	#[test]
	fn test_conservation_and_progress()
	{
		let mut original = ["cat", "ore", "wed", "cow", "are", "ted", "ape"]
			.iter()
			.map(|w| w.to_string())
			.collect::<Vec<_>>();
		original.sort();
		let mut solver = square(&["ape"]);
		let mut unsolved = solver.unsolved_count();
		loop
		{
			let grid = solver.grid();
			let mut accounted = Vec::new();
			for commit in solver.commits()
			{
				accounted.push(commit.word.clone());
				for &slot in &commit.completed
				{
					accounted.extend(grid.slot(slot).word(grid));
				}
			}
			accounted.extend(solver.candidates().iter().map(str::to_string));
			accounted.sort();
			assert_eq!(accounted, original);
			if solver.step().unwrap().is_none()
			{
				break
			}
			assert!(solver.unsolved_count() < unsolved);
			unsolved = solver.unsolved_count();
		}
		assert_eq!(solver.candidates().iter().collect::<Vec<_>>(), vec!["ape"]);
	}

	/// Ensure that identical inputs produce identical commits and grids, even
	/// when distractors defer the obvious moves.
	#[test]
	fn test_determinism()
	{
		let run = || {
			let mut solver = square(&["ape", "cob"]);
			solver.solve(Duration::from_secs(1)).map(|finished| {
				(finished, solver.commits().to_vec(), solver.into_grid())
			})
		};
		let first = run();
		let (finished, commits, grid) = first.clone().unwrap();
		assert!(finished);
		assert_eq!(
			commits,
			vec![
				commit(0, "cat", &[]),
				commit(5, "ted", &[]),
				commit(2, "wed", &[]),
				commit(3, "cow", &[]),
				commit(1, "ore", &[4])
			]
		);
		assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["cat", "ore", "wed"]);
		for _ in 0..10
		{
			assert_eq!(run(), first);
		}
	}
}
