//! # Slot
//!
//! Herein is the unit against which candidate words are matched: a maximal
//! run of active cells along one axis of the [`Grid`]. A slot never changes
//! shape after extraction; only the letters of its cells change, so all of
//! its derived properties are computed against the grid that owns it.

use std::fmt::{self, Display, Formatter};

use crate::grid::{Direction, Grid, Location};

////////////////////////////////////////////////////////////////////////////////
//                                   Slots.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The identifier of a [`Slot`]: its index in the slot table of its
/// [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId
{
	/// Get the index of the slot in the slot table of its grid.
	#[inline]
	#[must_use]
	pub fn index(self) -> usize { self.0 }
}

impl Display for SlotId
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "#{}", self.0)
	}
}

/// A maximal run of consecutive active cells along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Slot
{
	/// The identifier of the slot.
	id: SlotId,

	/// The axis along which the slot runs.
	direction: Direction,

	/// The locations of the cells, in reading order. Never empty.
	locations: Vec<Location>
}

impl Slot
{
	/// Construct a slot over the given cell locations.
	pub(crate) fn new(
		id: SlotId,
		direction: Direction,
		locations: Vec<Location>
	) -> Self
	{
		debug_assert!(!locations.is_empty());
		Self { id, direction, locations }
	}

	/// Get the identifier of the slot.
	///
	/// # Returns
	///
	/// The index of the slot in the slot table of its grid.
	#[inline]
	#[must_use]
	pub fn id(&self) -> SlotId { self.id }

	/// Get the axis along which the slot runs.
	///
	/// # Returns
	///
	/// [`Direction::Horizontal`] for a run along a row, or
	/// [`Direction::Vertical`] for a run down a column.
	#[inline]
	#[must_use]
	pub fn direction(&self) -> Direction { self.direction }

	/// Get the locations of the cells, in reading order.
	#[inline]
	#[must_use]
	pub fn locations(&self) -> &[Location] { &self.locations }

	/// Get the location of the first cell.
	#[inline]
	#[must_use]
	pub fn start(&self) -> Location { self.locations[0] }

	/// Get the number of cells.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.locations.len() }

	/// Always `false`: extraction never emits an empty slot.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.locations.is_empty() }

	/// Render the current pattern of the slot: the letter of each solved
	/// cell, and `.` for each unsolved cell.
	///
	/// # Arguments
	///
	/// * `grid` - The grid that owns the slot.
	///
	/// # Returns
	///
	/// The pattern, one character per cell.
	#[must_use]
	pub fn pattern(&self, grid: &Grid) -> String
	{
		self.locations.iter()
			.map(|&location| grid.character(location).unwrap_or('.'))
			.collect()
	}

	/// Count the cells that still await their letters.
	#[must_use]
	pub fn unsolved_count(&self, grid: &Grid) -> usize
	{
		self.locations.iter()
			.filter(|&&location| grid.character(location).is_none())
			.count()
	}

	/// Check if every cell of the slot holds a letter.
	#[inline]
	#[must_use]
	pub fn is_solved(&self, grid: &Grid) -> bool
	{
		self.unsolved_count(grid) == 0
	}

	/// Get the word spelled by the slot, if it is solved.
	#[must_use]
	pub fn word(&self, grid: &Grid) -> Option<String>
	{
		self.locations.iter()
			.map(|&location| grid.character(location))
			.collect()
	}

	/// Check if the candidate word fits the current pattern of the slot.
	#[inline]
	#[must_use]
	pub fn is_match(&self, grid: &Grid, word: &str) -> bool
	{
		pattern_matches(&self.pattern(grid), word)
	}
}

impl Display for Slot
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(
			f,
			"{} {} slot at {} (length {})",
			self.id,
			self.direction,
			self.start(),
			self.len()
		)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Matching.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Check if two letters are the same, ignoring case.
#[inline]
#[must_use]
pub fn same_letter(a: char, b: char) -> bool
{
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Check if a word fits a pattern. `.` in the pattern matches any single
/// character; every other character must equal the corresponding character
/// of the word, ignoring case. The lengths, in characters, must agree.
///
/// # Arguments
///
/// * `pattern` - The pattern, as rendered by [`Slot::pattern`].
/// * `word` - The candidate word.
///
/// # Returns
///
/// `true` if the word fits the pattern, `false` otherwise.
#[must_use]
pub fn pattern_matches(pattern: &str, word: &str) -> bool
{
	let mut letters = word.chars();
	for p in pattern.chars()
	{
		match letters.next()
		{
			Some(c) if p == '.' || same_letter(p, c) => {},
			_ => return false
		}
	}
	letters.next().is_none()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
