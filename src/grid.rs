//! # Grid
//!
//! Herein is the board of a fit-the-words puzzle: a rectangle of cells, each
//! either blocked or active, together with the [slots](Slot) extracted from
//! the maximal runs of active cells. The grid owns both its cells and its
//! slots; a cell refers back to its slots by [`SlotId`] only.

use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::slot::{Slot, SlotId};

////////////////////////////////////////////////////////////////////////////////
//                                Coordinates.                                //
////////////////////////////////////////////////////////////////////////////////

/// The position of a cell. `x` is the column and `y` is the row; the origin
/// is the top-left corner.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
	PartialOrd, Ord, Serialize, Deserialize
)]
pub struct Location
{
	/// The column.
	pub x: usize,

	/// The row.
	pub y: usize
}

impl Location
{
	/// Construct a location from its column and row.
	#[inline]
	#[must_use]
	pub const fn new(x: usize, y: usize) -> Self { Self { x, y } }
}

impl Display for Location
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// The axis along which a [`Slot`] runs.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
	Serialize, Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum Direction
{
	/// Left to right, along a row.
	Horizontal,

	/// Top to bottom, along a column.
	Vertical
}

impl Direction
{
	/// Check if the direction is horizontal.
	#[inline]
	#[must_use]
	pub fn is_horizontal(self) -> bool { self == Self::Horizontal }

	/// Get the orthogonal direction, i.e., the direction of any slot that
	/// crosses a slot running in this direction.
	#[inline]
	#[must_use]
	pub fn crossing(self) -> Self
	{
		match self
		{
			Self::Horizontal => Self::Vertical,
			Self::Vertical => Self::Horizontal
		}
	}
}

impl Display for Direction
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Horizontal => write!(f, "horizontal"),
			Self::Vertical => write!(f, "vertical")
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Cells.                                   //
////////////////////////////////////////////////////////////////////////////////

/// An active cell of the grid. Blocked cells are not represented at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell
{
	/// The resolved letter, if any.
	character: Option<char>,

	/// The horizontal slot containing this cell.
	horizontal: Option<SlotId>,

	/// The vertical slot containing this cell.
	vertical: Option<SlotId>
}

impl Cell
{
	/// Get the resolved letter of the cell, if any.
	#[inline]
	#[must_use]
	pub fn character(&self) -> Option<char> { self.character }

	/// Check if the cell still awaits its letter.
	#[inline]
	#[must_use]
	pub fn is_unsolved(&self) -> bool { self.character.is_none() }

	/// Get the slot running through this cell in the given direction. Every
	/// active cell of a constructed [`Grid`] has one slot per direction.
	#[inline]
	#[must_use]
	pub fn slot(&self, direction: Direction) -> Option<SlotId>
	{
		match direction
		{
			Direction::Horizontal => self.horizontal,
			Direction::Vertical => self.vertical
		}
	}

	/// Register the slot running through this cell in the given direction.
	fn register(&mut self, direction: Direction, slot: SlotId)
	{
		match direction
		{
			Direction::Horizontal => self.horizontal = Some(slot),
			Direction::Vertical => self.vertical = Some(slot)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grid.                                    //
////////////////////////////////////////////////////////////////////////////////

/// The board of a fit-the-words puzzle. The cells are linearized in row-major
/// order; `None` denotes a blocked cell. The slot table is fixed at
/// construction, and thereafter only the letters of the cells change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The number of columns.
	width: usize,

	/// The number of rows.
	height: usize,

	/// The cells, in row-major order.
	cells: Vec<Option<Cell>>,

	/// The slots, horizontal ones first, each group in scan order.
	slots: Vec<Slot>
}

impl Grid
{
	/// Construct a grid and extract its slots.
	///
	/// # Arguments
	///
	/// * `height` - The number of rows.
	/// * `width` - The number of columns.
	/// * `blocked` - The blocked x-coordinates of each row, starting with row
	///   0. Missing rows have no blocked cells, and x-coordinates beyond the
	///   grid are ignored.
	///
	/// # Returns
	///
	/// The new grid, with every active cell unsolved.
	pub fn new<T: AsRef<[usize]>>(
		height: usize,
		width: usize,
		blocked: &[T]
	) -> Self
	{
		// A grid without columns has no cells, however many rows it claims.
		let rows = if width == 0 { 0 } else { height };
		let cells = (0..rows)
			.flat_map(move |y| {
				let row = blocked.get(y)
					.map(AsRef::<[usize]>::as_ref)
					.unwrap_or_default();
				(0..width).map(move |x| (!row.contains(&x)).then(Cell::default))
			})
			.collect();
		let mut grid = Self { width, height, cells, slots: Vec::new() };
		if !grid.cells.is_empty()
		{
			grid.extract_slots(Direction::Horizontal);
			grid.extract_slots(Direction::Vertical);
		}
		debug!(
			"extracted {} slots from {}×{} grid",
			grid.slots.len(),
			width,
			height
		);
		grid
	}

	/// Scan the grid along the given direction, emitting one slot for every
	/// maximal run of active cells. A blocked cell or the edge of the grid
	/// terminates a run.
	fn extract_slots(&mut self, direction: Direction)
	{
		let (outer, inner) = match direction
		{
			Direction::Horizontal => (self.height, self.width),
			Direction::Vertical => (self.width, self.height)
		};
		for o in 0..outer
		{
			let mut run = Vec::new();
			for i in 0..inner
			{
				let location = match direction
				{
					Direction::Horizontal => Location::new(i, o),
					Direction::Vertical => Location::new(o, i)
				};
				if self.cell(location).is_some()
				{
					run.push(location);
				}
				else if !run.is_empty()
				{
					self.add_slot(direction, std::mem::take(&mut run));
				}
			}
			if !run.is_empty()
			{
				self.add_slot(direction, run);
			}
		}
	}

	/// Append a slot to the slot table and register it with its cells.
	fn add_slot(&mut self, direction: Direction, locations: Vec<Location>)
	{
		let id = SlotId(self.slots.len());
		for &location in &locations
		{
			let index = self.index(location);
			if let Some(cell) = self.cells[index].as_mut()
			{
				cell.register(direction, id);
			}
		}
		self.slots.push(Slot::new(id, direction, locations));
	}

	/// Get the number of columns.
	#[inline]
	#[must_use]
	pub fn width(&self) -> usize { self.width }

	/// Get the number of rows.
	#[inline]
	#[must_use]
	pub fn height(&self) -> usize { self.height }

	/// Get the linear index of a location.
	#[inline]
	#[must_use]
	fn index(&self, location: Location) -> usize
	{
		location.y * self.width + location.x
	}

	/// Check if the location lies within the grid.
	#[inline]
	#[must_use]
	pub fn contains(&self, location: Location) -> bool
	{
		location.x < self.width && location.y < self.height
	}

	/// Get the active cell at the given location.
	///
	/// # Returns
	///
	/// The cell, or `None` if the location is blocked or outside the grid.
	#[must_use]
	pub fn cell(&self, location: Location) -> Option<&Cell>
	{
		if self.contains(location)
		{
			self.cells[self.index(location)].as_ref()
		}
		else
		{
			None
		}
	}

	/// Get the letter at the given location, if the cell is active and
	/// solved.
	#[inline]
	#[must_use]
	pub fn character(&self, location: Location) -> Option<char>
	{
		self.cell(location).and_then(Cell::character)
	}

	/// Write a letter into the active cell at the given location.
	///
	/// # Returns
	///
	/// The previous letter of the cell, if any.
	pub(crate) fn set_character(
		&mut self,
		location: Location,
		character: char
	) -> Option<char>
	{
		let index = self.index(location);
		self.cells[index].as_mut().and_then(|cell| {
			cell.character.replace(character)
		})
	}

	/// Get all slots, horizontal ones first.
	#[inline]
	#[must_use]
	pub fn slots(&self) -> &[Slot] { &self.slots }

	/// Get the slot with the given identifier.
	///
	/// # Panics
	///
	/// If the identifier was not issued by this grid.
	#[inline]
	#[must_use]
	pub fn slot(&self, id: SlotId) -> &Slot { &self.slots[id.0] }

	/// Get the slot running through the given location in the given
	/// direction.
	#[must_use]
	pub fn slot_at(
		&self,
		location: Location,
		direction: Direction
	) -> Option<&Slot>
	{
		self.cell(location)
			.and_then(|cell| cell.slot(direction))
			.map(|id| self.slot(id))
	}

	/// Iterate over the locations of all active cells, in row-major order.
	pub fn active_locations(&self) -> impl Iterator<Item = Location> + '_
	{
		(0..self.height)
			.flat_map(move |y| (0..self.width).map(move |x| Location::new(x, y)))
			.filter(move |&location| self.cell(location).is_some())
	}

	/// Check if every active cell holds a letter.
	#[must_use]
	pub fn is_complete(&self) -> bool
	{
		self.cells.iter().flatten().all(|cell| !cell.is_unsolved())
	}

	/// Render the grid row by row: `#` for a blocked cell, `.` for an
	/// unsolved cell, and the letter otherwise.
	pub fn rows(&self) -> impl Iterator<Item = String> + '_
	{
		self.cells.chunks(self.width.max(1)).map(|row| {
			row.iter()
				.map(|cell| match cell
				{
					None => '#',
					Some(cell) => cell.character.unwrap_or('.')
				})
				.collect()
		})
	}
}

impl Display for Grid
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for row in self.rows()
		{
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
