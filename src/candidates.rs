//! # Candidate pool
//!
//! Herein is the multiset of words that remain to be placed, grouped by
//! length. Every word is consumed at most once: removal takes away a single
//! copy, so duplicates supplied by the caller are tracked independently.

use std::{
	collections::BTreeMap,
	fs::File,
	io::{self, BufRead, BufReader},
	path::Path
};

use log::trace;

use crate::slot::{pattern_matches, same_letter};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// The unplaced candidate words, keyed by length in characters. Within a
/// length, words keep the order in which they were supplied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct CandidatePool(BTreeMap<usize, Vec<String>>);

impl CandidatePool
{
	/// Construct an empty pool. Same as [`Default::default`].
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the pool is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.values().all(Vec::is_empty) }

	/// Get the total number of words in the pool, counting duplicates.
	#[must_use]
	pub fn len(&self) -> usize { self.0.values().map(Vec::len).sum() }

	/// Get the words of the given length, in the order supplied.
	///
	/// # Arguments
	///
	/// * `length` - The length of the words, in characters.
	///
	/// # Returns
	///
	/// The words of the given length, possibly none.
	#[must_use]
	pub fn words(&self, length: usize) -> &[String]
	{
		self.0.get(&length).map(Vec::as_slice).unwrap_or_default()
	}

	/// Iterate over every word in the pool, shortest first.
	pub fn iter(&self) -> impl Iterator<Item = &str>
	{
		self.0.values().flatten().map(String::as_str)
	}

	/// Check if the pool contains the given word, ignoring case.
	#[must_use]
	pub fn contains(&self, word: &str) -> bool
	{
		self.position(word).is_some()
	}

	/// Populate the pool with the given words. Duplicates are retained.
	///
	/// # Arguments
	///
	/// * `words` - The words to add.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref();
			self.0.entry(word.chars().count())
				.or_default()
				.push(word.to_string());
		}
	}

	/// Find the words that fit the given pattern. `.` matches any single
	/// character, and comparisons ignore case. Every remaining copy of a word
	/// is reported, so duplicates make a slot ambiguous.
	///
	/// # Arguments
	///
	/// * `pattern` - The pattern, as rendered by
	///   [`Slot::pattern`](crate::slot::Slot::pattern).
	///
	/// # Returns
	///
	/// The matching words, in the order supplied.
	#[must_use]
	pub fn matches(&self, pattern: &str) -> Vec<&str>
	{
		self.words(pattern.chars().count()).iter()
			.filter(|word| pattern_matches(pattern, word))
			.map(String::as_str)
			.collect()
	}

	/// Remove a single copy of the given word, ignoring case.
	///
	/// # Arguments
	///
	/// * `word` - The word to consume.
	///
	/// # Returns
	///
	/// `true` if a copy was removed, `false` if the word was not present.
	pub fn remove(&mut self, word: &str) -> bool
	{
		match self.position(word)
		{
			Some((length, index)) =>
			{
				if let Some(words) = self.0.get_mut(&length)
				{
					let removed = words.remove(index);
					trace!("consumed candidate: {}", removed);
					if words.is_empty()
					{
						self.0.remove(&length);
					}
				}
				true
			},
			None => false
		}
	}

	/// Find the first copy of the given word, ignoring case.
	///
	/// # Returns
	///
	/// The length bucket and the index within it.
	#[must_use]
	fn position(&self, word: &str) -> Option<(usize, usize)>
	{
		let length = word.chars().count();
		self.words(length).iter()
			.position(|w| same_word(w, word))
			.map(|index| (length, index))
	}

	/// Construct a pool from the contents of the given file. Each line in the
	/// file is considered a single word; surrounding whitespace is trimmed and
	/// blank lines are skipped.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A pool containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let mut words = Vec::new();
		for line in reader.lines()
		{
			let line = line?;
			let word = line.trim();
			if !word.is_empty()
			{
				words.push(word.to_string());
			}
		}
		let mut pool = Self::new();
		pool.populate(&words);
		Ok(pool)
	}
}

impl<T: AsRef<str>> FromIterator<T> for CandidatePool
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
	{
		let words = iter.into_iter().collect::<Vec<_>>();
		let mut pool = Self::new();
		pool.populate(&words);
		pool
	}
}

/// Check if two words are the same, ignoring case.
#[must_use]
fn same_word(a: &str, b: &str) -> bool
{
	a.chars().count() == b.chars().count()
		&& a.chars().zip(b.chars()).all(|(a, b)| same_letter(a, b))
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
