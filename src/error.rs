use thiserror::Error;

/// The ways a search can fail.
///
/// Both variants are final for the search that produced them; retrying with the same input gives
/// the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SearchError {
	/// The start Point is a Wall, so no search was started.
	#[error("start point is a wall")]
	StartIsWall,
	/// Every Cell reachable from the start was expanded without reaching the goal.
	#[error("path wasn't found")]
	PathNotFound,
}

/// Errors from building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
	/// The Grid has no rows, or its first row has no cells.
	#[error("grid must have at least one row and one column")]
	Empty,
	/// A row is not as long as the first row.
	#[error("row {row} has {found} cells, expected {expected}")]
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},
	/// A cell is outside `0..=9`.
	#[error("cell ({row}, {column}) has value {value}, expected 0 to 9")]
	InvalidCell {
		/// row of the cell
		row: usize,
		/// column of the cell
		column: usize,
		/// the rejected value
		value: u8,
	},
}
