//! Reading a maze from its text form.
//!
//! The format is line based, with numbers separated by whitespace:
//! ```text
//! ROWS COLUMNS
//! <ROWS lines of COLUMNS digits from 0 to 9>
//! START_ROW START_COLUMN END_ROW END_COLUMN
//! ```
//! Every problem is reported as an [`InputError`], naming the offending line and column
//! (both counted from 1) where that makes sense. A successfully parsed [`Query`] always has a
//! rectangular Grid and two Points on that Grid that are not Walls.

use crate::{Grid, GridError, Point, MAX_COST};

use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

/// A parsed maze: the Grid plus the two Points to connect
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
	/// the maze
	pub grid: Grid,
	/// where the Path starts
	pub start: Point,
	/// where the Path ends
	pub end: Point,
}

/// Everything that can be wrong with a maze description
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum InputError {
	#[error("not enough data for maze dimensions")]
	MissingDimensions,
	#[error("maze dimensions must contain exactly two numbers")]
	DimensionCount,
	#[error("the dimensions of the maze must be positive integers")]
	InvalidDimensions,
	#[error("not enough lines to define the structure of the maze")]
	MissingRows,
	#[error("line {line} must have exactly {expected} numbers")]
	RowLength { line: usize, expected: usize },
	#[error("all elements of the maze must be numbers from 0 to 9 (error in line {line}, column {column})")]
	InvalidCell { line: usize, column: usize },
	#[error("not enough data to determine start and end points")]
	MissingPoints,
	#[error("the start and end points must contain exactly four numbers")]
	PointCount,
	#[error("coordinates must be integers")]
	InvalidCoordinate,
	#[error("the start point is outside the matrix")]
	StartOutOfBounds,
	#[error("the end point is outside the matrix")]
	EndOutOfBounds,
	#[error("the start point is on the wall")]
	StartOnWall,
	#[error("the end point is on the wall")]
	EndOnWall,
	#[error(transparent)]
	Grid(#[from] GridError),
	#[error("failed to read input: {0}")]
	Io(#[from] io::Error),
}

/// Reads a maze from `reader`.
///
/// ## Examples
/// ```
/// # use grid_shortest_path::input::parse_input;
/// let input = "3 3
/// 1 2 0
/// 2 0 1
/// 9 1 0
/// 0 0 2 1
/// ";
///
/// let query = parse_input(input.as_bytes()).unwrap();
///
/// assert_eq!(query.grid.rows(), 3);
/// assert_eq!(query.start, (0, 0));
/// assert_eq!(query.end, (2, 1));
/// ```
pub fn parse_input(reader: impl BufRead) -> Result<Query, InputError> {
	let mut lines = reader.lines();

	let dimensions = lines.next().transpose()?.ok_or(InputError::MissingDimensions)?;
	let dimensions: Vec<&str> = dimensions.split_whitespace().collect();
	if dimensions.len() != 2 {
		return Err(InputError::DimensionCount);
	}
	let (rows, columns) = match (dimensions[0].parse::<usize>(), dimensions[1].parse::<usize>()) {
		(Ok(rows), Ok(columns)) if rows > 0 && columns > 0 => (rows, columns),
		_ => return Err(InputError::InvalidDimensions),
	};

	let mut cells = Vec::new();
	for line in 1..=rows {
		let row = lines.next().transpose()?.ok_or(InputError::MissingRows)?;
		let values: Vec<&str> = row.split_whitespace().collect();
		if values.len() != columns {
			return Err(InputError::RowLength {
				line,
				expected: columns,
			});
		}

		let row = values
			.iter()
			.enumerate()
			.map(|(i, value)| match value.parse::<u8>() {
				Ok(value) if value <= MAX_COST => Ok(value),
				_ => Err(InputError::InvalidCell { line, column: i + 1 }),
			})
			.collect::<Result<Vec<u8>, _>>()?;
		cells.push(row);
	}
	let grid = Grid::new(cells)?;

	let points = lines.next().transpose()?.ok_or(InputError::MissingPoints)?;
	let points: Vec<&str> = points.split_whitespace().collect();
	if points.len() != 4 {
		return Err(InputError::PointCount);
	}
	let coordinates = points
		.iter()
		.map(|value| value.parse::<i64>())
		.collect::<Result<Vec<i64>, _>>()
		.map_err(|_| InputError::InvalidCoordinate)?;

	let start = to_point(&grid, coordinates[0], coordinates[1]).ok_or(InputError::StartOutOfBounds)?;
	let end = to_point(&grid, coordinates[2], coordinates[3]).ok_or(InputError::EndOutOfBounds)?;

	if grid.is_wall(start) {
		return Err(InputError::StartOnWall);
	}
	if grid.is_wall(end) {
		return Err(InputError::EndOnWall);
	}

	Ok(Query { grid, start, end })
}

fn to_point(grid: &Grid, row: i64, column: i64) -> Option<Point> {
	let point = (usize::try_from(row).ok()?, usize::try_from(column).ok()?);
	grid.in_bounds(point).then_some(point)
}

impl FromStr for Query {
	type Err = InputError;
	fn from_str(s: &str) -> Result<Query, InputError> {
		parse_input(s.as_bytes())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn error(input: &str) -> String {
		match input.parse::<Query>() {
			Ok(query) => panic!("expected an error, got {:?}", query),
			Err(err) => err.to_string(),
		}
	}

	#[test]
	fn valid_input() {
		let query: Query = "3 3
			1 2 0
			2 0 1
			9 1 0
			0 0 2 1"
			.parse()
			.unwrap();

		let grid = Grid::new(vec![vec![1, 2, 0], vec![2, 0, 1], vec![9, 1, 0]]).unwrap();
		assert_eq!(
			query,
			Query {
				grid,
				start: (0, 0),
				end: (2, 1),
			}
		);
	}

	#[test]
	fn invalid_dimensions() {
		assert_eq!(
			error("3\n1 2 0\n2 0 1\n9 1 0\n0 0 2 1"),
			"maze dimensions must contain exactly two numbers"
		);
		assert_eq!(
			error("-3 3\n1 2 0\n2 0 1\n9 1 0\n0 0 2 1"),
			"the dimensions of the maze must be positive integers"
		);
		assert_eq!(
			error("0 3\n0 0 0 0"),
			"the dimensions of the maze must be positive integers"
		);
		assert_eq!(
			error("a a\na a a\na a a a"),
			"the dimensions of the maze must be positive integers"
		);
		assert_eq!(
			error("a a"),
			"the dimensions of the maze must be positive integers"
		);
	}

	#[test]
	fn empty_input() {
		assert_eq!(error(""), "not enough data for maze dimensions");
	}

	#[test]
	fn more_rows_than_declared() {
		// the third row is read as the line of coordinates
		assert_eq!(
			error("2 3\n1 2 0\n2 0 1\n9 1 0\n0 0 2 1"),
			"the start and end points must contain exactly four numbers"
		);
	}

	#[test]
	fn row_length() {
		assert_eq!(
			error("2 3\n1 2\n2 0\n9 1\n0 0 2 1"),
			"line 1 must have exactly 3 numbers"
		);
		assert_eq!(
			error("2 3\n1 2 3 4\n2 0 3 4 \n9 1 3 4\n0 0 2 1"),
			"line 1 must have exactly 3 numbers"
		);
		assert_eq!(
			error("3 3\n1 2 0\n2 0 1\n0 0 2 1"),
			"line 3 must have exactly 3 numbers"
		);
	}

	#[test]
	fn missing_rows() {
		assert_eq!(
			error("3 3\n1 2 0\n"),
			"not enough lines to define the structure of the maze"
		);
	}

	#[test]
	fn huge_row_count_is_missing_rows() {
		assert!(matches!(
			"100000000000 1\n1\n0 0 0 0".parse::<Query>(),
			Err(InputError::MissingRows)
		));
	}

	#[test]
	fn invalid_cell() {
		assert_eq!(
			error("3 3\n1 1 1\n0 a 1\n1 1 1\n0 0 2 0"),
			"all elements of the maze must be numbers from 0 to 9 (error in line 2, column 2)"
		);
		assert_eq!(
			error("1 3\n1 1 10\n0 0 0 0"),
			"all elements of the maze must be numbers from 0 to 9 (error in line 1, column 3)"
		);
		assert_eq!(
			error("1 2\n-1 1\n0 0 0 1"),
			"all elements of the maze must be numbers from 0 to 9 (error in line 1, column 1)"
		);
	}

	#[test]
	fn coordinates() {
		let maze = "3 3\n1 1 1\n0 0 1\n1 1 1\n";
		assert_eq!(
			error(&format!("{}0 a 2 0", maze)),
			"coordinates must be integers"
		);
		assert_eq!(
			error(&format!("{}0 0 2 a", maze)),
			"coordinates must be integers"
		);
		assert_eq!(
			error(&format!("{}0 0 2", maze)),
			"the start and end points must contain exactly four numbers"
		);
		assert_eq!(
			error(maze),
			"not enough data to determine start and end points"
		);
	}

	#[test]
	fn points_outside() {
		let maze = "3 3\n1 2 0\n2 0 1\n9 1 0\n";
		assert_eq!(
			error(&format!("{}-1 0 2 1", maze)),
			"the start point is outside the matrix"
		);
		assert_eq!(
			error(&format!("{}0 0 2 3", maze)),
			"the end point is outside the matrix"
		);
	}

	#[test]
	fn points_on_walls() {
		let maze = "3 3\n1 2 0\n2 0 1\n9 1 0\n";
		assert_eq!(
			error(&format!("{}1 1 2 1", maze)),
			"the start point is on the wall"
		);
		assert_eq!(
			error(&format!("{}0 0 0 2", maze)),
			"the end point is on the wall"
		);
	}

	#[test]
	fn io_error() {
		struct Broken;
		impl io::Read for Broken {
			fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
			}
		}

		let err = parse_input(io::BufReader::new(Broken)).unwrap_err();
		assert!(matches!(err, InputError::Io(_)));
		assert_eq!(err.to_string(), "failed to read input: disk on fire");
	}
}
