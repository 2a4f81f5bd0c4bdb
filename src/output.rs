//! Writing a Path in its text form.

use crate::Point;

use std::io::{self, Write};

/// Writes every Point of `path` on its own line as `row column`, followed by a line holding a
/// single `.`
///
/// ## Examples
/// ```
/// # use grid_shortest_path::output::write_path;
/// let mut out = Vec::new();
/// write_path(&mut out, &[(0, 0), (1, 0), (1, 1)]).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "0 0\n1 0\n1 1\n.\n");
/// ```
pub fn write_path(mut writer: impl Write, path: &[Point]) -> io::Result<()> {
	for (row, column) in path {
		writeln!(writer, "{} {}", row, column)?;
	}
	writeln!(writer, ".")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_point() {
		let mut out = Vec::new();
		write_path(&mut out, &[(4, 2)]).unwrap();
		assert_eq!(out, b"4 2\n.\n");
	}

	#[test]
	fn from_search() {
		let grid = crate::Grid::new(vec![vec![1, 2, 0], vec![2, 0, 1], vec![9, 1, 0]]).unwrap();
		let path = crate::shortest_path(&grid, (0, 0), (2, 1)).unwrap();

		let mut out = Vec::new();
		write_path(&mut out, &path).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "0 0\n1 0\n2 0\n2 1\n.\n");
	}
}
