use crate::{neighbors::ManhattanNeighborhood, Cost, GridError, Point};

/// The Cell value of a Wall
pub const WALL: u8 = 0;

/// The highest Cost a single Cell may have
pub const MAX_COST: u8 = 9;

/// A rectangular Grid of Cells.
///
/// Every Cell is either a [`WALL`] or holds the Cost (`1..=MAX_COST`) of entering it.
/// A Grid is never modified by a search, so the same Grid can be shared between any number of
/// searches, including ones running on other threads.
///
/// ## Examples
/// ```
/// # use grid_shortest_path::Grid;
/// let grid = Grid::new(vec![
///     vec![1, 1, 1],
///     vec![1, 0, 1],
/// ])
/// .unwrap();
///
/// assert_eq!((grid.rows(), grid.columns()), (2, 3));
/// assert!(grid.is_wall((1, 1)));
/// assert!(!grid.in_bounds((2, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
	cells: Vec<u8>,
	rows: usize,
	columns: usize,
}

impl Grid {
	/// Creates a Grid from its rows.
	///
	/// Fails if there are no rows, the first row is empty, the rows differ in length or a value is
	/// larger than [`MAX_COST`].
	pub fn new(rows: Vec<Vec<u8>>) -> Result<Grid, GridError> {
		let columns = rows.first().map_or(0, Vec::len);
		if columns == 0 {
			return Err(GridError::Empty);
		}

		let mut cells = Vec::with_capacity(rows.len() * columns);
		for (row, values) in rows.iter().enumerate() {
			if values.len() != columns {
				return Err(GridError::RaggedRow {
					row,
					expected: columns,
					found: values.len(),
				});
			}
			if let Some(column) = values.iter().position(|&value| value > MAX_COST) {
				return Err(GridError::InvalidCell {
					row,
					column,
					value: values[column],
				});
			}
			cells.extend_from_slice(values);
		}

		Ok(Grid {
			cells,
			rows: rows.len(),
			columns,
		})
	}

	/// number of rows
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// number of columns
	pub fn columns(&self) -> usize {
		self.columns
	}

	/// The value of the Cell at `point`, or `None` if it is outside the Grid.
	pub fn get(&self, point: Point) -> Option<u8> {
		self.index(point).map(|i| self.cells[i])
	}

	/// The Cost of entering the Cell at `point`.
	///
	/// ## Panics
	/// if `point` is outside the Grid.
	pub fn cost(&self, point: Point) -> Cost {
		match self.get(point) {
			Some(value) => value as Cost,
			None => panic!(
				"{:?} is outside of a {}x{} Grid",
				point, self.rows, self.columns
			),
		}
	}

	/// true iff the Cell at `point` is a Wall.
	///
	/// ## Panics
	/// if `point` is outside the Grid.
	pub fn is_wall(&self, point: Point) -> bool {
		self.cost(point) == WALL as Cost
	}

	/// true iff `point` lies within the Grid.
	pub fn in_bounds(&self, point: Point) -> bool {
		point.0 < self.rows && point.1 < self.columns
	}

	/// The check every neighbor has to pass before it is queued: inside the Grid, not a Wall and
	/// not yet visited.
	pub fn eligible_for_visit(&self, visited: &Visited, point: Point) -> bool {
		self.in_bounds(point) && !self.is_wall(point) && !visited.contains(point)
	}

	/// A [`ManhattanNeighborhood`] spanning this Grid.
	pub fn neighborhood(&self) -> ManhattanNeighborhood {
		ManhattanNeighborhood::new(self.rows, self.columns)
	}

	fn index(&self, (row, column): Point) -> Option<usize> {
		if self.in_bounds((row, column)) {
			Some(row * self.columns + column)
		} else {
			None
		}
	}
}

/// The set of Points whose Cost is final during one search.
///
/// Has the same dimensions as the Grid it was created for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visited {
	cells: Vec<bool>,
	rows: usize,
	columns: usize,
}

impl Visited {
	/// Creates an empty set for `grid`.
	pub fn new(grid: &Grid) -> Visited {
		Visited {
			cells: vec![false; grid.rows * grid.columns],
			rows: grid.rows,
			columns: grid.columns,
		}
	}

	/// Marks `point` as visited. Returns false if it already was.
	pub fn insert(&mut self, (row, column): Point) -> bool {
		let cell = &mut self.cells[row * self.columns + column];
		!std::mem::replace(cell, true)
	}

	/// true iff `point` has been marked. Points outside the Grid are never marked.
	pub fn contains(&self, (row, column): Point) -> bool {
		row < self.rows && column < self.columns && self.cells[row * self.columns + column]
	}
}
