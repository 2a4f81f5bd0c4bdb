//! The Neighborhood used to move between Cells

use crate::Point;

/// The fixed order in which neighbors are produced, as `(row, column)` offsets:
/// right, down, left, up.
///
/// Among several Paths with the same Cost, this order decides which one is found first.
static OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```text
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	rows: usize,
	columns: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `columns` are the size of the Grid to move on.
	pub fn new(rows: usize, columns: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, columns }
	}

	/// Provides the Neighbors of a Point that lie on the Grid.
	///
	/// Note that this does not check whether the Cell at a Point is a Wall.
	/// That check is done later.
	///
	/// ## Examples
	/// ```
	/// # use grid_shortest_path::neighbors::ManhattanNeighborhood;
	/// let neighborhood = ManhattanNeighborhood::new(3, 3);
	/// assert_eq!(
	///     neighborhood.get_all_neighbors((1, 1)).collect::<Vec<_>>(),
	///     vec![(1, 2), (2, 1), (1, 0), (0, 1)],
	/// );
	/// ```
	pub fn get_all_neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
		let (rows, columns) = (self.rows, self.columns);

		OFFSETS
			.iter()
			.map(move |(dr, dc)| (point.0 as isize + dr, point.1 as isize + dc))
			.filter(move |(r, c)| {
				*r >= 0 && *c >= 0 && (*r as usize) < rows && (*c as usize) < columns
			})
			.map(|(r, c)| (r as usize, c as usize))
	}
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 3), (1, 2), (0, 1)],
	);
}

#[test]
fn test_manhattan_corners() {
	let neighborhood = ManhattanNeighborhood::new(2, 3);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 0)).collect::<Vec<_>>(),
		vec![(0, 1), (1, 0)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((1, 2)).collect::<Vec<_>>(),
		vec![(1, 1), (0, 2)],
	);
}

#[test]
fn test_manhattan_single_cell() {
	let neighborhood = ManhattanNeighborhood::new(1, 1);
	assert_eq!(neighborhood.get_all_neighbors((0, 0)).count(), 0);
}
