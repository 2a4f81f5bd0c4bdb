use crate::Cost;

/// A Path found by a search
///
/// Stores the sequence of Points from start to goal (both inclusive) in `path` and the total Cost
/// of entering these Points, starting Cell included, in `cost`.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P> {
	/// the Path
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_shortest_path::Path;
	/// let path = Path::new(vec![(0, 0), (0, 1)], 3);
	///
	/// assert_eq!(path.path, vec![(0, 0), (0, 1)]);
	/// assert_eq!(path.cost, 3);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// appends a Node to the Path, adding it's Cost to the total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_shortest_path::Path;
	/// let mut path = Path::new(vec![(0, 0), (0, 1)], 3);
	/// path.append((1, 1), 5);
	///
	/// assert_eq!(path.path, vec![(0, 0), (0, 1), (1, 1)]);
	/// assert_eq!(path.cost, 8);
	/// ```
	pub fn append(&mut self, node: P, cost: Cost) -> &mut Self {
		self.path.push(node);
		self.cost += cost;
		self
	}

	/// consumes the Path, returning only the sequence of Nodes
	pub fn into_points(self) -> Vec<P> {
		self.path
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![(0, 0), (1, 0), (2, 0)], 3);

		assert_eq!(path[0], (0, 0));
		assert_eq!(path[1], (1, 0));
		assert_eq!(path[2], (2, 0));
	}

	#[test]
	fn path_deref() {
		let path = Path::new(vec![(4, 2), (4, 1)], 7);

		assert_eq!(path.len(), 2);
		assert_eq!(path.last(), Some(&(4, 1)));
		assert_eq!(path.into_points(), vec![(4, 2), (4, 1)]);
	}

	#[test]
	fn path_append_chains() {
		let mut path = Path::new(vec![(0, 0)], 1);
		path.append((0, 1), 2).append((0, 2), 3);

		assert_eq!(path.path, vec![(0, 0), (0, 1), (0, 2)]);
		assert_eq!(path.cost, 6);
	}
}
