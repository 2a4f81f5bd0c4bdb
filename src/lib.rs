#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path between two Cells of a weighted Grid.
//!
//! ## Introduction
//! Every Cell of the [`Grid`] holds a single digit. A `0` marks a Wall that can never be entered,
//! the values `1` to `9` are the Cost of entering that Cell. The Cost of a Path is the sum of all
//! Cells it enters, **including the starting Cell**. Agents move along the 4 cardinal directions
//! only (see [`ManhattanNeighborhood`](neighbors::ManhattanNeighborhood)).
//!
//! The search is a Dijkstra-style expansion over a cost ordered [`Frontier`](frontier::Frontier).
//! Every queued candidate carries the Path that led to it, so the winning Path is available the
//! moment the Goal is popped, without walking back through a predecessor table. For large Grids
//! the [`SearchConfig::LOW_MEM`] preset switches to a predecessor map instead, which returns the
//! exact same Paths.
//!
//! ## Examples
//! Finding a Path:
//! ```
//! use grid_shortest_path::prelude::*;
//!
//! // 0 = wall, 1..=9 = cost of entering the cell
//! let grid = Grid::new(vec![
//!     vec![1, 2, 0],
//!     vec![2, 0, 1],
//!     vec![9, 1, 0],
//! ])
//! .unwrap();
//!
//! let path = shortest_path(&grid, (0, 0), (2, 1)).unwrap();
//!
//! assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
//! assert_eq!(path.cost, 1 + 2 + 9 + 1);
//! ```
//!
//! Failures are returned as a [`SearchError`]:
//! ```
//! # use grid_shortest_path::prelude::*;
//! let grid = Grid::new(vec![
//!     vec![1, 0, 1],
//!     vec![0, 0, 1],
//!     vec![1, 1, 1],
//! ])
//! .unwrap();
//!
//! assert_eq!(shortest_path(&grid, (0, 0), (2, 2)), Err(SearchError::PathNotFound));
//! assert_eq!(shortest_path(&grid, (0, 1), (2, 2)), Err(SearchError::StartIsWall));
//! ```
//!
//! ### Configuration
//! [`shortest_path_with_config`] takes a [`SearchConfig`] to choose how the Path is
//! reconstructed and how candidates of equal Cost are ordered:
//! ```
//! # use grid_shortest_path::prelude::*;
//! # let grid = Grid::new(vec![vec![1, 2, 0], vec![2, 0, 1], vec![9, 1, 0]]).unwrap();
//! let regular = shortest_path(&grid, (0, 0), (2, 1)).unwrap();
//! let low_mem = shortest_path_with_config(&grid, (0, 0), (2, 1), SearchConfig::LOW_MEM).unwrap();
//!
//! assert_eq!(regular, low_mem);
//! ```
//!
//! ### Text format
//! The [`input`] and [`output`] modules read and write the plain text maze format used by the
//! `shortest_path` binary (enable the `cli` feature to build it).

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// a Type to represent the Cost of entering a Cell
pub type Cost = usize;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;

macro_rules! debug {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		log::debug!($($arg)*);
	};
}

macro_rules! trace {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		log::trace!($($arg)*);
	};
}

mod config;
pub use self::config::{Reconstruction, SearchConfig, TieBreak};

mod error;
pub use self::error::{GridError, SearchError};

mod grid;
pub use self::grid::{Grid, Visited, MAX_COST, WALL};

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{shortest_path, shortest_path_with_config, shortest_paths};

pub mod frontier;

pub mod neighbors;

pub mod input;

pub mod output;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		neighbors::ManhattanNeighborhood, shortest_path, shortest_path_with_config,
		shortest_paths, Grid, Path, Point, SearchConfig, SearchError,
	};
}
