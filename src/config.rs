/// Options for configuring a search (see [`shortest_path_with_config`](crate::shortest_path_with_config))
///
/// Default options:
/// ```
/// # use grid_shortest_path::{Reconstruction, SearchConfig, TieBreak};
/// assert_eq!(
/// 	SearchConfig {
/// 		reconstruction: Reconstruction::CarriedPath,
/// 		tie_break: TieBreak::Insertion,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// How the winning Path is put together once the Goal is reached.
	///
	/// This option never changes which Path is returned, only how much memory is used to find it.
	pub reconstruction: Reconstruction,
	/// How candidates with the same accumulated Cost are ordered in the Frontier.
	///
	/// Both options are deterministic, but they may pick a different Path when several Paths
	/// share the lowest Cost.
	pub tie_break: TieBreak,
}

/// Strategy for rebuilding the Path from start to goal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reconstruction {
	/// Every queued candidate owns a copy of the full Path that led to it.
	///
	/// Nothing has to be rebuilt at the end, but Paths with a common prefix are stored once per
	/// candidate.
	CarriedPath,
	/// Candidates only remember the Point they were expanded from. The first time a Point is
	/// popped, that parent is stored in a map, and the Path is rebuilt by walking the map backwards
	/// from the goal.
	Predecessors,
}

/// Secondary ordering of the Frontier for candidates of equal Cost
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TieBreak {
	/// The candidate that was pushed first is popped first.
	Insertion,
	/// The candidate with the smaller `(row, column)` is popped first, falling back to insertion
	/// order for the same Point.
	Coordinate,
}

impl SearchConfig {
	/// a SearchConfig that rebuilds Paths from a predecessor map to reduce Memory Usage
	///
	/// Values:
	/// ```
	/// # use grid_shortest_path::{Reconstruction, SearchConfig, TieBreak};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		reconstruction: Reconstruction::Predecessors,
	/// 		tie_break: TieBreak::Insertion,
	/// 	},
	/// 	SearchConfig::LOW_MEM
	/// );
	/// ```
	pub const LOW_MEM: SearchConfig = SearchConfig {
		reconstruction: Reconstruction::Predecessors,
		tie_break: TieBreak::Insertion,
	};
	/// a SearchConfig that prefers lexicographically smaller Points among equally cheap candidates
	///
	/// Values:
	/// ```
	/// # use grid_shortest_path::{Reconstruction, SearchConfig, TieBreak};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		reconstruction: Reconstruction::CarriedPath,
	/// 		tie_break: TieBreak::Coordinate,
	/// 	},
	/// 	SearchConfig::COORDINATE_ORDER
	/// );
	/// ```
	pub const COORDINATE_ORDER: SearchConfig = SearchConfig {
		reconstruction: Reconstruction::CarriedPath,
		tie_break: TieBreak::Coordinate,
	};
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			reconstruction: Reconstruction::CarriedPath,
			tie_break: TieBreak::Insertion,
		}
	}
}
