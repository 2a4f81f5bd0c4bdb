use crate::{
	frontier::{Candidate, Frontier},
	Grid, Path, Point, PointMap, Reconstruction, SearchConfig, SearchError, Visited,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Searches the cheapest Path from `start` to `goal` with the default [`SearchConfig`].
///
/// The Cost of a Path is the sum of the Cells it enters, `start` included. Movement is restricted
/// to the 4 cardinal directions, and Walls are never entered.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_shortest_path::prelude::*;
/// let grid = Grid::new(vec![
///     vec![1, 1, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 1],
/// ])
/// .unwrap();
///
/// let path = shortest_path(&grid, (0, 0), (2, 2)).unwrap();
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.cost, 5);
/// ```
///
/// If `start` and `goal` are the same Point, the Path only contains that Point:
/// ```
/// # use grid_shortest_path::prelude::*;
/// # let grid = Grid::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
/// let path = shortest_path(&grid, (0, 0), (0, 0)).unwrap();
///
/// assert_eq!(path.path, vec![(0, 0)]);
/// assert_eq!(path.cost, 1);
/// ```
///
/// ## Errors
/// - [`SearchError::StartIsWall`] if `start` is a Wall. This is checked before anything else,
///   regardless of `goal`.
/// - [`SearchError::PathNotFound`] if `goal` cannot be reached from `start`. A Wall as `goal` is
///   never reachable.
///
/// ## Panics
/// if `start` or `goal` lies outside the Grid.
pub fn shortest_path(grid: &Grid, start: Point, goal: Point) -> Result<Path<Point>, SearchError> {
	shortest_path_with_config(grid, start, goal, SearchConfig::default())
}

/// Same as [`shortest_path`], with a custom [`SearchConfig`].
///
/// The choice of [`Reconstruction`] never changes the result. The [`TieBreak`](crate::TieBreak)
/// may change which of several equally cheap Paths is returned, but never the Cost.
pub fn shortest_path_with_config(
	grid: &Grid,
	start: Point,
	goal: Point,
	config: SearchConfig,
) -> Result<Path<Point>, SearchError> {
	assert!(
		grid.in_bounds(start),
		"start point {:?} is outside of a {}x{} Grid",
		start,
		grid.rows(),
		grid.columns()
	);
	assert!(
		grid.in_bounds(goal),
		"goal point {:?} is outside of a {}x{} Grid",
		goal,
		grid.rows(),
		grid.columns()
	);

	if grid.is_wall(start) {
		debug!("search from {:?} rejected: start is a wall", start);
		return Err(SearchError::StartIsWall);
	}

	debug!(
		"searching {:?} -> {:?} on a {}x{} grid ({:?})",
		start,
		goal,
		grid.rows(),
		grid.columns(),
		config
	);

	match config.reconstruction {
		Reconstruction::CarriedPath => carried_path_search(grid, start, goal, config),
		Reconstruction::Predecessors => predecessor_search(grid, start, goal, config),
	}
}

/// Runs several independent searches on the same Grid.
///
/// The results are in the same order as `queries`. With the `parallel` feature (enabled by
/// default) the searches are spread over the rayon thread pool.
///
/// ## Examples
/// ```
/// # use grid_shortest_path::prelude::*;
/// let grid = Grid::new(vec![
///     vec![1, 0, 1],
///     vec![0, 0, 1],
///     vec![1, 1, 1],
/// ])
/// .unwrap();
///
/// let results = shortest_paths(
///     &grid,
///     &[((0, 2), (2, 0)), ((0, 0), (2, 2)), ((1, 1), (0, 0))],
///     SearchConfig::default(),
/// );
///
/// assert_eq!(results[0].as_ref().unwrap().cost, 5);
/// assert_eq!(results[1], Err(SearchError::PathNotFound));
/// assert_eq!(results[2], Err(SearchError::StartIsWall));
/// ```
pub fn shortest_paths(
	grid: &Grid,
	queries: &[(Point, Point)],
	config: SearchConfig,
) -> Vec<Result<Path<Point>, SearchError>> {
	#[cfg(feature = "parallel")]
	let iter = queries.par_iter();
	#[cfg(not(feature = "parallel"))]
	let iter = queries.iter();

	iter.map(|&(start, goal)| shortest_path_with_config(grid, start, goal, config))
		.collect()
}

fn carried_path_search(
	grid: &Grid,
	start: Point,
	goal: Point,
	config: SearchConfig,
) -> Result<Path<Point>, SearchError> {
	let neighborhood = grid.neighborhood();
	let mut visited = Visited::new(grid);
	let mut frontier = Frontier::new(config.tie_break);

	let start_cost = grid.cost(start);
	frontier.push(start, start_cost, Path::new(vec![start], start_cost));

	while let Some(Candidate {
		point: current,
		trail: path,
		..
	}) = frontier.pop()
	{
		if current == goal {
			debug!(
				"found path of cost {} after {} pushes",
				path.cost,
				frontier.pushed()
			);
			return Ok(path);
		}

		if !visited.insert(current) {
			continue;
		}
		trace!("expanding {:?} at cost {}", current, path.cost);

		for next in neighborhood.get_all_neighbors(current) {
			if grid.eligible_for_visit(&visited, next) {
				let mut next_path = path.clone();
				next_path.append(next, grid.cost(next));
				frontier.push(next, next_path.cost, next_path);
			}
		}
	}

	debug!("no path after {} pushes", frontier.pushed());
	Err(SearchError::PathNotFound)
}

fn predecessor_search(
	grid: &Grid,
	start: Point,
	goal: Point,
	config: SearchConfig,
) -> Result<Path<Point>, SearchError> {
	let neighborhood = grid.neighborhood();
	let mut visited = Visited::new(grid);
	let mut frontier = Frontier::new(config.tie_break);
	// parent of every visited Point, `None` for the start
	let mut came_from: PointMap<Option<Point>> = PointMap::default();

	frontier.push(start, grid.cost(start), None);

	while let Some(Candidate {
		point: current,
		cost,
		trail: parent,
		..
	}) = frontier.pop()
	{
		if current == goal {
			let steps = {
				let mut steps = vec![current];
				let mut next = parent;

				while let Some(point) = next {
					steps.push(point);
					next = came_from[&point];
				}
				steps.reverse();
				steps
			};
			debug!(
				"found path of cost {} after {} pushes",
				cost,
				frontier.pushed()
			);
			return Ok(Path::new(steps, cost));
		}

		if !visited.insert(current) {
			continue;
		}
		came_from.insert(current, parent);
		trace!("expanding {:?} at cost {}", current, cost);

		for next in neighborhood.get_all_neighbors(current) {
			if grid.eligible_for_visit(&visited, next) {
				frontier.push(next, cost + grid.cost(next), Some(current));
			}
		}
	}

	debug!("no path after {} pushes", frontier.pushed());
	Err(SearchError::PathNotFound)
}
