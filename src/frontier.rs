//! The cost ordered queue of candidates waiting to be expanded.

use crate::{Cost, Point, TieBreak};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued search entry
///
/// `trail` is whatever the search needs to rebuild the Path once this candidate wins: the full
/// Path so far, or just the Point it was expanded from.
#[derive(Debug, Clone)]
pub struct Candidate<T> {
	/// the Point this candidate represents
	pub point: Point,
	/// the accumulated Cost of reaching `point`, starting Cell included
	pub cost: Cost,
	/// the data carried along with the candidate
	pub trail: T,
	tie: Point,
	seq: usize,
}

impl<T> Candidate<T> {
	fn key(&self) -> (Cost, Point, usize) {
		(self.cost, self.tie, self.seq)
	}
}

// BinaryHeap is a max-heap, so the ordering is reversed
impl<T> Ord for Candidate<T> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.key().cmp(&self.key())
	}
}
impl<T> PartialOrd for Candidate<T> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<T> PartialEq for Candidate<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.key() == rhs.key()
	}
}
impl<T> Eq for Candidate<T> {}

/// A min-priority queue of [`Candidate`]s.
///
/// `pop` always returns the candidate with the lowest Cost. Candidates of equal Cost are
/// returned in the order selected by the [`TieBreak`]; every push gets a sequence number, so the
/// order is fully deterministic.
///
/// ## Examples
/// ```
/// # use grid_shortest_path::{frontier::Frontier, TieBreak};
/// let mut frontier = Frontier::new(TieBreak::Insertion);
/// frontier.push((2, 2), 5, "second");
/// frontier.push((0, 0), 1, "cheapest");
/// frontier.push((1, 1), 5, "third");
///
/// assert_eq!(frontier.pop().unwrap().trail, "cheapest");
/// assert_eq!(frontier.pop().unwrap().trail, "second");
/// assert_eq!(frontier.pop().unwrap().trail, "third");
/// assert!(frontier.pop().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Frontier<T> {
	heap: BinaryHeap<Candidate<T>>,
	tie_break: TieBreak,
	pushed: usize,
}

impl<T> Frontier<T> {
	/// Creates an empty Frontier
	pub fn new(tie_break: TieBreak) -> Frontier<T> {
		Frontier {
			heap: BinaryHeap::new(),
			tie_break,
			pushed: 0,
		}
	}

	/// Queues a candidate for `point`
	pub fn push(&mut self, point: Point, cost: Cost, trail: T) {
		let tie = match self.tie_break {
			TieBreak::Insertion => (0, 0),
			TieBreak::Coordinate => point,
		};
		self.heap.push(Candidate {
			point,
			cost,
			trail,
			tie,
			seq: self.pushed,
		});
		self.pushed += 1;
	}

	/// Removes and returns the cheapest candidate, or `None` if the Frontier is empty
	pub fn pop(&mut self) -> Option<Candidate<T>> {
		self.heap.pop()
	}

	/// true iff no candidates are queued
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// number of queued candidates
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// number of candidates pushed since creation, including ones already popped
	pub fn pushed(&self) -> usize {
		self.pushed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pops_lowest_cost_first() {
		let mut frontier = Frontier::new(TieBreak::Insertion);
		for (i, cost) in [7, 3, 9, 1, 4].into_iter().enumerate() {
			frontier.push((i, 0), cost, ());
		}
		assert_eq!(frontier.len(), 5);

		let costs: Vec<Cost> = std::iter::from_fn(|| frontier.pop().map(|c| c.cost)).collect();
		assert_eq!(costs, vec![1, 3, 4, 7, 9]);
		assert!(frontier.is_empty());
		assert_eq!(frontier.pushed(), 5);
	}

	#[test]
	fn insertion_tie_break() {
		let mut frontier = Frontier::new(TieBreak::Insertion);
		frontier.push((2, 0), 4, ());
		frontier.push((0, 1), 4, ());
		frontier.push((1, 1), 4, ());

		assert_eq!(frontier.pop().unwrap().point, (2, 0));
		assert_eq!(frontier.pop().unwrap().point, (0, 1));
		assert_eq!(frontier.pop().unwrap().point, (1, 1));
	}

	#[test]
	fn coordinate_tie_break() {
		let mut frontier = Frontier::new(TieBreak::Coordinate);
		frontier.push((2, 0), 4, 'a');
		frontier.push((0, 1), 4, 'b');
		frontier.push((1, 1), 4, 'c');
		frontier.push((0, 1), 4, 'd');
		frontier.push((5, 5), 3, 'e');

		let order: Vec<char> = std::iter::from_fn(|| frontier.pop().map(|c| c.trail)).collect();
		assert_eq!(order, vec!['e', 'b', 'd', 'c', 'a']);
	}

	#[test]
	fn pop_empty() {
		let mut frontier = Frontier::<()>::new(TieBreak::Insertion);
		assert!(frontier.pop().is_none());
		assert_eq!(frontier.len(), 0);
	}
}
