//! Incremental Gabriel graph construction.
//!
//! An edge `(a, b)` belongs to the Gabriel graph when no other node lies in the
//! closed ball whose diameter is the segment `ab`. Evaluating every pair costs
//! O(N³), so [`GabrielBuilder`] walks a cursor over the nodes and only finishes
//! a bounded number of cursor positions per call.
//!
//! The builder reads whatever positions it is handed on each call. On the
//! globe those positions keep rotating between calls, so edges found late in
//! the sweep are judged against a later rotation than edges found early. The
//! result is not the Gabriel graph of any single snapshot; it is an accepted
//! visual approximation. The globe's spin is rigid, so in practice the drift
//! is limited to rounding, but any per-node motion would make it real. Hand
//! the builder a frozen slice to get the exact graph.

use super::nodes::Node;
use super::vector::Vector3;

/// An undirected edge between two node indices, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
	/// Lower node index.
	pub a: usize,
	/// Higher node index.
	pub b: usize,
}

/// Whether `(a, b)` is a Gabriel edge among `positions`. A third point on the
/// boundary of the diametral ball disqualifies the edge.
pub fn is_gabriel_edge(positions: &[Vector3], a: usize, b: usize) -> bool {
	let (pa, pb) = (positions[a], positions[b]);
	let center = pa.midpoint(pb);
	let radius = pa.distance(pb) / 2.0;
	positions
		.iter()
		.enumerate()
		.filter(|&(k, _)| k != a && k != b)
		.all(|(_, extra)| extra.distance(center) > radius)
}

/// Resumable sweep state: a cursor over the nodes, a finished flag and the
/// edges found so far.
#[derive(Clone, Debug, Default)]
pub struct GabrielBuilder {
	cursor: usize,
	finished: bool,
	edges: Vec<Edge>,
}

impl GabrielBuilder {
	/// A builder positioned at the first node.
	pub fn new() -> Self {
		Self::default()
	}

	/// Drops every edge and rewinds the cursor.
	pub fn reset(&mut self) {
		self.edges.clear();
		self.cursor = 0;
		self.finished = false;
	}

	/// Finishes up to `budget` cursor positions against `nodes` and returns
	/// how many were finished. Each position tests the cursor node against
	/// every node after it. Once the cursor reaches the end the builder is
	/// finished and further calls do nothing.
	pub fn step_budgeted(&mut self, nodes: &[Node], budget: usize) -> usize {
		if self.cursor >= nodes.len() {
			self.finished = true;
		}
		if self.finished {
			return 0;
		}

		let positions: Vec<Vector3> = nodes.iter().map(|n| n.position).collect();
		let mut advanced = 0;
		while advanced < budget && self.cursor < positions.len() {
			let current = self.cursor;
			for target in current + 1..positions.len() {
				if is_gabriel_edge(&positions, current, target) {
					self.edges.push(Edge {
						a: current,
						b: target,
					});
				}
			}
			self.cursor += 1;
			advanced += 1;
		}
		self.finished = self.cursor >= positions.len();
		advanced
	}

	/// Index of the next node to be evaluated.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Whether every node has been evaluated.
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Edges found so far, in discovery order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}
}
