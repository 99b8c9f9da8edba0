//! The fixed set of globe nodes and their per-frame rotation and projection.

use std::f64::consts::TAU;

use oorandom::Rand64;

use super::random;
use super::vector::Vector3;

/// Depth never drops below this before it is used as a divisor.
pub const MIN_DEPTH: f64 = 1.0e-3;

/// Projected node size at unit depth.
pub const NODE_SIZE: f64 = 10.0;

/// Frames per radian of the breathing perspective.
const BREATH_FRAMES: f64 = 60.0;

/// A projected 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
	/// Horizontal offset from the scene centre.
	pub x: f64,
	/// Vertical offset from the scene centre.
	pub y: f64,
}

/// One point on the globe.
#[derive(Clone, Debug, Default)]
pub struct Node {
	/// Position on the unit sphere, rotated in place every frame.
	pub position: Vector3,
	/// Cached projection from the last `reproject`.
	pub screen_position: ScreenPoint,
	/// Perspective denominator from the last `reproject`.
	pub depth: f64,
	/// Display size from the last `reproject`.
	pub radius: f64,
}

impl Node {
	/// A node at `position` that has not been projected yet.
	pub fn at(position: Vector3) -> Self {
		Self {
			position,
			..Self::default()
		}
	}

	fn reproject(&mut self, magnitude: f64, zoom: f64) {
		self.depth = (magnitude + self.position.z).max(MIN_DEPTH);
		self.screen_position = ScreenPoint {
			x: self.position.x / self.depth * zoom,
			y: self.position.y / self.depth * zoom,
		};
		self.radius = NODE_SIZE / self.depth;
	}
}

/// Oscillating camera distance: `cos(frame / 60)` mapped from `[-1, 1]` onto `[3, 1]`.
pub fn perspective_magnitude(frame_index: u64) -> f64 {
	let c = (frame_index as f64 / BREATH_FRAMES).cos();
	2.0 - c
}

/// Owns every node for the lifetime of a session.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
	nodes: Vec<Node>,
}

impl NodeStore {
	/// Samples `count` nodes with the two-angle parametrisation
	/// `(sin α cos β, cos α, sin α sin β)`. The samples cluster towards the
	/// poles; the graph shape depends on that bias.
	pub fn initialize(count: usize, rng: &mut Rand64) -> Self {
		let nodes = (0..count)
			.map(|_| {
				let alpha = random::range(rng, 0.0, TAU);
				let beta = random::range(rng, 0.0, TAU);
				Node::at(Vector3::new(
					alpha.sin() * beta.cos(),
					alpha.cos(),
					alpha.sin() * beta.sin(),
				))
			})
			.collect();
		Self { nodes }
	}

	/// A store holding exactly the given positions.
	pub fn from_positions(positions: impl IntoIterator<Item = Vector3>) -> Self {
		Self {
			nodes: positions.into_iter().map(Node::at).collect(),
		}
	}

	/// Rotates every node by `angular_step` radians in the x-z plane.
	pub fn rotate_all(&mut self, angular_step: f64) {
		for node in &mut self.nodes {
			node.position = node.position.rotate_y(angular_step);
		}
	}

	/// Recomputes depth, screen position and radius of every node.
	pub fn reproject_all(&mut self, frame_index: u64, zoom: f64) {
		let magnitude = perspective_magnitude(frame_index);
		for node in &mut self.nodes {
			node.reproject(magnitude, zoom);
		}
	}

	/// All nodes in index order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the store holds no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	#[test]
	fn samples_lie_on_unit_sphere() {
		let mut rng = Rand64::new(42);
		let store = NodeStore::initialize(300, &mut rng);
		assert_eq!(store.len(), 300);
		for node in store.nodes() {
			assert!((node.position.length() - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn rotation_preserves_height_and_radius() {
		let mut rng = Rand64::new(3);
		let mut store = NodeStore::initialize(50, &mut rng);
		let before: Vec<Vector3> = store.nodes().iter().map(|n| n.position).collect();
		store.rotate_all(0.01);
		for (node, old) in store.nodes().iter().zip(&before) {
			assert_eq!(node.position.y, old.y);
			assert!((node.position.length() - 1.0).abs() < 1e-9);
			let planar = |v: Vector3| v.x * v.x + v.z * v.z;
			assert!((planar(node.position) - planar(*old)).abs() < 1e-12);
		}
	}

	#[test]
	fn quarter_turn_maps_x_onto_z() {
		let mut store = NodeStore::from_positions([Vector3::new(1.0, 0.0, 0.0)]);
		store.rotate_all(FRAC_PI_2);
		let p = store.nodes()[0].position;
		assert!(p.x.abs() < 1e-12);
		assert!((p.z - 1.0).abs() < 1e-12);
	}

	#[test]
	fn magnitude_starts_at_near_bound_and_breathes() {
		assert_eq!(perspective_magnitude(0), 1.0);
		for frame in 0..2000 {
			let m = perspective_magnitude(frame);
			assert!((1.0..=3.0).contains(&m));
		}
		// Midpoint at a quarter period, far bound at half.
		assert!((perspective_magnitude(94) - 2.0).abs() < 0.01);
		assert!((perspective_magnitude(188) - 3.0).abs() < 0.001);
	}

	#[test]
	fn depth_equals_magnitude_on_the_equator_plane() {
		let mut store = NodeStore::from_positions([Vector3::new(0.6, -0.8, 0.0)]);
		for frame in [0, 17, 94, 377] {
			store.reproject_all(frame, 960.0);
			let node = &store.nodes()[0];
			assert_eq!(node.depth, perspective_magnitude(frame));
			assert_eq!(node.screen_position.x, 0.6 / node.depth * 960.0);
			assert_eq!(node.screen_position.y, -0.8 / node.depth * 960.0);
			assert_eq!(node.radius, 10.0 / node.depth);
		}
	}

	#[test]
	fn degenerate_depth_is_clamped() {
		let mut store = NodeStore::from_positions([Vector3::new(1.0, 1.0, -5.0)]);
		store.reproject_all(0, 100.0);
		let node = &store.nodes()[0];
		assert_eq!(node.depth, MIN_DEPTH);
		assert!(node.screen_position.x.is_finite());
		assert!(node.radius.is_finite());
	}
}
