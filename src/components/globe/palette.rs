use oorandom::Rand64;

use super::types::Rgba;
use crate::scene::random::channel;

/// Hands out a fresh translucent colour for every node and edge draw.
pub struct Palette {
	rng: Rand64,
}

impl Palette {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: Rand64::new(seed as u128),
		}
	}

	pub fn node(&mut self) -> Rgba {
		let rng = &mut self.rng;
		Rgba::new(
			channel(rng, 100.0, 255.0),
			channel(rng, 50.0, 200.0),
			channel(rng, 200.0, 255.0),
			150,
		)
	}

	pub fn edge(&mut self) -> Rgba {
		let rng = &mut self.rng;
		Rgba::new(
			channel(rng, 100.0, 255.0),
			channel(rng, 100.0, 255.0),
			channel(rng, 0.0, 255.0),
			100,
		)
	}
}

/// Stroke colour of a skeleton-sphere vertex at angles `phi`, `theta`.
pub fn sphere_vertex(phi: f64, theta: f64) -> Rgba {
	let map = |v: f64| (100.0 + (v + 1.0) / 2.0 * 155.0).round() as u8;
	Rgba::new(map(phi.sin()), map(theta.cos()), map((phi + theta).sin()), 150)
}
