//! Decorative particles drifting through the scene, independent of the graph.

use oorandom::Rand64;

use super::random;
use super::vector::Vector3;

/// Colour channels of a particle, alpha last.
pub type ParticleColor = [u8; 4];

/// A short-lived glowing point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current position in scene units.
	pub position: Vector3,
	/// Displacement applied on every update.
	pub velocity: Vector3,
	/// Stroke colour, fixed at spawn.
	pub color: ParticleColor,
}

impl Particle {
	fn is_out_of_bounds(&self, bound: f64) -> bool {
		let p = self.position;
		p.x.abs() > bound || p.y.abs() > bound || p.z.abs() > bound
	}
}

/// Every live particle plus the cube they are confined to.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	bound: f64,
}

impl ParticleField {
	/// An empty field whose particles die once a coordinate exceeds `bound`.
	pub fn new(bound: f64) -> Self {
		Self {
			particles: Vec::new(),
			bound,
		}
	}

	/// Adds `count` particles anywhere inside the bounding cube, each heading
	/// in a random direction at a speed in `[1, 3)`.
	pub fn spawn(&mut self, count: usize, rng: &mut Rand64) {
		let b = self.bound;
		self.particles.extend((0..count).map(|_| {
			let position = Vector3::new(
				random::range(rng, -b, b),
				random::range(rng, -b, b),
				random::range(rng, -b, b),
			);
			let velocity = random::unit_vector(rng) * random::range(rng, 1.0, 3.0);
			let color = [
				random::channel(rng, 0.0, 255.0),
				random::channel(rng, 0.0, 255.0),
				random::channel(rng, 0.0, 255.0),
				150,
			];
			Particle {
				position,
				velocity,
				color,
			}
		}));
	}

	/// Inserts a particle as-is.
	pub fn push(&mut self, particle: Particle) {
		self.particles.push(particle);
	}

	/// Moves every particle by its velocity, then drops the ones that left the cube.
	pub fn update(&mut self) {
		let bound = self.bound;
		self.particles.retain_mut(|p| {
			p.position = p.position + p.velocity;
			!p.is_out_of_bounds(bound)
		});
	}

	/// Live particles.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether no particle is alive.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
