use log::{debug, info};
use oorandom::Rand64;

use super::camera::SceneCamera;
use crate::scene::{GabrielBuilder, NodeStore, ParticleField};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;

#[derive(Clone, Debug)]
pub struct GlobeConfig {
	pub node_count: usize,
	/// Node spin per frame, radians.
	pub rotate_speed: f64,
	/// Builder cursor advances per frame.
	pub links_per_frame: usize,
	/// Zoom as a fraction of the shorter canvas side.
	pub zoom_scale: f64,
	pub particle_count: usize,
	pub particle_bound: f64,
	pub scene_pitch_speed: f64,
	pub scene_yaw_speed: f64,
	pub sphere_radius: f64,
	pub sphere_detail: usize,
}

impl Default for GlobeConfig {
	fn default() -> Self {
		Self {
			node_count: 300,
			rotate_speed: 0.01,
			links_per_frame: 10,
			zoom_scale: 1.2,
			particle_count: 20,
			particle_bound: 400.0,
			scene_pitch_speed: 0.005,
			scene_yaw_speed: 0.01,
			sphere_radius: 300.0,
			sphere_detail: 24,
		}
	}
}

/// Everything that changes from frame to frame.
pub struct GlobeState {
	pub config: GlobeConfig,
	pub nodes: NodeStore,
	pub builder: GabrielBuilder,
	pub particles: ParticleField,
	pub frame: u64,
	pub width: f64,
	pub height: f64,
	pub zoom: f64,
	rng: Rand64,
}

impl GlobeState {
	pub fn new(config: GlobeConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Rand64::new(seed as u128);
		let nodes = NodeStore::initialize(config.node_count, &mut rng);
		debug!("Sampled {} globe nodes (seed {seed})", nodes.len());

		Self {
			particles: ParticleField::new(config.particle_bound),
			zoom: width.min(height) * config.zoom_scale,
			config,
			nodes,
			builder: GabrielBuilder::new(),
			frame: 0,
			width,
			height,
			rng,
		}
	}

	/// One frame: spin and reproject the nodes, give the builder its slice,
	/// then move the particles.
	pub fn tick(&mut self) {
		self.nodes.rotate_all(self.config.rotate_speed);
		self.nodes.reproject_all(self.frame, self.zoom);

		if !self.builder.is_finished() {
			self.builder
				.step_budgeted(self.nodes.nodes(), self.config.links_per_frame);
			if self.builder.is_finished() {
				info!(
					"Gabriel graph complete: {} edges after {} frames",
					self.builder.edges().len(),
					self.frame + 1
				);
			}
		}

		self.particles
			.spawn(self.config.particle_count, &mut self.rng);
		self.particles.update();
		self.frame += 1;
	}

	pub fn camera(&self) -> SceneCamera {
		SceneCamera {
			pitch: self.frame as f64 * self.config.scene_pitch_speed,
			yaw: self.frame as f64 * self.config.scene_yaw_speed,
			width: self.width,
			height: self.height,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.zoom = width.min(height) * self.config.zoom_scale;
	}
}
