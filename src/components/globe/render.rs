use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use super::camera::{Projected, SceneCamera};
use super::palette::{self, Palette};
use super::state::GlobeState;
use super::types::Rgba;
use crate::scene::Vector3;

/// Drawing primitives in scene space. Flat primitives sit on the z = 0 plane.
pub trait Surface {
	fn clear(&mut self, color: Rgba);
	fn set_fill(&mut self, color: Rgba);
	fn set_stroke(&mut self, color: Rgba, weight: f64);
	fn no_stroke(&mut self);
	fn ellipse(&mut self, x: f64, y: f64, size: f64);
	fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
	fn point(&mut self, p: Vector3);
	fn begin_polyline(&mut self);
	/// Adds a vertex; the segment ending here takes the current stroke.
	fn vertex(&mut self, p: Vector3);
	fn end_polyline(&mut self);
}

pub fn render(state: &GlobeState, palette: &mut Palette, surface: &mut impl Surface) {
	surface.clear(Rgba::BLACK);
	draw_skeleton_sphere(state, surface);
	draw_nodes(state, palette, surface);
	draw_edges(state, palette, surface);
	draw_particles(state, surface);
}

fn draw_skeleton_sphere(state: &GlobeState, surface: &mut impl Surface) {
	let (r, detail) = (state.config.sphere_radius, state.config.sphere_detail);
	let step = |j: usize, span: f64| j as f64 / detail as f64 * span;

	for i in 0..=detail {
		let theta = step(i, TAU);

		// latitude
		surface.begin_polyline();
		for j in 0..=detail {
			let phi = step(j, PI);
			surface.set_stroke(palette::sphere_vertex(phi, theta), 1.0);
			surface.vertex(Vector3::new(
				r * phi.sin() * theta.cos(),
				r * phi.cos(),
				r * phi.sin() * theta.sin(),
			));
		}
		surface.end_polyline();

		// longitude
		surface.begin_polyline();
		for j in 0..=detail {
			let phi = step(j, TAU);
			surface.set_stroke(palette::sphere_vertex(phi, theta), 1.0);
			surface.vertex(Vector3::new(
				r * theta.sin() * phi.cos(),
				r * theta.cos(),
				r * theta.sin() * phi.sin(),
			));
		}
		surface.end_polyline();
	}
}

fn draw_nodes(state: &GlobeState, palette: &mut Palette, surface: &mut impl Surface) {
	surface.no_stroke();
	for node in state.nodes.nodes() {
		surface.set_fill(palette.node());
		let s = node.screen_position;
		surface.ellipse(s.x, s.y, node.radius);
	}
}

fn draw_edges(state: &GlobeState, palette: &mut Palette, surface: &mut impl Surface) {
	let nodes = state.nodes.nodes();
	for edge in state.builder.edges() {
		let (Some(n1), Some(n2)) = (nodes.get(edge.a), nodes.get(edge.b)) else {
			continue;
		};
		surface.set_stroke(palette.edge(), 1.0);
		let (p1, p2) = (n1.screen_position, n2.screen_position);
		surface.line(p1.x, p1.y, p2.x, p2.y);
	}
}

fn draw_particles(state: &GlobeState, surface: &mut impl Surface) {
	for p in state.particles.particles() {
		surface.set_stroke(p.color.into(), 2.0);
		surface.point(p.position);
	}
}

/// CSS colour and line weight.
type Stroke = (String, f64);

/// [`Surface`] backed by a 2D canvas context; every coordinate goes through the
/// scene camera.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
	camera: SceneCamera,
	stroke: Option<Stroke>,
	polyline: Vec<Option<(Projected, Option<Stroke>)>>,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, camera: SceneCamera) -> Self {
		Self {
			ctx,
			camera,
			stroke: None,
			polyline: Vec::new(),
		}
	}

	fn flat(&self, x: f64, y: f64) -> Option<Projected> {
		self.camera.project(Vector3::new(x, y, 0.0))
	}

	fn stroke_segment(&self, a: Projected, b: Projected, style: &Stroke) {
		self.ctx.set_stroke_style_str(&style.0);
		self.ctx.set_line_width(style.1 * (a.scale + b.scale) / 2.0);
		self.ctx.begin_path();
		self.ctx.move_to(a.x, a.y);
		self.ctx.line_to(b.x, b.y);
		self.ctx.stroke();
	}
}

impl Surface for CanvasSurface<'_> {
	fn clear(&mut self, color: Rgba) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx
			.fill_rect(0.0, 0.0, self.camera.width, self.camera.height);
	}

	fn set_fill(&mut self, color: Rgba) {
		self.ctx.set_fill_style_str(&color.to_css());
	}

	fn set_stroke(&mut self, color: Rgba, weight: f64) {
		self.stroke = Some((color.to_css(), weight));
	}

	fn no_stroke(&mut self) {
		self.stroke = None;
	}

	fn ellipse(&mut self, x: f64, y: f64, size: f64) {
		let Some(c) = self.flat(x, y) else {
			return;
		};
		let radius = size / 2.0 * c.scale;
		if !radius.is_finite() || radius <= 0.0 {
			return;
		}
		self.ctx.begin_path();
		let _ = self.ctx.arc(c.x, c.y, radius, 0.0, TAU);
		self.ctx.fill();
		if let Some((style, weight)) = &self.stroke {
			self.ctx.set_stroke_style_str(style);
			self.ctx.set_line_width(*weight * c.scale);
			self.ctx.stroke();
		}
	}

	fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		let (Some(a), Some(b)) = (self.flat(x1, y1), self.flat(x2, y2)) else {
			return;
		};
		if let Some(style) = &self.stroke {
			self.stroke_segment(a, b, style);
		}
	}

	fn point(&mut self, p: Vector3) {
		let (Some(c), Some((style, weight))) = (self.camera.project(p), &self.stroke) else {
			return;
		};
		self.ctx.set_fill_style_str(style);
		self.ctx.begin_path();
		let _ = self.ctx.arc(c.x, c.y, (weight / 2.0 * c.scale).max(0.5), 0.0, TAU);
		self.ctx.fill();
	}

	fn begin_polyline(&mut self) {
		self.polyline.clear();
	}

	fn vertex(&mut self, p: Vector3) {
		let projected = self.camera.project(p);
		let stroke = self.stroke.clone();
		self.polyline.push(projected.map(|v| (v, stroke)));
	}

	fn end_polyline(&mut self) {
		let vertices = std::mem::take(&mut self.polyline);
		for pair in vertices.windows(2) {
			// A clipped vertex breaks the line on both sides.
			if let [Some((a, _)), Some((b, Some(style)))] = pair {
				self.stroke_segment(*a, *b, style);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::globe::state::GlobeConfig;

	#[derive(Debug, PartialEq)]
	enum Call {
		Clear,
		Ellipse { x: f64, y: f64, size: f64, fill: Rgba },
		Line { from: (f64, f64), to: (f64, f64) },
		Point(Vector3),
		Polyline(usize),
	}

	#[derive(Default)]
	struct Recording {
		calls: Vec<Call>,
		fill: Option<Rgba>,
		stroke: Option<(Rgba, f64)>,
		open: Option<usize>,
	}

	impl Recording {
		fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
			self.calls.iter().filter(|c| pred(c)).count()
		}
	}

	impl Surface for Recording {
		fn clear(&mut self, _: Rgba) {
			self.calls.push(Call::Clear);
		}
		fn set_fill(&mut self, color: Rgba) {
			self.fill = Some(color);
		}
		fn set_stroke(&mut self, color: Rgba, weight: f64) {
			self.stroke = Some((color, weight));
		}
		fn no_stroke(&mut self) {
			self.stroke = None;
		}
		fn ellipse(&mut self, x: f64, y: f64, size: f64) {
			let fill = self.fill.expect("fill set before ellipse");
			self.calls.push(Call::Ellipse { x, y, size, fill });
		}
		fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
			assert!(self.stroke.is_some());
			self.calls.push(Call::Line {
				from: (x1, y1),
				to: (x2, y2),
			});
		}
		fn point(&mut self, p: Vector3) {
			assert_eq!(self.stroke.map(|s| s.1), Some(2.0));
			self.calls.push(Call::Point(p));
		}
		fn begin_polyline(&mut self) {
			assert!(self.open.is_none());
			self.open = Some(0);
		}
		fn vertex(&mut self, _: Vector3) {
			*self.open.as_mut().expect("vertex inside polyline") += 1;
		}
		fn end_polyline(&mut self) {
			let n = self.open.take().expect("polyline open");
			self.calls.push(Call::Polyline(n));
		}
	}

	fn ticked_state(ticks: usize) -> GlobeState {
		let config = GlobeConfig {
			node_count: 30,
			..GlobeConfig::default()
		};
		let mut state = GlobeState::new(config, 800.0, 800.0, 12);
		for _ in 0..ticks {
			state.tick();
		}
		state
	}

	#[test]
	fn one_primitive_per_entity() {
		let state = ticked_state(4);
		assert!(state.builder.is_finished());
		let mut surface = Recording::default();
		render(&state, &mut Palette::new(3), &mut surface);

		assert_eq!(surface.calls[0], Call::Clear);
		assert_eq!(surface.count(|c| matches!(c, Call::Polyline(25))), 50);
		assert_eq!(surface.count(|c| matches!(c, Call::Ellipse { .. })), 30);
		assert_eq!(
			surface.count(|c| matches!(c, Call::Line { .. })),
			state.builder.edges().len()
		);
		assert_eq!(
			surface.count(|c| matches!(c, Call::Point(_))),
			state.particles.len()
		);
	}

	#[test]
	fn nodes_and_edges_use_projected_positions() {
		let state = ticked_state(3);
		let mut surface = Recording::default();
		render(&state, &mut Palette::new(3), &mut surface);

		let nodes = state.nodes.nodes();
		let ellipses: Vec<_> = surface
			.calls
			.iter()
			.filter_map(|c| match c {
				Call::Ellipse { x, y, size, fill } => Some((*x, *y, *size, *fill)),
				_ => None,
			})
			.collect();
		for (node, (x, y, size, fill)) in nodes.iter().zip(ellipses) {
			assert_eq!((x, y), (node.screen_position.x, node.screen_position.y));
			assert_eq!(size, node.radius);
			assert_eq!(fill.a, 150);
		}

		let first = state.builder.edges()[0];
		let (a, b) = (nodes[first.a].screen_position, nodes[first.b].screen_position);
		assert!(surface.calls.contains(&Call::Line {
			from: (a.x, a.y),
			to: (b.x, b.y),
		}));
	}

	#[test]
	fn empty_graph_draws_no_lines() {
		let state = ticked_state(0);
		let mut surface = Recording::default();
		render(&state, &mut Palette::new(1), &mut surface);
		assert_eq!(surface.count(|c| matches!(c, Call::Line { .. })), 0);
		assert_eq!(surface.count(|c| matches!(c, Call::Point(_))), 0);
	}
}
