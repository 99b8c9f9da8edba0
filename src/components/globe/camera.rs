use std::f64::consts::FRAC_PI_6;

use crate::scene::Vector3;

/// Scene tumble plus a fixed perspective looking down the z axis, the same
/// framing a 60° WEBGL sketch camera gives.
#[derive(Clone, Copy, Debug)]
pub struct SceneCamera {
	pub pitch: f64,
	pub yaw: f64,
	pub width: f64,
	pub height: f64,
}

/// A scene point after projection onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Pixels per scene unit at this depth.
	pub scale: f64,
}

impl SceneCamera {
	pub fn eye_distance(&self) -> f64 {
		(self.height / 2.0) / FRAC_PI_6.tan()
	}

	/// Applies the yaw, then the pitch, then perspective. Points on or past the
	/// near plane have no projection.
	pub fn project(&self, p: Vector3) -> Option<Projected> {
		let v = p.rotate_y(self.yaw).rotate_x(self.pitch);
		let eye = self.eye_distance();
		let w = eye - v.z;
		if w.is_nan() || w <= eye / 10.0 {
			return None;
		}
		let scale = eye / w;
		Some(Projected {
			x: self.width / 2.0 + v.x * scale,
			y: self.height / 2.0 + v.y * scale,
			scale,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	fn camera(pitch: f64, yaw: f64) -> SceneCamera {
		SceneCamera {
			pitch,
			yaw,
			width: 800.0,
			height: 800.0,
		}
	}

	#[test]
	fn origin_lands_on_canvas_centre() {
		let p = camera(0.3, 1.2).project(Vector3::ZERO).unwrap();
		assert_eq!((p.x, p.y, p.scale), (400.0, 400.0, 1.0));
	}

	#[test]
	fn nearer_points_are_larger() {
		let cam = camera(0.0, 0.0);
		let near = cam.project(Vector3::new(100.0, 0.0, 200.0)).unwrap();
		let far = cam.project(Vector3::new(100.0, 0.0, -200.0)).unwrap();
		assert!(near.scale > 1.0 && far.scale < 1.0);
		assert!(near.x > far.x);
	}

	#[test]
	fn points_past_the_near_plane_are_clipped() {
		let cam = camera(0.0, 0.0);
		let eye = cam.eye_distance();
		assert!(cam.project(Vector3::new(0.0, 0.0, eye)).is_none());
		assert!(cam.project(Vector3::new(0.0, 0.0, eye * 2.0)).is_none());
		assert!(cam.project(Vector3::new(0.0, 0.0, f64::NAN)).is_none());
	}

	#[test]
	fn yaw_turns_x_into_depth() {
		let p = camera(0.0, FRAC_PI_2).project(Vector3::new(100.0, 0.0, 0.0)).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!(p.scale > 1.0);
	}
}
