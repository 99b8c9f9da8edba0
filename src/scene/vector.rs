//! Plain 3D vector arithmetic shared by the node store, the builder and the camera.

use std::ops::{Add, Mul, Sub};

/// A point or direction in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
	/// Horizontal axis.
	pub x: f64,
	/// Vertical axis, pointing down on screen.
	pub y: f64,
	/// Depth axis, pointing towards the viewer.
	pub z: f64,
}

impl Vector3 {
	/// The origin.
	pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

	/// Builds a vector from its components.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Dot product.
	pub fn dot(self, o: Self) -> f64 {
		self.x * o.x + self.y * o.y + self.z * o.z
	}

	/// Euclidean length.
	pub fn length(self) -> f64 {
		self.dot(self).sqrt()
	}

	/// Euclidean distance to `o`.
	pub fn distance(self, o: Self) -> f64 {
		(self - o).length()
	}

	/// Point halfway between `self` and `o`.
	pub fn midpoint(self, o: Self) -> Self {
		(self + o) * 0.5
	}

	/// Unit vector in the same direction; the zero vector is returned unchanged.
	pub fn normalized(self) -> Self {
		let l = self.length();
		if l == 0.0 { self } else { self * (1.0 / l) }
	}

	/// Rotates about the y axis: a planar rotation of `(x, z)` by `angle` radians.
	pub fn rotate_y(self, angle: f64) -> Self {
		let (s, c) = angle.sin_cos();
		Self::new(self.x * c - self.z * s, self.y, self.x * s + self.z * c)
	}

	/// Rotates about the x axis: a planar rotation of `(y, z)` by `angle` radians.
	pub fn rotate_x(self, angle: f64) -> Self {
		let (s, c) = angle.sin_cos();
		Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
	}
}

impl Add for Vector3 {
	type Output = Self;

	fn add(self, o: Self) -> Self {
		Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
	}
}

impl Sub for Vector3 {
	type Output = Self;

	fn sub(self, o: Self) -> Self {
		Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
	}
}

impl Mul<f64> for Vector3 {
	type Output = Self;

	fn mul(self, k: f64) -> Self {
		Self::new(self.x * k, self.y * k, self.z * k)
	}
}
