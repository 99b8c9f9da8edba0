use crate::scene::particles::ParticleColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Rgba {
	pub const BLACK: Self = Self::new(0, 0, 0, 255);

	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// CSS colour string for the 2D context.
	pub fn to_css(self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r,
			self.g,
			self.b,
			self.a as f64 / 255.0
		)
	}
}

impl From<ParticleColor> for Rgba {
	fn from([r, g, b, a]: ParticleColor) -> Self {
		Self::new(r, g, b, a)
	}
}
