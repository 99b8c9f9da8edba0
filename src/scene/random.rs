//! Sampling helpers on top of `oorandom`.

use std::f64::consts::TAU;

use oorandom::Rand64;

use super::vector::Vector3;

/// Uniform sample in `[low, high)`.
pub fn range(rng: &mut Rand64, low: f64, high: f64) -> f64 {
	low + rng.rand_float() * (high - low)
}

/// Uniform byte in `[low, high)`, as used for colour channels.
pub fn channel(rng: &mut Rand64, low: f64, high: f64) -> u8 {
	range(rng, low, high).clamp(0.0, 255.0) as u8
}

/// Random direction: uniform angle around the z axis and uniform height in `[-1, 1)`.
pub fn unit_vector(rng: &mut Rand64) -> Vector3 {
	let angle = range(rng, 0.0, TAU);
	let z = range(rng, -1.0, 1.0);
	let base = (1.0 - z * z).sqrt();
	Vector3::new(base * angle.cos(), base * angle.sin(), z)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn range_stays_in_bounds() {
		let mut rng = Rand64::new(7);
		for _ in 0..1000 {
			let v = range(&mut rng, -400.0, 400.0);
			assert!((-400.0..400.0).contains(&v));
		}
	}

	#[test]
	fn unit_vectors_have_unit_length() {
		let mut rng = Rand64::new(11);
		for _ in 0..1000 {
			assert!((unit_vector(&mut rng).length() - 1.0).abs() < 1e-9);
		}
	}
}
