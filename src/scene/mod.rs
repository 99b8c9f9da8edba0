//! Browser-free core of the globe: node sampling and projection, the
//! incremental Gabriel graph and the particle field.

pub mod gabriel;
pub mod nodes;
pub mod particles;
pub mod random;
pub mod vector;

pub use gabriel::{Edge, GabrielBuilder};
pub use nodes::{Node, NodeStore, ScreenPoint, perspective_magnitude};
pub use particles::{Particle, ParticleField};
pub use vector::Vector3;
