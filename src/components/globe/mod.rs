mod camera;
mod component;
mod palette;
mod render;
mod state;
mod types;

pub use component::GlobeCanvas;
