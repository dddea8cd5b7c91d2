pub mod animate;
pub mod color;
pub mod config;
pub mod constants;
pub mod content;
pub mod geometry;
pub mod scene;
pub mod tracker;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animate::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use content::*;
pub use geometry::*;
pub use scene::*;
pub use tracker::*;
