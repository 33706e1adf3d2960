pub mod config;
pub mod constants;
pub mod control;
pub mod engine;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use constants::*;
pub use control::*;
pub use engine::*;
