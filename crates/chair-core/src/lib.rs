pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod easing;
pub mod idle;
pub mod mesh;
pub mod motion;
pub mod session;
pub mod timer;
pub mod transition;

pub use camera::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use easing::*;
pub use idle::*;
pub use mesh::*;
pub use motion::*;
pub use session::*;
pub use timer::*;
pub use transition::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
