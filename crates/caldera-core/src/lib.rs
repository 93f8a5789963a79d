pub mod constants;
pub mod ease;
pub mod embers;
pub mod eruption;
pub mod noise;
pub mod particles;
pub mod scroll;
pub mod shake;
pub mod sim;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use constants::*;
pub use embers::*;
pub use eruption::*;
pub use particles::*;
pub use scroll::*;
pub use shake::*;
pub use sim::*;
