pub mod api;
pub mod core;
pub mod input;
pub mod catalog;
pub mod world;
pub mod session;
pub mod animation;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::config::RunnerConfig;
pub use api::types::{RunEvent, SessionStatus, SoundCue};
pub use catalog::{BreedCatalog, BreedDescriptor, BreedId, CatalogError};
pub use core::aabb::Aabb;
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use input::queue::{keys, InputEvent, InputQueue};
pub use session::{
    Session, SessionSnapshot, multiplier_for, CMD_MENU, CMD_RESIZE, CMD_RESTART, CMD_START,
};
pub use animation::{AnimClip, AnimLatch, clip_for};
pub use render::instance::{DrawInstance, DrawKind, DrawList};
pub use render::scene::build_draw_list;
pub use world::player::Player;
pub use world::obstacle::{Obstacle, ObstacleKind};
pub use world::collectible::{Collectible, Placement};
pub use world::floating_text::FloatingText;
pub use world::scenery::Scenery;
pub use world::spawn::Spawner;
