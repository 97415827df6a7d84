pub mod player;
pub mod obstacle;
pub mod collectible;
pub mod floating_text;
pub mod scenery;
pub mod spawn;
