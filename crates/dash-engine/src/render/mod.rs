pub mod instance;
pub mod sky;
pub mod text;
pub mod scene;
