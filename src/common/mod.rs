pub mod components;
pub mod error;
pub mod resources;
pub mod systems;
