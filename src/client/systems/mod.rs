pub mod actor;
pub mod animator;
pub mod camera;
pub mod input;
