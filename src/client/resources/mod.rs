use bevy::prelude::*;

use crate::common::components::direction::Direction;

/// Keys bound to each direction. Any bound key counts as held.
#[derive(Clone, Debug, Resource)]
pub struct KeyBindings {
    pub north: Vec<KeyCode>,
    pub east: Vec<KeyCode>,
    pub south: Vec<KeyCode>,
    pub west: Vec<KeyCode>,
}

impl KeyBindings {
    pub fn keys(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            north: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            east: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            south: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            west: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
        }
    }
}
