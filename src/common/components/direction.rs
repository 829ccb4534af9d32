use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use xyz::{Xyz, DIRECTIONS};

use crate::common::components::keybits::*;

/// Anything that can report whether a cardinal direction is being asked for.
pub trait DirectionInput {
    fn is_requested(&self, direction: Direction) -> bool;
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    North,
    East,
    #[default]
    South,
    West,
}

impl Direction {
    /// Every direction in input precedence order: when several are held the
    /// first one listed wins.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Resolves held input to at most one direction.
    pub fn requested(input: &impl DirectionInput) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| input.is_requested(d))
    }

    pub fn offset(&self) -> Xyz {
        match self {
            Direction::North => DIRECTIONS[0],
            Direction::East => DIRECTIONS[1],
            Direction::South => DIRECTIONS[2],
            Direction::West => DIRECTIONS[3],
        }
    }

    /// Unit world-space vector on the grid plane.
    pub fn vector(&self) -> Vec3 {
        let offset = self.offset();
        Vec3::new(offset.x as f32, offset.y as f32, 0.)
    }

    pub fn key_bit(&self) -> u8 {
        match self {
            Direction::North => KB_NORTH,
            Direction::East => KB_EAST,
            Direction::South => KB_SOUTH,
            Direction::West => KB_WEST,
        }
    }
}

// models face north (+Y) with no rotation
impl From<Direction> for Quat {
    fn from(value: Direction) -> Self {
        match value {
            Direction::North => Quat::IDENTITY,
            Direction::East => Quat::from_rotation_z(-FRAC_PI_2),
            Direction::South => Quat::from_rotation_z(PI),
            Direction::West => Quat::from_rotation_z(FRAC_PI_2),
        }
    }
}
