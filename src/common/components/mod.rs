pub mod direction;
pub mod keybits;
pub mod movement_state;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use xyz::Xyz;

use crate::common::{components::direction::Direction, error::Error};

/// Marker for the locally controlled actor.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Player;

/// Grid cell the actor occupies, `z` being the elevation of that cell's tile.
#[derive(Clone, Component, Copy, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct Loc(Xyz);

impl Loc {
    pub fn from_xyz(x: i16, y: i16, z: i16) -> Self {
        Loc(Xyz { x, y, z })
    }

    pub fn new(xyz: Xyz) -> Self {
        Loc(xyz)
    }
}

#[derive(Clone, Component, Copy, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct Facing(Direction);

impl Facing {
    pub fn new(direction: Direction) -> Self {
        Facing(direction)
    }
}

/// Cells per second. Only constructible with a positive value whose
/// reciprocal is finite, so `step_duration` is always finite and positive.
#[derive(Clone, Component, Copy, Debug, PartialEq)]
pub struct MovementSpeed(f32);

impl MovementSpeed {
    pub fn new(cells_per_second: f32) -> Result<Self, Error> {
        if cells_per_second.is_finite() && cells_per_second > 0. && (1. / cells_per_second).is_finite() {
            Ok(Self(cells_per_second))
        } else {
            Err(Error::InvalidSpeed(cells_per_second))
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }

    /// Seconds needed to cross one cell.
    pub fn step_duration(&self) -> f32 {
        1. / self.0
    }
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self(4.)
    }
}
