use bevy::prelude::*;

/// Controller-owned progress of the current hold and step.
///
/// Only `movement::tick` mutates this; everything else reads it.
#[derive(Clone, Component, Copy, Debug, Default, PartialEq)]
pub struct MovementState {
    pub(crate) moving: bool,
    pub(crate) start_delay: f32,
    pub(crate) progress: f32,
}

impl MovementState {
    /// Whether a step is in flight.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Seconds the current direction has been held while idle.
    pub fn start_delay(&self) -> f32 {
        self.start_delay
    }

    /// Seconds elapsed within the in-flight step.
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
