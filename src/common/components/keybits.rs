use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::components::direction::{Direction, DirectionInput};

pub const KB_NORTH: u8 = 1 << 0;
pub const KB_EAST: u8 = 1 << 1;
pub const KB_SOUTH: u8 = 1 << 2;
pub const KB_WEST: u8 = 1 << 3;

#[derive(Clone, Component, Copy, Default, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeyBits{
    pub key_bits: u8
}

impl KeyBits {
    pub fn all_pressed<T>(&self, keys: T) -> bool
    where T : IntoIterator<Item = u8>, {
        keys.into_iter().all(|k| self.key_bits & k != 0)
    }

    pub fn any_pressed<T>(&self, keys: T) -> bool
    where T : IntoIterator<Item = u8>, {
        keys.into_iter().any(|k| self.key_bits & k != 0)
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.key_bits & key != 0
    }

    pub fn set_pressed<T>(&mut self, keys: T, pressed: bool)
    where T : IntoIterator<Item = u8>, {
        for k in keys.into_iter() {
            if pressed { self.key_bits |= k; }
            else { self.key_bits &= !k; }
        }
    }
}

impl DirectionInput for KeyBits {
    fn is_requested(&self, direction: Direction) -> bool {
        self.is_pressed(direction.key_bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut bits = KeyBits::default();
        bits.set_pressed([KB_NORTH, KB_WEST], true);
        assert!(bits.all_pressed([KB_NORTH, KB_WEST]));
        assert!(!bits.is_pressed(KB_EAST));

        bits.set_pressed([KB_NORTH], false);
        assert!(!bits.is_pressed(KB_NORTH));
        assert!(bits.any_pressed([KB_NORTH, KB_WEST]));
    }

    #[test]
    fn test_simultaneous_keys_resolve_by_precedence() {
        let mut bits = KeyBits::default();
        bits.set_pressed([KB_WEST, KB_SOUTH, KB_EAST], true);
        assert_eq!(Direction::requested(&bits), Some(Direction::East));
    }
}
