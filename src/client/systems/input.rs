use bevy::prelude::*;

use crate::{
    client::resources::KeyBindings,
    common::components::{direction::Direction, keybits::*, Player},
};

pub fn update_keybits(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut query: Query<&mut KeyBits, With<Player>>,
) {
    keyboard.get_just_pressed().for_each(|key| { trace!("key pressed: {:?}", key) });

    let mut key_bits = KeyBits::default();
    for direction in Direction::ALL {
        let held = keyboard.any_pressed(bindings.keys(direction).iter().copied());
        key_bits.set_pressed([direction.key_bit()], held);
    }

    for mut keybits0 in &mut query {
        keybits0.set_if_neq(key_bits);
    }
}
