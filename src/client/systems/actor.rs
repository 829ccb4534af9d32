use bevy::prelude::*;

use crate::{
    client::systems::{
        animator::{ActorSpatial, Animation},
        camera::{CameraSink, FollowCamera},
    },
    common::{
        components::{
            direction::Direction, keybits::*, movement_state::MovementState,
            Facing, Loc, MovementSpeed, Player,
        },
        resources::tiles::TileGrid,
        systems::movement::{self, Actor},
    },
};

/// Everything a controllable player needs, placed on `loc`'s floor.
pub fn bundle(loc: Loc, facing: Direction, speed: MovementSpeed, tiles: &TileGrid) -> impl Bundle {
    (
        Player,
        loc,
        Facing::new(facing),
        speed,
        KeyBits::default(),
        MovementState::default(),
        Animation::Idle(facing),
        Transform::from_translation(tiles.world(*loc)).with_rotation(facing.into()),
    )
}

pub fn update(
    time: Res<Time>,
    tiles: Res<TileGrid>,
    mut query: Query<(
        Entity,
        &KeyBits,
        &MovementSpeed,
        &mut Facing,
        &mut Loc,
        &mut MovementState,
        &mut Transform,
        &mut Animation,
    ), With<Player>>,
    mut camera: Query<&mut Transform, (With<FollowCamera>, Without<Player>)>,
) {
    let dt = time.delta_secs();
    let mut camera = camera.single_mut().ok();

    for (ent, keybits, &speed, mut facing, mut loc, mut state, mut transform, mut animation) in &mut query {
        let mut actor = Actor { facing: **facing, position: **loc, speed };
        let was_moving = state.is_moving();

        movement::tick(
            &mut state,
            &mut actor,
            Direction::requested(keybits),
            dt,
            &*tiles,
            &mut ActorSpatial { transform: &mut transform, animation: &mut animation },
            &mut CameraSink(camera.as_deref_mut()),
        );

        facing.set_if_neq(Facing::new(actor.facing));
        if loc.set_if_neq(Loc::new(actor.position)) {
            debug!("{ent} stepping into {:?}", actor.position);
        }
        if was_moving && !state.is_moving() {
            trace!("{ent} arrived at {:?}", actor.position);
        }
    }
}
