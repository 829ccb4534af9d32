use bevy::prelude::*;

use crate::client::{
    resources::KeyBindings,
    systems::{actor, camera, input},
};

/// Keyboard driven grid locomotion for `Player` entities.
///
/// Expects a `TileGrid` resource and `ButtonInput<KeyCode>` (from `InputPlugin`).
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>();

        // players spawned during Startup are in place by now
        app.add_systems(PostStartup, camera::setup);

        app.add_systems(Update, (
            input::update_keybits,
            actor::update,
        ).chain());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use xyz::Xyz;

    use super::*;
    use crate::{
        client::systems::camera::FollowCamera,
        common::{
            components::{direction::Direction, Loc, MovementSpeed},
            resources::tiles::TileGrid,
        },
    };

    #[test]
    fn test_plugin_walks_player_from_keyboard() {
        let mut app = App::new();
        app.add_plugins(LocomotionPlugin);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<Time>();

        let tiles = TileGrid::parse("....\n....\n....").unwrap();
        let player = app.world_mut()
            .spawn(actor::bundle(Loc::from_xyz(0, 0, 0), Direction::South, MovementSpeed::new(5.).unwrap(), &tiles))
            .id();
        app.insert_resource(tiles);

        app.update();
        let mut cameras = app.world_mut().query_filtered::<Entity, With<FollowCamera>>();
        assert_eq!(cameras.iter(app.world()).count(), 1, "Camera is spawned once at startup");

        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyD);
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(100));
        app.update();

        assert_eq!(**app.world().get::<Loc>(player).unwrap(), Xyz::new(1, 0, 0));
        assert_eq!(cameras.iter(app.world()).count(), 1);
    }
}
