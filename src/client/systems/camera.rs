use bevy::prelude::*;

use crate::common::{
    components::{Loc, Player},
    resources::tiles::TileGrid,
    systems::movement::CameraRig,
};

/// Camera distance behind (south of) the player and height above it
const CAMERA_DISTANCE: f32 = 8.0;
const CAMERA_HEIGHT: f32 = 12.0;

/// Camera that tracks the player by replaying its translation.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct FollowCamera;

/// Forwards step translations to the follow camera, if there is one.
pub struct CameraSink<'a>(pub Option<&'a mut Transform>);

impl CameraRig for CameraSink<'_> {
    fn translate(&mut self, delta: Vec3) {
        if let Some(transform) = &mut self.0 {
            transform.translation += delta;
        }
    }
}

/// Transform looking down at `focus` from the follow offset.
pub fn looking_at(focus: Vec3) -> Transform {
    Transform::from_translation(focus + Vec3::new(0., -CAMERA_DISTANCE, CAMERA_HEIGHT))
        .looking_at(focus, Vec3::Z)
}

pub fn setup(
    mut commands: Commands,
    tiles: Res<TileGrid>,
    actor: Query<&Loc, With<Player>>,
) {
    let focus = match actor.single() {
        Ok(loc) => tiles.world(**loc),
        Err(_) => {
            warn!("no single player to follow, camera starts at the origin");
            Vec3::ZERO
        }
    };
    commands.spawn((FollowCamera, looking_at(focus)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_moves_camera() {
        let mut transform = looking_at(Vec3::ZERO);
        let start = transform.translation;
        CameraSink(Some(&mut transform)).translate(Vec3::Y);
        assert_eq!(transform.translation, start + Vec3::Y);
    }

    #[test]
    fn test_sink_without_camera_is_noop() {
        CameraSink(None).translate(Vec3::X);
    }

    #[test]
    fn test_setup_spawns_camera_over_player() {
        let mut app = App::new();
        app.insert_resource(TileGrid::parse("...\n...\n...").unwrap());
        app.world_mut().spawn((Player, Loc::from_xyz(2, 1, 0)));
        app.add_systems(Startup, setup);
        app.update();

        let mut cameras = app.world_mut().query_filtered::<&Transform, With<FollowCamera>>();
        let transforms: Vec<Transform> = cameras.iter(app.world()).copied().collect();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0], looking_at(Vec3::new(2., 1., 0.)));
    }
}
