use bevy::prelude::*;

use crate::common::{
    components::direction::Direction,
    systems::movement::Spatial,
};

/// Clip the renderer should be playing for an actor.
#[derive(Clone, Component, Copy, Debug, PartialEq)]
pub enum Animation {
    Idle(Direction),
    Walk(Direction),
}

impl Default for Animation {
    fn default() -> Self {
        Animation::Idle(Direction::default())
    }
}

/// Presents controller output on an actor's transform and animation.
pub struct ActorSpatial<'a> {
    pub transform: &'a mut Transform,
    pub animation: &'a mut Animation,
}

impl Spatial for ActorSpatial<'_> {
    fn orient(&mut self, direction: Direction) {
        self.transform.rotation = direction.into();
    }

    fn play_animation(&mut self, direction: Direction) {
        trace!("walk {:?}", direction);
        *self.animation = Animation::Walk(direction);
    }

    fn idle(&mut self, direction: Direction) {
        trace!("idle {:?}", direction);
        *self.animation = Animation::Idle(direction);
    }

    fn translate(&mut self, delta: Vec3) {
        self.transform.translation += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_drives_transform_and_animation() {
        let mut transform = Transform::default();
        let mut animation = Animation::default();
        let mut spatial = ActorSpatial { transform: &mut transform, animation: &mut animation };

        spatial.orient(Direction::West);
        spatial.play_animation(Direction::West);
        spatial.translate(Vec3::new(-0.25, 0., 0.));
        spatial.translate(Vec3::new(-0.25, 0., 0.));

        assert_eq!(animation, Animation::Walk(Direction::West));
        assert_eq!(transform.translation, Vec3::new(-0.5, 0., 0.));
        assert!((transform.rotation * Vec3::Y).distance(Vec3::NEG_X) < 1e-5);
    }

    #[test]
    fn test_idle_keeps_position() {
        let mut transform = Transform::from_xyz(3., 4., 0.);
        let mut animation = Animation::Walk(Direction::North);
        ActorSpatial { transform: &mut transform, animation: &mut animation }.idle(Direction::North);

        assert_eq!(animation, Animation::Idle(Direction::North));
        assert_eq!(transform.translation, Vec3::new(3., 4., 0.));
    }
}
