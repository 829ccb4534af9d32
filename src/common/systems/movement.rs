//! Step-wise Grid Locomotion
//!
//! Turns a held cardinal direction into one-cell steps:
//!
//! ```text
//!  IDLE ──hold ≥ MOVEMENT_START_DELAY, tiles compatible──▶ STEPPING
//!   ▲                                                        │
//!   └──────────── progress reached step duration ───────────┘
//! ```
//!
//! The grid position jumps to the destination cell the moment a step commits;
//! the visual translation then catches up over `1 / speed` seconds, sliced
//! per tick so that the slices of one step always sum to one cell regardless
//! of how the frame time is divided.
//!
//! Nothing here touches the ECS. `tick` takes the actor state and the three
//! collaborators explicitly; `client::systems::actor::update` adapts them to
//! components.

use bevy::math::Vec3;
use log::{debug, trace};
use xyz::Xyz;

use crate::common::{
    components::{direction::Direction, movement_state::MovementState, MovementSpeed},
    resources::tiles::TileLookup,
};

/// Seconds a direction must be held before a step commits.
pub const MOVEMENT_START_DELAY: f32 = 0.1;

/// Receives the orientation, animation and position updates of one actor.
pub trait Spatial {
    fn orient(&mut self, direction: Direction);
    fn play_animation(&mut self, direction: Direction);
    fn idle(&mut self, direction: Direction);
    fn translate(&mut self, delta: Vec3);
}

/// Receives the same translation as the actor so the view follows it.
pub trait CameraRig {
    fn translate(&mut self, delta: Vec3);
}

/// Actor state the controller reads and writes once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub facing: Direction,
    pub position: Xyz,
    pub speed: MovementSpeed,
}

/// Advance the controller by `dt` seconds.
///
/// Notifications are emitted synchronously. Within a tick every orientation or
/// animation notification precedes the translation for that tick.
///
/// # Arguments
/// * `requested` - Direction resolved from input this tick, if any
/// * `dt` - Seconds since the previous tick; negative or NaN counts as 0
pub fn tick(
    state: &mut MovementState,
    actor: &mut Actor,
    requested: Option<Direction>,
    dt: f32,
    tiles: &impl TileLookup,
    spatial: &mut impl Spatial,
    camera: &mut impl CameraRig,
) {
    let dt = dt.max(0.);

    if !state.moving {
        hold(state, actor, requested, dt, tiles, spatial);
    }

    // a step committed above also gets this tick's first slice
    if state.moving {
        advance(state, actor, requested, dt, spatial, camera);
    }
}

fn hold(
    state: &mut MovementState,
    actor: &mut Actor,
    requested: Option<Direction>,
    dt: f32,
    tiles: &impl TileLookup,
    spatial: &mut impl Spatial,
) {
    let Some(direction) = requested else {
        state.start_delay = 0.;
        return;
    };

    // a new hold, or a different key while still debouncing
    if state.start_delay == 0. || direction != actor.facing {
        state.start_delay = 0.;
        actor.facing = direction;
        spatial.orient(direction);
    }

    state.start_delay += dt;
    if state.start_delay < MOVEMENT_START_DELAY { return; }

    let here = actor.position;
    let Some(Xyz { x, y, .. }) = here.checked_step(direction.offset()) else {
        trace!("step {direction:?} from {here:?} blocked by coordinate range");
        return;
    };

    // blocked holds keep the delay past threshold and retry every tick
    match (tiles.tile_at(here.x, here.y), tiles.tile_at(x, y)) {
        (Some(from), Some(to)) if from.compatible(&to) => {
            state.moving = true;
            state.start_delay = 0.;
            spatial.play_animation(actor.facing);
            actor.position = Xyz { x, y, z: to.elevation() };
            debug!("step {direction:?} committed {here:?} -> {:?}", actor.position);
        }
        (Some(_), Some(_)) => trace!("step {direction:?} from {here:?} blocked by terrain"),
        _ => trace!("step {direction:?} from {here:?} blocked by area bounds"),
    }
}

fn advance(
    state: &mut MovementState,
    actor: &mut Actor,
    requested: Option<Direction>,
    dt: f32,
    spatial: &mut impl Spatial,
    camera: &mut impl CameraRig,
) {
    let duration = actor.speed.step_duration();

    if state.progress >= duration {
        state.moving = false;
        state.progress = 0.;
        spatial.idle(actor.facing);
        debug!("step completed at {:?}", actor.position);
        return;
    }

    // never slide past the destination cell
    let remaining = duration - state.progress;
    let delta = if dt >= remaining {
        state.progress = duration;
        remaining
    } else {
        state.progress += dt;
        dt
    };

    let translation = actor.facing.vector() * (delta * actor.speed.get());

    // chain into the next step without waiting out the debounce again
    if state.progress >= duration {
        if let Some(next) = requested {
            state.start_delay = MOVEMENT_START_DELAY;
            actor.facing = next;
            spatial.orient(next);
        }
    }

    spatial.translate(translation);
    camera.translate(translation);
}
