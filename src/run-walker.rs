use std::{path::PathBuf, str::FromStr, time::Duration};

use bevy::{
    input::InputPlugin,
    log::{Level, LogPlugin},
    prelude::*,
    time::TimeUpdateStrategy,
};
use clap::Parser;

use grid_stepper::{
    client::{
        plugins::locomotion::LocomotionPlugin,
        resources::KeyBindings,
        systems::actor,
    },
    common::{
        components::{direction::Direction, movement_state::MovementState, Loc, MovementSpeed, Player},
        resources::tiles::{Passability, TileGrid},
    },
};

const DEFAULT_MAP: &str = "
##########
#........#
#..###...#
#..#.....#
#..#.22..#
#....22..#
#........#
##########
";

// upper bound on simulated frames
const MAX_FRAMES: u32 = 100_000;

#[derive(Clone, Debug)]
struct Route(Vec<Option<Direction>>);

impl FromStr for Route {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'N' => Ok(Some(Direction::North)),
                'E' => Ok(Some(Direction::East)),
                'S' => Ok(Some(Direction::South)),
                'W' => Ok(Some(Direction::West)),
                '.' => Ok(None),
                other => Err(format!("unknown route step {other:?}, expected one of N E S W .")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Route)
    }
}

/// Walks a scripted route across a tile map without opening a window.
#[derive(Debug, Parser)]
#[command(name = "walker")]
struct Args {
    /// Movement speed in cells per second
    #[arg(long, default_value_t = 4.0)]
    speed: f32,

    /// Directions to hold in turn: N, E, S, W, or . to let go
    #[arg(long, default_value = "NNNEEE.SSSWWW")]
    route: Route,

    /// Seconds each route entry is held
    #[arg(long, default_value_t = 0.35)]
    hold: f32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Ascii tile map (`.` ground, `1`-`9` raised ground, `#` obstacle)
    #[arg(long)]
    map: Option<PathBuf>,

    #[arg(long, default_value = "debug")]
    log_level: Level,
}

#[derive(Resource)]
struct Script {
    route: Vec<Option<Direction>>,
    hold: f32,
    elapsed: f32,
    started: bool,
}

impl Script {
    fn current(&self) -> Option<Option<Direction>> {
        let index = (self.elapsed / self.hold) as usize;
        self.route.get(index).copied()
    }

    fn finished(&self) -> bool {
        self.current().is_none()
    }
}

fn drive(
    time: Res<Time>,
    bindings: Res<KeyBindings>,
    mut script: ResMut<Script>,
    mut keyboard: ResMut<ButtonInput<KeyCode>>,
) {
    let before = script.current();
    script.elapsed += time.delta_secs();
    let now = script.current();
    if before == now && script.started { return; }
    script.started = true;

    keyboard.release_all();
    if let Some(Some(direction)) = now {
        if let Some(&key) = bindings.keys(direction).first() {
            info!("holding {:?}", direction);
            keyboard.press(key);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let speed = MovementSpeed::new(args.speed)?;
    if !(args.hold.is_finite() && args.hold > 0.) {
        return Err(format!("--hold must be a positive number of seconds, got {}", args.hold).into());
    }
    if args.fps == 0 {
        return Err("--fps must be at least 1".into());
    }
    let tiles = match &args.map {
        Some(path) => TileGrid::load(path)?,
        None => TileGrid::parse(DEFAULT_MAP)?,
    };
    let Some((start, tile)) = tiles.iter().find(|(_, t)| matches!(t.passability, Passability::Level(_))) else {
        return Err("tile map has no walkable cell to start on".into());
    };
    let start = Loc::from_xyz(start.x, start.y, tile.elevation());

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        InputPlugin,
        LogPlugin {
            level: args.log_level,
            filter: "bevy=warn,grid_stepper=trace,walker=trace".to_owned(),
            ..default()
        },
        LocomotionPlugin,
    ));

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1. / args.fps as f64)));
    app.insert_resource(Script { route: args.route.0, hold: args.hold, elapsed: 0., started: false });
    app.add_systems(PreUpdate, drive);

    app.world_mut().spawn(actor::bundle(start, Direction::default(), speed, &tiles));
    app.insert_resource(tiles);

    info!("starting at {:?} with {} cells/s", *start, speed.get());

    app.finish();
    app.cleanup();

    let mut players = app.world_mut().query_filtered::<(&Loc, &MovementState), With<Player>>();
    for frame in 0..MAX_FRAMES {
        app.update();

        let settled = players.iter(app.world()).all(|(_, state)| !state.is_moving());
        if app.world().resource::<Script>().finished() && settled {
            info!("route finished after {} frames", frame + 1);
            break;
        }
    }

    for (loc, _) in players.iter(app.world()) {
        info!("player rests at {:?}", **loc);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parses_letters_and_pauses() {
        let route: Route = "n E . w".parse().unwrap();
        assert_eq!(route.0, vec![Some(Direction::North), Some(Direction::East), None, Some(Direction::West)]);
        assert!("NX".parse::<Route>().is_err());
    }

    #[test]
    fn test_script_runs_out_after_route() {
        let script = Script { route: vec![Some(Direction::North), None], hold: 0.5, elapsed: 0.7, started: true };
        assert_eq!(script.current(), Some(None));
        assert!(!script.finished());
        assert!(Script { elapsed: 1.0, ..script }.finished());
    }
}
