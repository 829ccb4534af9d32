use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use xyz::{Convert, Grid, Xyz};

use crate::common::error::Error;

/// Vertical world units per level of elevation.
pub const RISE: f32 = 0.5;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Passability {
    /// Walkable surface at the given elevation.
    Level(i16),
    Obstacle,
}

impl Passability {
    pub fn elevation(&self) -> i16 {
        match self {
            Passability::Level(elevation) => *elevation,
            Passability::Obstacle => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tile {
    pub passability: Passability,
}

impl Tile {
    pub const OBSTACLE: Tile = Tile { passability: Passability::Obstacle };

    pub fn level(elevation: i16) -> Self {
        Tile { passability: Passability::Level(elevation) }
    }

    pub fn elevation(&self) -> i16 {
        self.passability.elevation()
    }

    /// A step between two tiles is allowed only across the same surface.
    pub fn compatible(&self, other: &Tile) -> bool {
        self.passability == other.passability
    }
}

/// Read access to the active area's tiles.
///
/// `None` means (x, y) is outside the area. Callers treat that as impassable.
pub trait TileLookup {
    fn tile_at(&self, x: i16, y: i16) -> Option<Tile>;
}

#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Resource, Serialize)]
pub struct TileGrid(Grid<Tile>);

impl TileGrid {
    /// Parses an ascii map, first line northmost.
    ///
    /// `.` is level ground, `1`..`9` raised ground at that level and `#` an
    /// obstacle. Surrounding blank lines are ignored.
    pub fn parse(ascii: &str) -> Result<Self, Error> {
        let lines: Vec<&str> = ascii.lines().map(str::trim_end).collect();
        let start = lines.iter().position(|l| !l.trim().is_empty()).ok_or(Error::EmptyMap)?;
        let end = lines.iter().rposition(|l| !l.trim().is_empty()).ok_or(Error::EmptyMap)?;

        let mut rows = Vec::with_capacity(end - start + 1);
        for (row, line) in lines[start..=end].iter().enumerate() {
            let tiles = line.chars().enumerate()
                .map(|(column, glyph)| match glyph {
                    '.' => Ok(Tile::level(0)),
                    '#' => Ok(Tile::OBSTACLE),
                    '1'..='9' => Ok(Tile::level(glyph.to_digit(10).unwrap_or_default() as i16)),
                    _ => Err(Error::UnknownTile { glyph, row, column }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(tiles);
        }

        let expected = rows[0].len();
        if let Some((row, tiles)) = rows.iter().enumerate().find(|(_, tiles)| tiles.len() != expected) {
            return Err(Error::RaggedRow { row, expected, found: tiles.len() });
        }
        if expected > i16::MAX as usize || rows.len() > i16::MAX as usize {
            return Err(Error::MapTooLarge);
        }

        Grid::from_rows(rows, RISE).map(Self).ok_or(Error::EmptyMap)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// World-space position of a cell's floor.
    pub fn world(&self, xyz: Xyz) -> Vec3 {
        self.0.convert(xyz)
    }
}

impl TileLookup for TileGrid {
    fn tile_at(&self, x: i16, y: i16) -> Option<Tile> {
        self.0.get(x, y).copied()
    }
}
