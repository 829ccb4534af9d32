//! # Grid: Dense Square Tile Storage with World Space Conversion
//!
//! A `Grid` stores exactly one value per cell of a fixed `width x height`
//! rectangle, row-major, and converts cell coordinates (`Xyz`) into world
//! space (`Vec3`).
//!
//! World space keeps the grid on the XY plane: one cell is one world unit,
//! `x` grows east, `y` grows north and elevation (`Xyz::z`) is scaled by the
//! grid's `rise` onto world `z`.
//!
//! ## Example
//!
//! ```rust
//! use xyz::{Convert, Grid, Xyz};
//! use glam::Vec3;
//!
//! let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]], 0.5).unwrap();
//! assert_eq!(grid.get(0, 1), Some(&1));
//! assert_eq!(grid.get(2, 1), None);
//!
//! let world: Vec3 = grid.convert(Xyz::new(2, 1, 2));
//! assert_eq!(world, Vec3::new(2., 1., 1.));
//! ```

use glam::Vec3;
use derive_more::*;
use serde::{Deserialize, Serialize};

use crate::xyz::Xyz;

/// Trait for coordinate conversion
pub trait Convert<T,U> {
    /// Convert from type T to type U
    fn convert(&self, it: T) -> U;
}

/// A rectangular tile grid
///
/// Lookups never panic: anything outside `0..width` x `0..height` is `None`.
#[derive(Clone, Debug, Deserialize, IntoIterator, PartialEq, Serialize)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    rise: f32,
    #[into_iterator(owned, ref)]
    cells: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { width: 0, height: 0, rise: 1., cells: Vec::new() }
    }
}

impl<T> Grid<T>
where T : Clone {
    pub fn new(width: u16, height: u16, rise: f32, fill: T) -> Self {
        Self { width, height, rise, cells: vec![fill; width as usize * height as usize] }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from rows listed north to south, so the first row
    /// becomes `y = height - 1`. Returns `None` for empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>, rise: f32) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) { return None; }
        let width16 = u16::try_from(width).ok()?;
        let height16 = u16::try_from(height).ok()?;

        let mut cells = Vec::with_capacity(width * height);
        for row in rows.into_iter().rev() {
            cells.extend(row);
        }
        Some(Self { width: width16, height: height16, rise, cells })
    }

    pub fn width(&self) -> u16 { self.width }
    pub fn height(&self) -> u16 { self.height }
    pub fn rise(&self) -> f32 { self.rise }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: i16, y: i16) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Cells in row-major order, south row first.
    pub fn iter(&self) -> impl Iterator<Item = (Xyz, &T)> {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, obj)| {
            (Xyz { x: (i % width) as i16, y: (i / width) as i16, z: 0 }, obj)
        })
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 { return None; }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width as usize || y >= self.height as usize { return None; }
        Some(y * self.width as usize + x)
    }
}

impl<T> Convert<Xyz,Vec3> for Grid<T> {
    fn convert(&self, other: Xyz) -> Vec3 {
        Vec3 { x: other.x as f32, y: other.y as f32, z: other.z as f32 * self.rise }
    }
}
