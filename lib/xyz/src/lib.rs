mod xyz;
mod grid;

pub use xyz::{Xyz, DIRECTIONS};
pub use grid::{Grid, Convert};
