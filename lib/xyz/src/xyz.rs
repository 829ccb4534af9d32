use serde::{Deserialize, Serialize};

// x grows east, y grows north
pub const DIRECTIONS: [Xyz; 4] = [
        Xyz { x: 0, y: 1, z: 0 },  // north
        Xyz { x: 1, y: 0, z: 0 },  // east
        Xyz { x: 0, y: -1, z: 0 }, // south
        Xyz { x: -1, y: 0, z: 0 }, // west
];

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Xyz {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Xyz {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Cell reached by moving `offset` across the plane, keeping elevation.
    /// `None` when either axis would leave the `i16` range.
    pub fn checked_step(&self, offset: Xyz) -> Option<Xyz> {
        Some(Xyz {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
            z: self.z,
        })
    }
}
