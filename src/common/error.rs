use thiserror::Error;

/// Errors raised while configuring an actor or loading a tile grid.
///
/// Nothing in here is produced per frame: a blocked or out-of-bounds step is
/// not an error, the controller simply refuses it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("movement speed must be a finite number of cells per second above zero, got {0}")]
    InvalidSpeed(f32),

    #[error("tile map has no rows")]
    EmptyMap,

    #[error("tile map row {row} is {found} cells wide, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown tile glyph {glyph:?} at row {row}, column {column}")]
    UnknownTile { glyph: char, row: usize, column: usize },

    #[error("tile map is larger than {max}x{max} cells", max = i16::MAX)]
    MapTooLarge,

    #[error("failed to read tile map: {0}")]
    MapIo(#[from] std::io::Error),
}
