//! Error types for life_board.

use thiserror::Error;

/// A construction config the board refuses to build from.
///
/// Explicit seed cells are never repaired or clamped; only the
/// auto-derived `height`/`width` options are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `cells` was given but has no rows, or its first row is empty.
    #[error("seed grid is empty")]
    EmptyCells,

    /// A seed row differs in length from the first row.
    #[error("ragged seed grid: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A seed cell holds something other than 0 or 1.
    #[error("seed cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCellValue {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },

    /// `ratio` outside `[0, 1]`, or NaN.
    #[error("live ratio {0} is outside [0, 1]")]
    InvalidRatio(f64),
}

/// Errors returned by [`crate::Board`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    /// The board could not be (re)built from its options.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A run is already in flight on this board.
    #[error("a generation run is already in progress")]
    AlreadyRunning,

    /// Coordinates outside the grid.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
    },

    /// Attempt to store something other than 0 or 1 in a cell.
    #[error("cell value {0} is not 0 or 1")]
    InvalidCellValue(u8),
}
