// grid.rs - Grid type for the bounded Game of Life board
//
// Cells are stored row-major: (row, col) lives at row * width + col.
// row runs down (y), col runs across (x). Every other module uses the same
// convention, including diffs handed to renderers.

use std::fmt;

use crate::error::{BoardError, ConfigError};

// Dimension bounds applied to auto-derived boards
pub const MIN_HEIGHT: usize = 10;
pub const MAX_HEIGHT: usize = 768;
pub const MIN_WIDTH: usize = 10;
pub const MAX_WIDTH: usize = 1024;
pub const DEFAULT_HEIGHT: usize = 100;
pub const DEFAULT_WIDTH: usize = 100;

pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// Clamp a requested height into `[MIN_HEIGHT, MAX_HEIGHT]`.
pub fn clamp_height(requested: i64) -> usize {
    requested.clamp(MIN_HEIGHT as i64, MAX_HEIGHT as i64) as usize
}

/// Clamp a requested width into `[MIN_WIDTH, MAX_WIDTH]`.
pub fn clamp_width(requested: i64) -> usize {
    requested.clamp(MIN_WIDTH as i64, MAX_WIDTH as i64) as usize
}

/// A fixed-size rectangle of binary cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![DEAD; height * width],
        }
    }

    /// Wrap an already row-major buffer. `cells.len()` must equal `height * width`.
    pub(crate) fn from_flat(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self { height, width, cells }
    }

    /// Build a grid from explicit rows.
    ///
    /// Dimensions come from the rows themselves. Empty input, rows of
    /// unequal length, and values other than 0/1 are rejected; nothing is
    /// padded or truncated.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyCells);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ConfigError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > ALIVE {
                    return Err(ConfigError::InvalidCellValue { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self::from_flat(height, width, cells))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.height == other.height && self.width == other.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at `(row, col)`, or `None` off the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(ALIVE)
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        if value > ALIVE {
            return Err(BoardError::InvalidCellValue(value));
        }
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Unchecked-by-contract write used by the rule engine, which only
    /// visits in-range coordinates.
    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Set every cell dead, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == ALIVE)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell == ALIVE { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_dimensions_into_range() {
        assert_eq!(clamp_height(-5), MIN_HEIGHT);
        assert_eq!(clamp_height(3), MIN_HEIGHT);
        assert_eq!(clamp_height(500), 500);
        assert_eq!(clamp_height(10_000), MAX_HEIGHT);
        assert_eq!(clamp_width(9), MIN_WIDTH);
        assert_eq!(clamp_width(1024), MAX_WIDTH);
        assert_eq!(clamp_width(2048), MAX_WIDTH);
    }

    #[test]
    fn from_rows_takes_dimensions_from_seed() {
        let grid = Grid::from_rows(&[vec![0u8, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 1), Some(ALIVE));
        assert_eq!(grid.get(1, 2), Some(DEAD));
        assert_eq!(grid.live_count(), 3);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn from_rows_rejects_empty_seed() {
        let none: [Vec<Cell>; 0] = [];
        assert_eq!(Grid::from_rows(&none), Err(ConfigError::EmptyCells));
        assert_eq!(Grid::from_rows(&[Vec::<Cell>::new()]), Err(ConfigError::EmptyCells));
    }

    #[test]
    fn from_rows_rejects_ragged_seed() {
        let err = Grid::from_rows(&[vec![0u8, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_non_binary_values() {
        let err = Grid::from_rows(&[[0u8, 2], [0, 0]]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCellValue { row: 0, col: 1, value: 2 });
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut grid = Grid::new(3, 4);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert!(grid.set(2, 3, ALIVE).is_ok());
        assert!(grid.is_alive(2, 3));
        assert_eq!(
            grid.set(3, 0, ALIVE),
            Err(BoardError::OutOfBounds {
                row: 3,
                col: 0,
                height: 3,
                width: 4
            })
        );
        assert_eq!(grid.set(0, 0, 7), Err(BoardError::InvalidCellValue(7)));
    }

    #[test]
    fn live_cells_are_row_major() {
        let grid = Grid::from_rows(&[[1u8, 0, 1], [0, 1, 0]]).unwrap();
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn display_draws_rows() {
        let grid = Grid::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(grid.to_string(), "#.\n.#\n");
    }
}
