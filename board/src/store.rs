// store.rs - Double buffer owned by a board

use rand::Rng;

use crate::error::{BoardError, ConfigError};
use crate::grid::{self, Cell, Grid};
use crate::options::BoardOptions;
use crate::random;

/// The `current` grid plus an equally-sized `staging` grid the rule engine
/// writes the next generation into.
#[derive(Debug, Clone)]
pub struct GridStore {
    current: Grid,
    staging: Grid,
}

impl GridStore {
    /// Wrap a starting grid, allocating a dead staging buffer of the same shape.
    pub fn new(current: Grid) -> Self {
        let staging = Grid::new(current.height(), current.width());
        Self { current, staging }
    }

    /// Build the starting grid from options.
    ///
    /// Explicit `cells` win and are taken as-is (validated, never clamped).
    /// Otherwise height and width are clamped and the grid is filled by
    /// [`random::build`] with the configured live ratio.
    pub fn initialize<R: Rng + ?Sized>(options: &BoardOptions, rng: &mut R) -> Result<Self, ConfigError> {
        if let Some(cells) = options.cells.as_deref() {
            return Grid::from_rows(cells).map(Self::new);
        }

        let ratio = options.live_ratio()?;
        let height = grid::clamp_height(options.requested_height());
        let width = grid::clamp_width(options.requested_width());
        Ok(Self::new(random::build(height, width, ratio, rng)))
    }

    /// Exchange current and staging. No cell data moves.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.staging);
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn staging(&self) -> &Grid {
        &self.staging
    }

    /// Both buffers at once: current for reading, staging for writing.
    pub(crate) fn split_mut(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.staging)
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.current.get(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        self.current.set(row, col, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ALIVE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn staging_matches_current_shape() {
        let store = GridStore::new(Grid::new(12, 30));
        assert!(store.current().same_shape(store.staging()));
        assert_eq!(store.staging().live_count(), 0);
    }

    #[test]
    fn double_swap_restores_roles() {
        let mut current = Grid::new(10, 10);
        current.set(4, 5, ALIVE).unwrap();
        let mut store = GridStore::new(current.clone());

        store.swap();
        assert_eq!(store.staging(), &current);
        assert_eq!(store.current().live_count(), 0);

        store.swap();
        assert_eq!(store.current(), &current);
    }

    #[test]
    fn initialize_prefers_explicit_cells() {
        let options = BoardOptions {
            cells: Some(vec![vec![1, 0, 0], vec![0, 1, 0]]),
            height: Some(500),
            width: Some(500),
            ratio: Some(1.0),
            ..BoardOptions::default()
        };
        let store = GridStore::initialize(&options, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!((store.height(), store.width()), (2, 3));
        assert_eq!(store.current().live_count(), 2);
    }

    #[test]
    fn initialize_clamps_derived_dimensions() {
        let options = BoardOptions {
            height: Some(2),
            width: Some(5000),
            ..BoardOptions::default()
        };
        let store = GridStore::initialize(&options, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!((store.height(), store.width()), (grid::MIN_HEIGHT, grid::MAX_WIDTH));
        assert_eq!(store.current().live_count(), 0);
    }

    #[test]
    fn initialize_rejects_bad_ratio() {
        let options = BoardOptions {
            ratio: Some(1.5),
            ..BoardOptions::default()
        };
        let err = GridStore::initialize(&options, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRatio(1.5));
    }

    #[test]
    fn cell_accessors_target_current() {
        let mut store = GridStore::new(Grid::new(10, 10));
        store.set_cell(9, 9, ALIVE).unwrap();
        assert_eq!(store.cell(9, 9), Some(ALIVE));
        assert_eq!(store.staging().get(9, 9), Some(0));
        assert!(store.set_cell(10, 0, ALIVE).is_err());
    }
}
