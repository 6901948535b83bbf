// random.rs - Exact-count random starting grids

use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{ALIVE, DEAD, Grid};

/// Number of live cells a `height x width` grid gets at `ratio`.
pub fn live_target(height: usize, width: usize, ratio: f64) -> usize {
    let total = height * width;
    ((total as f64 * ratio).floor() as usize).min(total)
}

/// Build a grid with exactly `floor(height * width * ratio)` live cells.
///
/// The first `live` slots of a flat buffer are set alive, the buffer is
/// shuffled uniformly with `rng`, and the result is read back row-major.
/// A ratio below `1 / (height * width)` yields an all-dead grid.
pub fn build<R: Rng + ?Sized>(height: usize, width: usize, ratio: f64, rng: &mut R) -> Grid {
    let total = height * width;
    let live = live_target(height, width, ratio);

    let mut cells = vec![DEAD; total];
    cells[..live].fill(ALIVE);
    cells.shuffle(rng);

    Grid::from_flat(height, width, cells)
}
