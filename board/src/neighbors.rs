// neighbors.rs - Moore neighborhood counting with a dead border

use crate::grid::Grid;

#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the 8 neighbors of `(row, col)`.
///
/// Neighbors that fall off the grid count as dead; nothing wraps.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        // get() returns None past height/width
        if let Some(cell) = grid.get(nr, nc) {
            count += cell;
        }
    }
    count
}
