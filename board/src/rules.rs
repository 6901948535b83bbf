// rules.rs - B3/S23 transition applied across the double buffer

use crate::grid::{ALIVE, Cell, DEAD};
use crate::neighbors::count_live_neighbors;
use crate::store::GridStore;

/// Next state of one cell given its current state and live-neighbor count.
#[inline]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current == ALIVE, live_neighbors) {
        (true, 2) | (true, 3) => ALIVE, // Survival
        (false, 3)            => ALIVE, // Birth
        _                     => DEAD,  // Death or stays dead
    }
}

/// Advance `store` by one generation.
///
/// Staging is cleared, filled from current in row-major order, then
/// swapped in. Reads only ever touch current, so visiting order does not
/// matter.
pub fn step(store: &mut GridStore) {
    let (current, staging) = store.split_mut();
    staging.clear();

    for row in 0..current.height() {
        for col in 0..current.width() {
            let alive = current.get(row, col).unwrap_or(DEAD);
            let neighbors = count_live_neighbors(current, row, col);
            if next_state(alive, neighbors) == ALIVE {
                staging.put(row, col, ALIVE);
            }
        }
    }

    store.swap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn store_from(rows: &[&[Cell]]) -> GridStore {
        GridStore::new(Grid::from_rows(rows).unwrap())
    }

    #[test]
    fn transition_table() {
        for n in 0..=8 {
            let survives = if n == 2 || n == 3 { ALIVE } else { DEAD };
            let born = if n == 3 { ALIVE } else { DEAD };
            assert_eq!(next_state(ALIVE, n), survives, "alive with {n}");
            assert_eq!(next_state(DEAD, n), born, "dead with {n}");
        }
    }

    #[test]
    fn all_dead_stays_dead() {
        let mut store = GridStore::new(Grid::new(10, 10));
        step(&mut store);
        assert_eq!(store.current().live_count(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let mut store = store_from(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        let before = store.current().clone();
        step(&mut store);
        assert_eq!(store.current(), &before);
    }

    #[test]
    fn blinker_oscillates() {
        let mut store = store_from(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        step(&mut store);
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
        step(&mut store);
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn corner_block_survives_against_dead_border() {
        let mut store = store_from(&[
            &[1, 1, 0],
            &[1, 1, 0],
            &[0, 0, 0],
        ]);
        step(&mut store);
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn staging_never_leaks_stale_cells() {
        // Fill staging with garbage by stepping a full grid once, then step a
        // grid where nothing can be born.
        let mut store = GridStore::new(Grid::from_rows(&vec![vec![ALIVE; 6]; 6]).unwrap());
        step(&mut store);
        // Staging now holds the old all-alive grid.
        assert_eq!(store.staging().live_count(), 36);

        // Current is the four surviving corners; swap them for one isolated cell.
        for (row, col) in [(0, 0), (0, 5), (5, 0), (5, 5)] {
            store.set_cell(row, col, DEAD).unwrap();
        }
        store.set_cell(3, 3, ALIVE).unwrap();
        step(&mut store);
        assert_eq!(store.current().live_count(), 0);
    }

    #[test]
    fn after_step_staging_holds_previous_generation() {
        let mut store = store_from(&[
            &[0, 1, 0],
            &[0, 1, 0],
            &[0, 1, 0],
        ]);
        let before = store.current().clone();
        step(&mut store);
        assert_eq!(store.staging(), &before);
    }
}
