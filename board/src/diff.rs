// diff.rs - Cell changes between two generations, for renderers

use crate::grid::{Cell, Grid};

/// One cell whose value changed across a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Every cell that differs between `before` and `after`, row-major, with
/// its value in `after`. Both grids must have the same shape.
pub fn changes(before: &Grid, after: &Grid) -> Vec<CellChange> {
    debug_assert!(before.same_shape(after));
    let width = after.width();
    before
        .as_slice()
        .iter()
        .zip(after.as_slice())
        .enumerate()
        .filter(|(_, (old, new))| old != new)
        .map(|(idx, (_, &value))| CellChange {
            row: idx / width,
            col: idx % width,
            value,
        })
        .collect()
}
