// observer.rs - Hooks for renderers and run telemetry

use crate::diff::CellChange;
use crate::grid::Grid;
use crate::scheduler::RunReport;

/// Receives board events. Every method defaults to doing nothing.
pub trait BoardObserver: Send {
    /// The board was (re)built; `grid` is the full starting state.
    fn on_reset(&mut self, _grid: &Grid) {}

    /// One generation ran. `changes` lists every cell that flipped.
    fn on_tick(&mut self, _generation: u64, _changes: &[CellChange]) {}

    /// A run finished or was cancelled.
    fn on_run_finished(&mut self, _report: &RunReport) {}
}
