//! Conway's Game of Life on a bounded, non-wrapping grid.
//!
//! A [`Board`] owns a current and a staging buffer and advances them one
//! generation at a time with the standard B3/S23 rule. Off-grid neighbors
//! are always dead. Runs of many generations are paced by the host: call
//! [`Board::poll_frame`] once per frame, await
//! [`Board::run_generations_paced`] with a [`FramePacer`], or use
//! [`Board::run_generations_blocking`] for batch work.
//!
//! ```
//! use life_board::{Board, BoardOptions};
//!
//! let mut board = Board::new(BoardOptions::random(64, 64, 0.25).seeded(1)).unwrap();
//! let report = board.run_generations_blocking(10).unwrap();
//! assert_eq!(report.generations, 10);
//! assert_eq!(board.step_count(), 10);
//! ```

mod board;
pub mod diff;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod observer;
pub mod options;
pub mod patterns;
pub mod random;
pub mod rules;
pub mod scheduler;
pub mod store;

pub use board::{Board, FrameOutcome};
pub use diff::CellChange;
pub use error::{BoardError, ConfigError};
pub use grid::{ALIVE, Cell, DEAD, Grid};
pub use observer::BoardObserver;
pub use options::BoardOptions;
pub use patterns::Pattern;
pub use scheduler::{CancelToken, FramePacer, IntervalPacer, RunReport, RunState, YieldPacer};
