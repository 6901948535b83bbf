// board.rs - A Game of Life board with its own buffers and run scheduler

use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::diff::{self, CellChange};
use crate::error::BoardError;
use crate::grid::{ALIVE, Cell, DEAD, Grid};
use crate::observer::BoardObserver;
use crate::options::BoardOptions;
use crate::patterns::Pattern;
use crate::rules;
use crate::scheduler::{Action, CancelToken, FramePacer, GenerationScheduler, RunReport, RunState};
use crate::store::GridStore;

/// What happened during one host frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No run in progress; nothing was evaluated.
    Idle,
    /// One generation ran.
    Stepped {
        generation: u64,
        changes: Vec<CellChange>,
    },
    /// The run ended on this frame. No generation ran.
    Finished(RunReport),
}

/// One simulation instance.
///
/// Owns the current/staging buffers, a random source for random starts,
/// and a scheduler for bounded runs. Boards share nothing with each other.
pub struct Board {
    options: BoardOptions,
    store: GridStore,
    scheduler: GenerationScheduler,
    rng: Box<dyn RngCore + Send>,
    // Reset reseeds from options.seed only when the board chose its own rng
    owns_rng: bool,
    observer: Option<Box<dyn BoardObserver>>,
    generation: u64,
}

impl Board {
    /// Build a board. With `options.seed` the random source is seeded from
    /// it; otherwise it is seeded from the OS.
    pub fn new(options: BoardOptions) -> Result<Self, BoardError> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut board = Self::with_rng(options, rng)?;
        board.owns_rng = true;
        Ok(board)
    }

    /// Build a board drawing random starts from `rng`.
    ///
    /// `options.seed` is not applied to a caller-supplied rng: resets keep
    /// drawing from `rng`, so the caller controls reproducibility. Passing
    /// options with a seed to [`Board::reconfigure`] replaces it.
    pub fn with_rng<R: RngCore + Send + 'static>(options: BoardOptions, rng: R) -> Result<Self, BoardError> {
        let mut rng: Box<dyn RngCore + Send> = Box::new(rng);
        let store = GridStore::initialize(&options, &mut *rng)?;
        log::debug!(
            "board created: {}x{}, {} live",
            store.height(),
            store.width(),
            store.current().live_count()
        );
        Ok(Self {
            options,
            store,
            scheduler: GenerationScheduler::new(),
            rng,
            owns_rng: false,
            observer: None,
            generation: 0,
        })
    }

    /// Rebuild the grid from the current options. Same as [`Board::reset`].
    pub fn init(&mut self) -> Result<(), BoardError> {
        self.reset()
    }

    /// Rebuild the grid from the current options.
    ///
    /// A board built by [`Board::new`] with a seed reseeds first, so
    /// resetting reproduces the same start. Any run in flight is cancelled.
    /// On error the board is left as it was.
    pub fn reset(&mut self) -> Result<(), BoardError> {
        if let (true, Some(seed)) = (self.owns_rng, self.options.seed) {
            self.rng = Box::new(StdRng::seed_from_u64(seed));
        }
        let store = GridStore::initialize(&self.options, &mut *self.rng)?;
        self.install(store);
        Ok(())
    }

    /// Replace the options and rebuild. On error nothing changes.
    pub fn reconfigure(&mut self, options: BoardOptions) -> Result<(), BoardError> {
        let store = match options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                let store = GridStore::initialize(&options, &mut rng)?;
                self.rng = Box::new(rng);
                self.owns_rng = true;
                store
            }
            None => GridStore::initialize(&options, &mut *self.rng)?,
        };
        self.options = options;
        self.install(store);
        Ok(())
    }

    /// Clear the board and place `pattern` in the middle of it.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        let (height, width) = (self.height(), self.width());
        let mut grid = Grid::new(height, width);
        let (row, col) = pattern.centered_origin(height, width);
        let placed = pattern.stamp(&mut grid, row, col);
        if placed < pattern.cells.len() {
            log::warn!(
                "{} clipped to {}x{} board: {placed} of {} cells placed",
                pattern.name,
                height,
                width,
                pattern.cells.len()
            );
        }
        self.install(GridStore::new(grid));
    }

    fn install(&mut self, store: GridStore) {
        self.cancel();
        self.store = store;
        self.generation = 0;
        log::debug!(
            "board reset: {}x{}, {} live",
            self.store.height(),
            self.store.width(),
            self.store.current().live_count()
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.on_reset(self.store.current());
        }
    }

    /// Advance exactly one generation now and return the cells that changed.
    ///
    /// Refused while a run is in progress so manual steps never interleave
    /// with it.
    pub fn tick(&mut self) -> Result<Vec<CellChange>, BoardError> {
        if self.scheduler.is_running() {
            return Err(BoardError::AlreadyRunning);
        }
        Ok(self.advance())
    }

    fn advance(&mut self) -> Vec<CellChange> {
        rules::step(&mut self.store);
        self.generation += 1;
        // After the swap, staging holds the pre-tick grid.
        let changes = diff::changes(self.store.staging(), self.store.current());
        log::trace!("generation {}: {} cells changed", self.generation, changes.len());
        if let Some(observer) = self.observer.as_mut() {
            observer.on_tick(self.generation, &changes);
        }
        changes
    }

    /// Start a frame-paced run of `count` generations. Drive it by calling
    /// [`Board::poll_frame`] once per host frame.
    pub fn run_generations(&mut self, count: u32) -> Result<(), BoardError> {
        if let Err(err) = self.scheduler.start(count) {
            log::warn!("run of {count} generations refused: {err}");
            return Err(err);
        }
        log::debug!("run of {count} generations started");
        Ok(())
    }

    pub fn run_10_generations(&mut self) -> Result<(), BoardError> {
        self.run_generations(10)
    }

    pub fn run_100_generations(&mut self) -> Result<(), BoardError> {
        self.run_generations(100)
    }

    pub fn run_1000_generations(&mut self) -> Result<(), BoardError> {
        self.run_generations(1000)
    }

    /// One host frame: evaluate at most one generation of the current run.
    pub fn poll_frame(&mut self) -> FrameOutcome {
        match self.scheduler.next_action() {
            Action::Idle => FrameOutcome::Idle,
            Action::Step => {
                let changes = self.advance();
                self.scheduler.record_step();
                FrameOutcome::Stepped {
                    generation: self.generation,
                    changes,
                }
            }
            Action::Finished(report) => {
                self.report_run(&report);
                FrameOutcome::Finished(report)
            }
        }
    }

    /// Run `count` generations, awaiting `pacer` between each.
    pub async fn run_generations_paced<P: FramePacer>(
        &mut self,
        count: u32,
        pacer: &mut P,
    ) -> Result<RunReport, BoardError> {
        self.run_generations(count)?;
        loop {
            match self.poll_frame() {
                FrameOutcome::Stepped { .. } => pacer.next_frame().await,
                FrameOutcome::Finished(report) => return Ok(report),
                FrameOutcome::Idle => return Ok(self.settled_report()),
            }
        }
    }

    /// Run `count` generations back to back without yielding. For batch
    /// work and tests.
    pub fn run_generations_blocking(&mut self, count: u32) -> Result<RunReport, BoardError> {
        self.run_generations(count)?;
        loop {
            match self.poll_frame() {
                FrameOutcome::Stepped { .. } => {}
                FrameOutcome::Finished(report) => return Ok(report),
                FrameOutcome::Idle => return Ok(self.settled_report()),
            }
        }
    }

    /// Report of the run that just ended, for a driver that finds the
    /// board idle at a yield point.
    fn settled_report(&self) -> RunReport {
        self.scheduler.last_report().cloned().unwrap_or(RunReport {
            requested: self.max_steps(),
            generations: self.step_count(),
            elapsed: Duration::ZERO,
            cancelled: false,
        })
    }

    /// Stop the current run. Generations already evaluated stay.
    pub fn cancel(&mut self) -> Option<RunReport> {
        let report = self.scheduler.cancel()?;
        self.report_run(&report);
        Some(report)
    }

    /// A handle that stops the current run at its next yield point, usable
    /// while the run holds `&mut self`.
    pub fn cancel_token(&self) -> CancelToken {
        self.scheduler.cancel_token()
    }

    fn report_run(&mut self, report: &RunReport) {
        log::info!(
            "run {}: {}/{} generations in {:.3} ms",
            if report.cancelled { "cancelled" } else { "finished" },
            report.generations,
            report.requested,
            report.elapsed.as_secs_f64() * 1000.0
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.on_run_finished(report);
        }
    }

    pub fn set_observer<O: BoardObserver + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    pub fn state(&self) -> RunState {
        self.scheduler.state()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Generations evaluated by the current or most recent run.
    pub fn step_count(&self) -> u32 {
        self.scheduler.step_count()
    }

    pub fn max_steps(&self) -> u32 {
        self.scheduler.max_steps()
    }

    pub fn last_run(&self) -> Option<&RunReport> {
        self.scheduler.last_report()
    }

    /// Generations since the last reset, across ticks and runs.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        self.store.current()
    }

    pub fn height(&self) -> usize {
        self.store.height()
    }

    pub fn width(&self) -> usize {
        self.store.width()
    }

    pub fn live_count(&self) -> usize {
        self.store.current().live_count()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.store.cell(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        self.store.set_cell(row, col, value)
    }

    /// Flip one cell and return its new value.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let value = match self.cell(row, col) {
            Some(ALIVE) => DEAD,
            _ => ALIVE,
        };
        self.set_cell(row, col, value)?;
        Ok(value)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("height", &self.height())
            .field("width", &self.width())
            .field("generation", &self.generation)
            .field("state", &self.state())
            .field("step_count", &self.step_count())
            .field("max_steps", &self.max_steps())
            .finish_non_exhaustive()
    }
}
