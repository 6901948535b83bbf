// scheduler.rs - Bounded generation runs, paced by the host
//
// A run is a count of generations. Between generations control goes back
// to the host: either the host calls Board::poll_frame once per frame, or
// Board::run_generations_paced awaits a FramePacer. Each board owns its
// own scheduler; nothing here is global.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::time::{Interval, MissedTickBehavior};

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Outcome of a finished or cancelled run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Generations asked for.
    pub requested: u32,
    /// Generations actually evaluated.
    pub generations: u32,
    /// Wall time from start to finish.
    pub elapsed: Duration,
    pub cancelled: bool,
}

/// Shared flag that stops a run at its next yield point.
///
/// Clones share the flag, so a token handed to another task or thread can
/// stop a run that currently holds `&mut Board`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// What the scheduler wants done at a yield point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    /// No run in progress.
    Idle,
    /// Evaluate one generation, then call `record_step`.
    Step,
    /// The run just ended (completed or cancelled).
    Finished(RunReport),
}

#[derive(Debug, Default)]
pub struct GenerationScheduler {
    state: RunState,
    step_count: u32,
    max_steps: u32,
    started_at: Option<Instant>,
    cancel: CancelToken,
    last_report: Option<RunReport>,
}

impl GenerationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn last_report(&self) -> Option<&RunReport> {
        self.last_report.as_ref()
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Begin a run of `count` generations.
    ///
    /// Fails while another run is in flight. A cancellation requested
    /// while idle is discarded.
    pub fn start(&mut self, count: u32) -> Result<(), BoardError> {
        if self.is_running() {
            return Err(BoardError::AlreadyRunning);
        }
        self.cancel.clear();
        self.step_count = 0;
        self.max_steps = count;
        self.started_at = Some(Instant::now());
        self.state = RunState::Running;
        Ok(())
    }

    /// Decide the next move at a yield point.
    pub(crate) fn next_action(&mut self) -> Action {
        if !self.is_running() {
            return Action::Idle;
        }
        if self.cancel.is_cancelled() {
            return Action::Finished(self.finish(true));
        }
        if self.step_count == self.max_steps {
            return Action::Finished(self.finish(false));
        }
        Action::Step
    }

    pub(crate) fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Stop the current run without evaluating the rest. `None` when idle.
    pub fn cancel(&mut self) -> Option<RunReport> {
        self.is_running().then(|| self.finish(true))
    }

    fn finish(&mut self, cancelled: bool) -> RunReport {
        let elapsed = self.started_at.take().map_or(Duration::ZERO, |t0| t0.elapsed());
        self.state = RunState::Idle;
        self.cancel.clear();
        let report = RunReport {
            requested: self.max_steps,
            generations: self.step_count,
            elapsed,
            cancelled,
        };
        self.last_report = Some(report.clone());
        report
    }
}

/// Hands control back to the host between generations.
pub trait FramePacer {
    /// Resolve when the next generation may run.
    fn next_frame(&mut self) -> impl Future<Output = ()>;
}

/// Yield to the tokio scheduler once per generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldPacer;

impl FramePacer for YieldPacer {
    async fn next_frame(&mut self) {
        tokio::task::yield_now().await;
    }
}

/// At most one generation per tick of a fixed-period timer.
#[derive(Debug)]
pub struct IntervalPacer {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalPacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    pub fn per_second(frames: u32) -> Self {
        Self::new(Duration::from_secs(1) / frames.max(1))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FramePacer for IntervalPacer {
    async fn next_frame(&mut self) {
        // Created lazily: tokio timers need a runtime context. The first
        // tick is one period out so the first frame waits like the rest.
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;
    }
}
