// options.rs - Board construction config

use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::{Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// How to build a board. Every field is optional.
///
/// `cells` overrides everything else. Without it, `height` and `width`
/// (default 100, a zero counts as unset) are clamped into range and
/// `ratio` (default 0) of the cells are placed alive at random.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardOptions {
    pub cells: Option<Vec<Vec<Cell>>>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub ratio: Option<f64>,
    /// Seed for the board's random source. Unset means seeded from the OS.
    pub seed: Option<u64>,
}

impl BoardOptions {
    /// Random board of the given size and live ratio.
    pub fn random(height: i64, width: i64, ratio: f64) -> Self {
        Self {
            height: Some(height),
            width: Some(width),
            ratio: Some(ratio),
            ..Self::default()
        }
    }

    /// Board seeded from explicit rows.
    pub fn with_cells(cells: Vec<Vec<Cell>>) -> Self {
        Self {
            cells: Some(cells),
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn requested_height(&self) -> i64 {
        match self.height {
            Some(0) | None => DEFAULT_HEIGHT as i64,
            Some(h) => h,
        }
    }

    pub(crate) fn requested_width(&self) -> i64 {
        match self.width {
            Some(0) | None => DEFAULT_WIDTH as i64,
            Some(w) => w,
        }
    }

    /// The live ratio, validated into `[0, 1]`.
    pub fn live_ratio(&self) -> Result<f64, ConfigError> {
        let ratio = self.ratio.unwrap_or(0.0);
        if (0.0..=1.0).contains(&ratio) {
            Ok(ratio)
        } else {
            Err(ConfigError::InvalidRatio(ratio))
        }
    }
}
