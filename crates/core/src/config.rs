//! Runtime geometry and timing settings.
//! Level rules stay fixed in `mapgen::progression`; only presentation-scale values live here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Millis;

pub const MIN_GRID_CELLS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: u32,
    pub world_height: u32,
    pub cell_size: u32,
    pub extra_paths: u32,
    pub view_radius: i32,
    pub reveal_window_ms: Millis,
    pub victory_delay_ms: Millis,
    pub roam_interval_ms: Millis,
    pub path_history_len: usize,
    pub quiz_input_cap: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 900,
            world_height: 600,
            cell_size: 25,
            extra_paths: 350,
            view_radius: 2,
            reveal_window_ms: 4000,
            victory_delay_ms: 2000,
            roam_interval_ms: 500,
            path_history_len: 32,
            quiz_input_cap: 120,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("grid of {rows}x{cols} cells is smaller than the 5x5 minimum")]
    GridTooSmall { rows: usize, cols: usize },
    #[error("`{0}` must be positive")]
    ZeroInterval(&'static str),
    #[error("path history must hold at least three positions")]
    HistoryTooShort,
    #[error("view radius must not be negative")]
    NegativeViewRadius,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    pub fn rows(&self) -> usize {
        (self.world_height / self.cell_size.max(1)) as usize
    }

    pub fn cols(&self) -> usize {
        (self.world_width / self.cell_size.max(1)) as usize
    }

    /// Parses a possibly partial JSON document; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let (rows, cols) = (self.rows(), self.cols());
        if rows < MIN_GRID_CELLS || cols < MIN_GRID_CELLS {
            return Err(ConfigError::GridTooSmall { rows, cols });
        }
        if self.reveal_window_ms == 0 {
            return Err(ConfigError::ZeroInterval("reveal_window_ms"));
        }
        if self.victory_delay_ms == 0 {
            return Err(ConfigError::ZeroInterval("victory_delay_ms"));
        }
        if self.roam_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("roam_interval_ms"));
        }
        // The escort trails two moves behind, so the history needs the current cell plus two.
        if self.path_history_len < 3 {
            return Err(ConfigError::HistoryTooShort);
        }
        if self.view_radius < 0 {
            return Err(ConfigError::NegativeViewRadius);
        }
        Ok(())
    }
}
