use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::square::{Square, SQUARE_COUNT};
use crate::search::SearchLimits;

/// Start squares searched when nothing else is configured: indices `0..13` (a1 through e2).
pub const DEFAULT_STARTS: StartRange = StartRange { first: 0, end: 13 };

/// Half-open range of start-square indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartRange {
    pub first: u8,
    pub end: u8,
}

impl StartRange {
    pub const ALL: StartRange = StartRange {
        first: 0,
        end: SQUARE_COUNT as u8,
    };

    pub fn new(first: u8, end: u8) -> Self {
        Self { first, end }
    }

    pub fn single(sq: Square) -> Self {
        let i = u8::from(sq);
        Self {
            first: i,
            end: i + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.first) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Squares in ascending order. Indices past the board are skipped; call
    /// [`TourConfig::validate`] to reject such ranges up front.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        (self.first..self.end).filter_map(Square::new)
    }
}

impl Default for StartRange {
    fn default() -> Self {
        DEFAULT_STARTS
    }
}

/// Driver configuration (pure Rust, optionally loaded from JSON).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub starts: StartRange,
    pub limits: SearchLimits,
    /// Search independent start squares on the rayon pool.
    pub parallel: bool,
    /// Collect up to this many tours per start square instead of stopping at the first.
    pub enumerate: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid start range {first}..{end} (must be a non-empty range within 0..=64)")]
    InvalidStartRange { first: u8, end: u8 },
    #[error("enumerate must be at least 1")]
    ZeroEnumerate,
}

impl TourConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let StartRange { first, end } = self.starts;
        if self.starts.is_empty() || end as usize > SQUARE_COUNT {
            return Err(ConfigError::InvalidStartRange { first, end });
        }
        if self.enumerate == Some(0) {
            return Err(ConfigError::ZeroEnumerate);
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(bytes: &[u8], origin: &Path) -> Result<Self, ConfigError> {
        let cfg: TourConfig = serde_json::from_slice(bytes).map_err(|source| ConfigError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&bytes, path)
    }
}
