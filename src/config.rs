use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ranker::SortMode;

pub const CONFIG_PATH_ENV: &str = "BOOKREVIEWS_CONFIG";
pub const RATING_MIN_ENV: &str = "BOOKREVIEWS_RATING_MIN";
pub const RATING_MAX_ENV: &str = "BOOKREVIEWS_RATING_MAX";
const DEFAULT_CONFIG_PATH: &str = "bookreviews.toml";

/// Inclusive range a review rating must fall in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for RatingBounds {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl RatingBounds {
    pub fn contains(&self, rating: u8) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// Crate configuration.
///
/// Resolution order: built-in defaults, then the TOML file named by
/// `BOOKREVIEWS_CONFIG` (or `./bookreviews.toml` if present), then the
/// `BOOKREVIEWS_RATING_*` environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ratings: RatingBounds,
    /// Ordering applied when a page query carries no sort parameter.
    /// `None` keeps creation order.
    pub default_sort: Option<SortMode>,
}

impl Config {
    /// Loads configuration from the process environment and optional TOML file.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let p = Path::new(&path);
        let base = if p.exists() {
            Self::load_from(p)?
        } else {
            tracing::info!(path = %path, "No TOML config found; using defaults/env");
            Self::default()
        };
        base.overlay_env(|key| std::env::var(key).ok())
    }

    /// Reads and validates a TOML config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded TOML config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides through `lookup`, which maps a variable
    /// name to its value.
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(min) = parse_env(&lookup, RATING_MIN_ENV)? {
            self.ratings.min = min;
        }
        if let Some(max) = parse_env(&lookup, RATING_MAX_ENV)? {
            self.ratings.max = max;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ratings.min > self.ratings.max {
            return Err(Error::Config(format!(
                "rating minimum {} exceeds maximum {}",
                self.ratings.min, self.ratings.max
            )));
        }
        Ok(())
    }
}

fn parse_env<F>(lookup: &F, key: &str) -> Result<Option<u8>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<u8>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{}={:?}: {}", key, v, e))),
    }
}
