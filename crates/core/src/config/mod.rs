pub mod constants;

use crate::error::{NavError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// What to do when the chosen neighbor is not in the candidate list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNeighborPolicy {
    /// Fail with `NavError::InvalidNeighbor`
    #[default]
    Reject,
    /// Treat the first list entry as the neighbor (legacy behavior)
    InsertAtFront,
}

/// Orderer configuration, loadable from a JSON file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrdererConfig {
    pub missing_neighbor: MissingNeighborPolicy,
    /// Locale used for sentinel labels
    pub locale: String,
    /// Optional message override file
    pub messages: Option<PathBuf>,
}

impl Default for OrdererConfig {
    fn default() -> Self {
        Self {
            missing_neighbor: MissingNeighborPolicy::default(),
            locale: constants::DEFAULT_LOCALE.to_string(),
            messages: None,
        }
    }
}

impl OrdererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_neighbor(mut self, policy: MissingNeighborPolicy) -> Self {
        self.missing_neighbor = policy;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn messages(mut self, path: Option<PathBuf>) -> Self {
        self.messages = path;
        self
    }

    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(NavError::invalid_config("locale must not be empty"));
        }
        Ok(())
    }
}
