//! Paging configuration
//!
//! Defaults applied to listing requests and the page-size selector.
//! Loaded from YAML; every field is optional.
//!
//! ```yaml
//! default_limit: 25
//! page_sizes: [25, 50, 100]
//! reset_offset_on_limit_change: true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page sizes offered by the limiter when nothing else is configured
pub const DEFAULT_PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];

/// Page size sent with a listing request when the URL carries none
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset sent with a listing request when the URL carries none
pub const DEFAULT_OFFSET: u64 = 0;

/// Paging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Default `limit` request parameter
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Default `offset` request parameter
    #[serde(default)]
    pub default_offset: u64,

    /// Selectable page sizes, in display order
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<u64>,

    /// Reset `offset` to 0 when the limiter builds a page-size URL.
    /// Off by default: only `limit` is overwritten.
    #[serde(default)]
    pub reset_offset_on_limit_change: bool,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_page_sizes() -> Vec<u64> {
    DEFAULT_PAGE_SIZES.to_vec()
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_offset: DEFAULT_OFFSET,
            page_sizes: default_page_sizes(),
            reset_offset_on_limit_change: false,
        }
    }
}

impl PagingConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the pager relies on
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(Error::invalid_config(
                "default_limit",
                "must be greater than zero",
            ));
        }
        if self.page_sizes.is_empty() {
            return Err(Error::invalid_config("page_sizes", "must not be empty"));
        }
        if self.page_sizes.contains(&0) {
            return Err(Error::invalid_config(
                "page_sizes",
                "page sizes must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Set the default limit
    #[must_use]
    pub fn with_default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the page-size catalog
    #[must_use]
    pub fn with_page_sizes(mut self, sizes: impl Into<Vec<u64>>) -> Self {
        self.page_sizes = sizes.into();
        self
    }

    /// Enable or disable resetting the offset on page-size changes
    #[must_use]
    pub fn with_offset_reset(mut self, reset: bool) -> Self {
        self.reset_offset_on_limit_change = reset;
        self
    }
}
