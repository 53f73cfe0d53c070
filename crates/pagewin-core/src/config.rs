//! Windowing configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::WindowError;
use crate::window::{DEFAULT_MAX_VISIBLE, MIN_VISIBLE_PAGES};

/// Number of items per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration shared by every windower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct WindowConfig {
    /// Items per page (per batch in incremental mode).
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Capacity of the page-number window before ellipses kick in.
    #[builder(default = "DEFAULT_MAX_VISIBLE")]
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn check(page_size: Option<usize>, max_visible: Option<usize>) -> Result<(), String> {
    if page_size == Some(0) {
        return Err("page size must be at least 1".to_string());
    }
    match max_visible {
        Some(max_visible) if max_visible < MIN_VISIBLE_PAGES => Err(format!(
            "max visible pages must be at least {MIN_VISIBLE_PAGES}, got {max_visible}"
        )),
        _ => Ok(()),
    }
}

impl WindowConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        check(self.page_size, self.max_visible)
    }
}

impl From<WindowConfigBuilderError> for WindowError {
    fn from(err: WindowConfigBuilderError) -> Self {
        WindowError::invalid_config(err.to_string())
    }
}

impl WindowConfig {
    /// Create a new config builder.
    pub fn builder() -> WindowConfigBuilder {
        WindowConfigBuilder::default()
    }

    /// Create a config with the given page size and the default window.
    pub fn new(page_size: usize) -> Result<Self, WindowError> {
        let config = Self {
            page_size,
            max_visible: DEFAULT_MAX_VISIBLE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate a config that did not come through the builder (e.g. one
    /// deserialized from a file).
    pub fn validate(&self) -> Result<(), WindowError> {
        check(Some(self.page_size), Some(self.max_visible)).map_err(WindowError::invalid_config)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}
