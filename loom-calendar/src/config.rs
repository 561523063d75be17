//! Layout configuration.
//!
//! Values come from, in increasing precedence: defaults, a TOML file,
//! `LOOM_*` environment variables, and builder calls.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CalendarError, CalendarResult};

/// Environment variable overriding [`LayoutConfig::months_per_row`].
pub const ENV_MONTHS_PER_ROW: &str = "LOOM_MONTHS_PER_ROW";
/// Environment variable overriding [`LayoutConfig::separator`].
pub const ENV_SEPARATOR: &str = "LOOM_SEPARATOR";

/// How month blocks are arranged on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Months printed side by side in one band. Must be non-zero.
    pub months_per_row: usize,
    /// Text placed between adjacent month blocks on a line.
    pub separator: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            months_per_row: 4,
            separator: String::from(" "),
        }
    }
}

impl LayoutConfig {
    /// Starts a builder from the defaults.
    #[must_use]
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns [`CalendarError::ConfigFormat`] for malformed TOML or unknown
    /// keys, and [`CalendarError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> CalendarResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    /// As [`from_toml_str`](Self::from_toml_str), plus
    /// [`CalendarError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading layout configuration");
        Self::from_toml_str(&text)
    }

    /// Applies `LOOM_MONTHS_PER_ROW` and `LOOM_SEPARATOR` if set.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidConfig`] if `LOOM_MONTHS_PER_ROW` is
    /// not a positive integer.
    pub fn with_env_overrides(self) -> CalendarResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> CalendarResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MONTHS_PER_ROW) {
            self.months_per_row = raw.trim().parse().map_err(|_| {
                CalendarError::InvalidConfig(format!("{ENV_MONTHS_PER_ROW}={raw:?} is not a number"))
            })?;
        }
        if let Some(separator) = lookup(ENV_SEPARATOR) {
            self.separator = separator;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidConfig`] if `months_per_row` is 0.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.months_per_row == 0 {
            return Err(CalendarError::InvalidConfig(
                "months_per_row must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
}

impl LayoutConfigBuilder {
    /// Starts from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    #[must_use]
    pub fn from_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Sets the number of months per band.
    #[must_use]
    pub fn months_per_row(mut self, months: usize) -> Self {
        self.config.months_per_row = months;
        self
    }

    /// Sets the separator between side-by-side months.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidConfig`] for out-of-range values.
    pub fn build(self) -> CalendarResult<LayoutConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
