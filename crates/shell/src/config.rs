//! Shell configuration, read from the environment.

use core::num::NonZeroUsize;

use lootpack_inventory::DEFAULT_CAPACITY;
use lootpack_observability::LogFormat;

use crate::error::{ShellError, ShellResult};

pub const CAPACITY_VAR: &str = "LOOTPACK_CAPACITY";
pub const CLEAR_SCREEN_VAR: &str = "LOOTPACK_CLEAR_SCREEN";
pub const LOG_FORMAT_VAR: &str = "LOOTPACK_LOG_FORMAT";

/// Shell session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Number of backpack slots.
    pub capacity: NonZeroUsize,
    /// Clear the terminal before the banner.
    pub clear_screen: bool,
    /// Format of the log lines written to stderr.
    pub log_format: LogFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            clear_screen: true,
            log_format: LogFormat::default(),
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by `LOOTPACK_*` environment variables.
    pub fn from_env() -> ShellResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ShellResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            let capacity = raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|e| ShellError::config(CAPACITY_VAR, &raw, e))?;
            config = config.with_capacity(capacity);
        }

        if let Some(raw) = lookup(CLEAR_SCREEN_VAR) {
            let clear = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ShellError::config(
                        CLEAR_SCREEN_VAR,
                        &raw,
                        "expected true or false",
                    ));
                }
            };
            config = config.with_clear_screen(clear);
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            let format = raw
                .parse::<LogFormat>()
                .map_err(|e| ShellError::config(LOG_FORMAT_VAR, &raw, e))?;
            config = config.with_log_format(format);
        }

        Ok(config)
    }

    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }
}
