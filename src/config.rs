//! Configuration for inistore
//!
//! Centralized configuration with sensible defaults.

use crate::error::{IniError, Result};

/// Default ceiling for a single input (196 KiB)
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 0x0003_0000;

/// Main configuration for an inistore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Read Configuration
    // -------------------------------------------------------------------------
    /// Largest input accepted by the parser (in bytes). Anything bigger is
    /// rejected before a single byte is scanned.
    pub max_input_size: u64,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// How an existing resource is treated when writing
    pub write_mode: WriteMode,

    /// fsync the resource after writing
    pub sync_on_write: bool,
}

/// What happens to existing content when a store is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the previous content
    Truncate,

    /// Keep the previous content and add the rendered text after it
    Append,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            write_mode: WriteMode::Truncate,
            sync_on_write: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the input size ceiling (in bytes)
    pub fn max_input_size(mut self, size: u64) -> Self {
        self.config.max_input_size = size;
        self
    }

    /// Set the write mode
    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.config.write_mode = mode;
        self
    }

    /// Enable or disable fsync after writes
    pub fn sync_on_write(mut self, sync: bool) -> Self {
        self.config.sync_on_write = sync;
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.config.max_input_size == 0 {
            return Err(IniError::Config(
                "max_input_size must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
