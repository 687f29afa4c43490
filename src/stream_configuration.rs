//! Configuration types for pullstream pipelines

use crate::error::{StreamError, StreamResult};
use serde::{Deserialize, Serialize};

/// Settings attached to a [`Stream`](crate::Stream) and carried forward by
/// every operator built on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Label used in log output
    pub name: String,
    /// Capacity of channels created by [`channel_with`](crate::channel_with)
    pub channel_capacity: usize,
    /// Log every pulled element position at trace level
    pub trace_pulls: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "stream".to_string(),
            channel_capacity: 64,
            trace_pulls: false,
        }
    }
}

impl StreamConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline name used in log output
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the channel capacity
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Enable or disable per-element trace logging
    pub fn trace_pulls(mut self, enabled: bool) -> Self {
        self.trace_pulls = enabled;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> StreamResult<()> {
        if self.channel_capacity == 0 {
            return Err(StreamError::InvalidConfiguration(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }
        if self.name.is_empty() {
            return Err(StreamError::InvalidConfiguration(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        let config: StreamConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
