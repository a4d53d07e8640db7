//! Sampling run configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a sampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Time between two polls
    pub interval: Duration,
    /// Number of polls in the run
    pub count: u32,
    /// Sensor name to track; `None` binds to the first key observed
    pub target: Option<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: crate::DEFAULT_SAMPLE_INTERVAL,
            count: crate::DEFAULT_SAMPLE_COUNT,
            target: None,
        }
    }
}

impl SamplerConfig {
    /// Create a configuration with a custom interval and count.
    pub fn new(interval: Duration, count: u32) -> Self {
        Self {
            interval,
            count,
            ..Default::default()
        }
    }

    /// Set the interval between polls.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the number of polls.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the sensor to track, or `None` for first-observed.
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }
}
