//! # Sensorscope - Hardware Sensor Sampling and Statistics
//!
//! A clean, minimalist Rust crate for polling hardware sensors (temperature
//! probes and fan tachometers) on Linux, collecting a short time series at a
//! fixed interval, and turning it into statistics, charts, and JSON dumps.
//!
//! ## Features
//!
//! - **Fan speed readings**: parsed from the `lm-sensors` `sensors` utility
//! - **Temperature readings**: via sysinfo with a sysfs thermal-zone fallback
//! - **Interval sampling**: tokio-timed series collection with soft-failing polls
//! - **Statistics**: population mean and standard deviation over a series
//! - **Charts**: line plot and histogram rendered to PNG files
//! - **JSON dumps**: pretty-printed recording sessions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sensorscope::{FanReader, Sampler, SamplerConfig, Statistics};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SamplerConfig::default().with_target(Some("fan1".into()));
//!     let series = Sampler::new(FanReader::new(), config).collect().await;
//!
//!     if let Some(stats) = Statistics::from_series(&series) {
//!         println!("mean {:.2} RPM, std dev {:.2} RPM", stats.mean, stats.std_dev);
//!     }
//! }
//! ```

use std::time::Duration;

pub mod error;
pub mod report;
pub mod sampling;
pub mod sensors;

// Re-export public API
pub use error::{Result, SensorError};
pub use report::{
    chart::{render_histogram, render_line_chart, LineStyle, TimeAxis},
    json::{persist, to_pretty_json, write_json},
};
pub use sampling::{
    config::SamplerConfig,
    sampler::Sampler,
    series::{RecordingSession, Sample, Series, TickRecord},
    stats::Statistics,
};
pub use sensors::{
    fan::{parse_rpm_output, FanReader},
    reader::{Readings, SensorReader},
    thermal::ThermalReader,
};

/// The default interval between two polls.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(2);

/// The default number of polls in a sampling run.
pub const DEFAULT_SAMPLE_COUNT: u32 = 10;

/// The default number of buckets in a value histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
