//! Sensor access and reading collections.
//!
//! This module provides the readers that turn platform sensor sources into
//! name/value mappings: fan tachometers via the external `sensors` utility
//! and temperature probes via sysinfo with a sysfs fallback.

pub mod fan;
pub mod reader;
pub mod thermal;

// Re-export commonly used items
pub use fan::FanReader;
pub use reader::{Readings, SensorReader};
pub use thermal::ThermalReader;
