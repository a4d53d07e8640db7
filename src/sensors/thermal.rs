//! Temperature readings via sysinfo with a sysfs thermal-zone fallback.

use crate::error::{Result, SensorError};
use crate::sensors::reader::{Readings, SensorReader};
use std::fs;
use sysinfo::Components;

/// Reads temperature sensors through the platform capability.
///
/// sysinfo's component list covers most machines; on stripped-down systems
/// (containers, some SBC kernels) it can come back empty even though thermal
/// zones exist, so the reader falls back to scanning
/// `/sys/class/thermal/thermal_zone*` directly.
pub struct ThermalReader {
    components: Components,
}

impl ThermalReader {
    /// Create a reader with a refreshed component list.
    pub fn new() -> Self {
        Self {
            components: Components::new_with_refreshed_list(),
        }
    }

    /// Read thermal zones directly from sysfs.
    fn read_thermal_zones(&self) -> Readings {
        let mut readings = Readings::new();

        for i in 0..10 {
            let zone = format!("/sys/class/thermal/thermal_zone{}", i);
            let temp = match fs::read_to_string(format!("{}/temp", zone)) {
                Ok(raw) => match raw.trim().parse::<i32>() {
                    Ok(millicelsius) => millicelsius as f64 / 1000.0,
                    Err(_) => continue,
                },
                Err(_) => continue,
            };

            let name = fs::read_to_string(format!("{}/type", zone))
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| format!("zone{}", i));

            readings.push(name, temp);
        }

        readings
    }
}

impl Default for ThermalReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorReader for ThermalReader {
    fn source(&self) -> &str {
        "temperatures"
    }

    fn read(&mut self) -> Result<Readings> {
        self.components.refresh();

        let mut readings = Readings::new();
        for (i, component) in self.components.iter().enumerate() {
            let label = component.label().trim();
            let name = if label.is_empty() {
                format!("sensor{}", i)
            } else {
                label.to_string()
            };
            readings.push(name, component.temperature() as f64);
        }

        if readings.is_empty() {
            readings = self.read_thermal_zones();
        }

        if readings.is_empty() {
            return Err(SensorError::unavailable(
                "no temperature sensors detected on this device",
            ));
        }

        Ok(readings)
    }
}
