//! Fan speed readings from the `lm-sensors` `sensors` utility.

use crate::error::{Result, SensorError};
use crate::sensors::reader::{Readings, SensorReader};
use std::io::ErrorKind;
use std::process::Command;

/// Marker token identifying fan tachometer lines in `sensors` output.
const RPM_MARKER: &str = "RPM";

/// Reads fan speeds by invoking the `sensors` diagnostic command and parsing
/// its text output.
pub struct FanReader {
    command: String,
}

impl FanReader {
    /// Create a reader that invokes the system `sensors` utility.
    pub fn new() -> Self {
        Self::with_command("sensors")
    }

    /// Create a reader that invokes a different executable.
    ///
    /// Used by tests to exercise the missing-tool path without touching the
    /// real utility.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for FanReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorReader for FanReader {
    fn source(&self) -> &str {
        "fan speeds"
    }

    fn read(&mut self) -> Result<Readings> {
        let output = match Command::new(&self.command).output() {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SensorError::tool_missing(format!(
                    "`{}` is not installed; install it with: sudo apt install lm-sensors",
                    self.command
                )));
            }
            Err(err) => return Err(err.into()),
        };

        if !output.status.success() {
            return Err(SensorError::unavailable(format!(
                "`{}` exited with {}",
                self.command, output.status
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(parse_rpm_output(&text))
    }
}

/// Parse fan tachometer lines out of `sensors` output.
///
/// Lines containing the `RPM` marker are split on whitespace; the first token
/// minus any trailing colon is the fan name and the second token is the
/// integer speed. Lines that do not match are skipped, so zero fans is a
/// valid (empty) result rather than an error.
pub fn parse_rpm_output(text: &str) -> Readings {
    let mut readings = Readings::new();

    for line in text.lines() {
        if !line.contains(RPM_MARKER) {
            continue;
        }

        let mut parts = line.split_whitespace();
        let name = match parts.next() {
            Some(token) => token.trim_end_matches(':'),
            None => continue,
        };
        let value = match parts.next().and_then(|token| token.parse::<i64>().ok()) {
            Some(rpm) => rpm as f64,
            None => continue,
        };

        if !name.is_empty() {
            readings.push(name, value);
        }
    }

    readings
}
