//! The sensor reader trait and the ordered reading mapping.

use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered mapping from sensor name to its current value.
///
/// One `Readings` is produced fresh per poll. Iteration order is the order in
/// which readings were parsed or discovered, so "the first key" is stable and
/// meaningful; pushing an existing name overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings(Vec<(String, f64)>);

impl Readings {
    /// Create an empty reading set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value, overwriting any earlier reading with the same name.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a reading by sensor name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// The first reading in parse order, if any.
    pub fn first(&self) -> Option<(&str, f64)> {
        self.0.first().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for Readings {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut readings = Readings::new();
        for (name, value) in iter {
            readings.push(name, value);
        }
        readings
    }
}

impl Serialize for Readings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Trait for polling a sensor source.
///
/// Implementations return typed errors so callers can tell a missing
/// capability from a missing tool or a malformed payload; the sampling loop
/// turns all of them into a skipped tick.
pub trait SensorReader {
    /// Human-readable source name, used in log messages.
    fn source(&self) -> &str;

    /// Poll the source once.
    fn read(&mut self) -> Result<Readings>;

    /// Poll the source, degrading any failure to an empty mapping.
    ///
    /// This is the soft contract for callers that only care whether data
    /// arrived: the failure is logged and an empty `Readings` returned.
    fn read_soft(&mut self) -> Readings {
        match self.read() {
            Ok(readings) => readings,
            Err(err) => {
                tracing::warn!("{} read failed: {}", self.source(), err);
                Readings::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_preserve_insertion_order() {
        let mut readings = Readings::new();
        readings.push("fan2", 1200.0);
        readings.push("fan1", 900.0);

        let names: Vec<&str> = readings.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["fan2", "fan1"]);
        assert_eq!(readings.first(), Some(("fan2", 1200.0)));
    }

    #[test]
    fn test_readings_push_overwrites_existing_name() {
        let mut readings = Readings::new();
        readings.push("fan1", 900.0);
        readings.push("fan1", 950.0);

        assert_eq!(readings.len(), 1);
        assert_eq!(readings.get("fan1"), Some(950.0));
    }

    #[test]
    fn test_readings_serialize_as_ordered_map() {
        let mut readings = Readings::new();
        readings.push("fan2", 1200.0);
        readings.push("fan1", 900.0);

        let json = serde_json::to_string(&readings).unwrap();
        assert_eq!(json, r#"{"fan2":1200.0,"fan1":900.0}"#);
    }
}
