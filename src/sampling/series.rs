//! Data structures for collected samples.

use crate::sensors::reader::Readings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful poll of a single tracked sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds elapsed since the start of the run (a multiple of the interval)
    pub elapsed: f64,
    /// The sensor value at that tick
    pub value: f64,
}

impl Sample {
    pub fn new(elapsed: f64, value: f64) -> Self {
        Self { elapsed, value }
    }
}

/// An ordered sequence of samples produced by one sampling run.
///
/// The length equals the number of successful polls; failed polls are
/// skipped, never recorded as zero, so elapsed-time gaps may be non-uniform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Sample>);

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.0.push(sample);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.0.iter()
    }

    /// The sensor values in collection order.
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|sample| sample.value).collect()
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One successful poll of the full sensor mapping.
#[derive(Debug, Clone, Serialize)]
pub struct TickRecord {
    /// Seconds elapsed since the start of the run
    pub elapsed: f64,
    /// Everything the reader returned at that tick
    pub readings: Readings,
}

/// A full-mapping recording run, as serialized to the JSON dump.
#[derive(Debug, Clone, Serialize)]
pub struct RecordingSession {
    /// When the run started
    pub recorded_at: DateTime<Utc>,
    /// Configured interval between polls, in seconds
    pub interval_secs: f64,
    /// Successful ticks in collection order
    pub ticks: Vec<TickRecord>,
}

impl RecordingSession {
    /// Create a session stamped with the current time.
    pub fn new(interval_secs: f64, ticks: Vec<TickRecord>) -> Self {
        Self {
            recorded_at: Utc::now(),
            interval_secs,
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_serializes_as_plain_array() {
        let series: Series = vec![Sample::new(0.0, 100.0), Sample::new(2.0, 200.0)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"elapsed":0.0,"value":100.0},{"elapsed":2.0,"value":200.0}]"#);

        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_series_values_in_order() {
        let series = Series::from(vec![Sample::new(0.0, 3.0), Sample::new(2.0, 1.0)]);
        assert_eq!(series.values(), vec![3.0, 1.0]);
    }
}
