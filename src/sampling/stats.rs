//! Summary statistics over a collected series.

use crate::sampling::series::Series;
use serde::Serialize;

/// Summary statistics for a series of sensor values.
///
/// Mean and standard deviation use the population formulas (divide by `n`,
/// not `n - 1`), matching what a fixed-count measurement run reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of finite values summarized
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Population mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl Statistics {
    /// Compute statistics over raw values, filtering out non-finite entries.
    ///
    /// Returns `None` when no finite values remain; callers must guard with
    /// this before reporting, there is no division by zero to reach.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let count = finite.len();
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Compute statistics over the values of a series.
    pub fn from_series(series: &Series) -> Option<Self> {
        Self::from_values(&series.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::series::Sample;

    #[test]
    fn test_population_mean_and_std_dev() {
        let stats = Statistics::from_values(&[100.0, 200.0, 300.0]).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        // population std dev of [100, 200, 300] = sqrt(20000/3)
        assert!((stats.std_dev - 81.649_658_092_772_6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(Statistics::from_values(&[]).is_none());
        assert!(Statistics::from_series(&Series::new()).is_none());
    }

    #[test]
    fn test_non_finite_values_are_filtered() {
        let stats = Statistics::from_values(&[f64::NAN, 10.0, f64::INFINITY, 20.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 15.0);
    }

    #[test]
    fn test_from_series_matches_fixture() {
        let series: Series = vec![
            Sample::new(0.0, 100.0),
            Sample::new(2.0, 200.0),
            Sample::new(4.0, 300.0),
        ]
        .into_iter()
        .collect();

        let stats = Statistics::from_series(&series).unwrap();
        assert_eq!(stats.mean, 200.0);
        assert!((stats.std_dev - 81.65).abs() < 0.01);
    }

    #[test]
    fn test_constant_series_has_zero_std_dev() {
        let stats = Statistics::from_values(&[42.0, 42.0, 42.0, 42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
