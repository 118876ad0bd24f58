//! Descriptive statistics over couplet counts.
//!
//! The reporting side of the toolkit: given the ordered couplet counts
//! for a whole corpus, compute the summary statistics (mean, median,
//! min, max, sample standard deviation) and the value-frequency
//! distribution. All types here are pure data; rendering belongs to
//! the binaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GhazalError;
use crate::Result;

/// One measured ghazal: file name plus couplet count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Source file name
    pub name: String,
    /// Couplets in the file
    pub couplets: u64,
}

impl Measurement {
    pub fn new(name: impl Into<String>, couplets: u64) -> Self {
        Self {
            name: name.into(),
            couplets,
        }
    }
}

/// Summary statistics over a corpus of couplet counts.
///
/// The sample standard deviation uses Bessel's correction (N−1), so a
/// summary requires at least two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of measurements
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (midpoint of the two central values for even counts)
    pub median: f64,
    /// Smallest value
    pub min: u64,
    /// Largest value
    pub max: u64,
    /// Sample standard deviation
    pub stdev: f64,
}

impl Summary {
    /// Compute summary statistics over `values`.
    ///
    /// Fails with [`GhazalError::TooFewMeasurements`] when fewer than
    /// two values are given; the sample standard deviation is
    /// undefined for a single data point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghazallib::Summary;
    ///
    /// let summary = Summary::from_values(&[4, 4, 6, 8]).unwrap();
    /// assert_eq!(summary.count, 4);
    /// assert_eq!(summary.median, 5.0);
    /// assert!((summary.stdev - 1.91).abs() < 0.005);
    /// ```
    pub fn from_values(values: &[u64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(GhazalError::TooFewMeasurements {
                statistic: "sample standard deviation",
                needed: 2,
                got: values.len(),
            });
        }

        let count = values.len();
        let n = count as f64;

        let sum: u64 = values.iter().sum();
        let mean = sum as f64 / n;

        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / (n - 1.0);

        let mut min = values[0];
        let mut max = values[0];
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }

        Ok(Self {
            count,
            mean,
            median: median(values),
            min,
            max,
            stdev: variance.sqrt(),
        })
    }
}

/// Median of `values`; the mean of the two central values when the
/// count is even.
fn median(values: &[u64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// Frequency distribution of couplet counts.
///
/// Maps each distinct value to the number of ghazals with that count;
/// iteration is in ascending value order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution(BTreeMap<u64, usize>);

impl Distribution {
    /// Tally `values` into a distribution.
    pub fn from_values(values: &[u64]) -> Self {
        let mut map = BTreeMap::new();
        for &v in values {
            *map.entry(v).or_insert(0) += 1;
        }
        Self(map)
    }

    /// Iterate `(value, frequency)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.0.iter().map(|(&v, &n)| (v, n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Frequency of one value (zero if absent).
    pub fn frequency(&self, value: u64) -> usize {
        self.0.get(&value).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_over_reference_values() {
        let summary = Summary::from_values(&[4, 4, 6, 8]).unwrap();

        assert_eq!(summary.count, 4);
        assert!((summary.mean - 5.5).abs() < 1e-9);
        assert!((summary.median - 5.0).abs() < 1e-9);
        assert_eq!(summary.min, 4);
        assert_eq!(summary.max, 8);
        // sample stdev of [4, 4, 6, 8] = sqrt(11/3) ≈ 1.9149
        assert!((summary.stdev - 1.9149).abs() < 1e-4);
        assert_eq!(format!("{:.2}", summary.stdev), "1.91");
    }

    #[test]
    fn summary_formats_match_report_precision() {
        let summary = Summary::from_values(&[4, 4, 6, 8]).unwrap();
        assert_eq!(format!("{:.2}", summary.mean), "5.50");
        assert_eq!(format!("{:.2}", summary.median), "5.00");
    }

    #[test]
    fn single_value_is_rejected() {
        let err = Summary::from_values(&[7]).unwrap_err();
        assert!(matches!(
            err,
            GhazalError::TooFewMeasurements {
                needed: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(Summary::from_values(&[]).is_err());
    }

    #[test]
    fn median_of_odd_count_is_central_value() {
        assert!((median(&[9, 1, 5]) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn median_of_even_count_averages_central_values() {
        assert!((median(&[1, 2, 3, 10]) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn two_identical_values_have_zero_stdev() {
        let summary = Summary::from_values(&[5, 5]).unwrap();
        assert_eq!(summary.stdev, 0.0);
        assert_eq!(summary.min, 5);
        assert_eq!(summary.max, 5);
    }

    #[test]
    fn distribution_tallies_in_ascending_order() {
        let dist = Distribution::from_values(&[8, 4, 6, 4]);

        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(pairs, [(4, 2), (6, 1), (8, 1)]);
        assert_eq!(dist.frequency(4), 2);
        assert_eq!(dist.frequency(5), 0);
    }

    #[test]
    fn empty_distribution() {
        let dist = Distribution::from_values(&[]);
        assert!(dist.is_empty());
    }
}
