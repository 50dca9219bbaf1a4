//! Aggregate statistics over a full scan of real valued samples.
//!
//! Non finite values are not filtered: an infinite or NaN sample
//! shows up in every statistic it contributes to.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic mean, 0.0 when there is nothing to average.
pub fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Population standard deviation (divides by N), 0.0 when empty.
pub fn std_dev<I: Iterator<Item = f64> + Clone>(values: I) -> f64 {
    let mean = mean(values.clone());
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(sum, count), v| {
        (sum + (v - mean).powi(2), count + 1)
    });
    let variance = if count > 0 { sum / count as f64 } else { 0.0 };
    variance.sqrt()
}

/// Smallest value, NaN as soon as one NaN is encountered.
pub fn min<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        None => Some(v),
        Some(m) if m.is_nan() || v.is_nan() => Some(f64::NAN),
        Some(m) => Some(m.min(v)),
    })
}

/// Largest value, NaN as soon as one NaN is encountered.
pub fn max<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        None => Some(v),
        Some(m) if m.is_nan() || v.is_nan() => Some(f64::NAN),
        Some(m) => Some(m.max(v)),
    })
}

/// [Summary] of one quantity: extrema, mean and population standard deviation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl Summary {
    /// Scans all values and returns their [Summary].
    /// Returns None when there is no value: extrema are not defined.
    /// ```
    /// use kinetrack::prelude::Summary;
    ///
    /// let summary = Summary::from_values([1.0, 2.0, 3.0, 4.0].iter().copied()).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 4.0);
    /// assert_eq!(summary.mean, 2.5);
    /// assert!((summary.std_dev - 1.25_f64.sqrt()).abs() < 1.0E-12);
    ///
    /// assert!(Summary::from_values(std::iter::empty()).is_none());
    /// ```
    pub fn from_values<I: Iterator<Item = f64> + Clone>(values: I) -> Option<Self> {
        let min = min(values.clone())?;
        let max = max(values.clone())?;
        Some(Self {
            min,
            max,
            mean: mean(values.clone()),
            std_dev: std_dev(values),
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "min: {}", self.min)?;
        writeln!(f, "max: {}", self.max)?;
        writeln!(f, "avg: {}", self.mean)?;
        writeln!(f, "std: {}", self.std_dev)
    }
}
