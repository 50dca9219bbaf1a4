//! Append only series of real values
use crate::{errors::Error, statistics::Summary};
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Series] is the ordered history of one quantity.
/// Insertion order is time order: values are only appended
/// and never modified in place.
/// ```
/// use kinetrack::prelude::{Error, Series};
///
/// let mut series = Series::default();
/// assert_eq!(series.first(), Err(Error::EmptySeries));
///
/// series.append(1.0).append(2.0).append(3.0);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.first(), Ok(1.0));
/// assert_eq!(series.last(), Ok(3.0));
/// assert_eq!(series.values().sum::<f64>(), 6.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    inner: VecDeque<f64>,
}

impl Series {
    /// Allocates a new [Series] able to store `capacity` values
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a new value at the end of this [Series].
    pub fn append(&mut self, value: f64) -> &mut Self {
        self.inner.push_back(value);
        self
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if nothing was appended yet
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Earliest value still in this [Series]
    pub fn first(&self) -> Result<f64, Error> {
        self.inner.front().copied().ok_or(Error::EmptySeries)
    }

    /// Most recently appended value
    pub fn last(&self) -> Result<f64, Error> {
        self.inner.back().copied().ok_or(Error::EmptySeries)
    }

    /// Iterates all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.inner.iter().copied()
    }

    /// Mean value, 0.0 when empty.
    pub fn mean(&self) -> f64 {
        crate::statistics::mean(self.values())
    }

    /// Population standard deviation, 0.0 when empty.
    pub fn std_dev(&self) -> f64 {
        crate::statistics::std_dev(self.values())
    }

    /// Smallest value
    pub fn min(&self) -> Result<f64, Error> {
        crate::statistics::min(self.values()).ok_or(Error::EmptySeries)
    }

    /// Largest value
    pub fn max(&self) -> Result<f64, Error> {
        crate::statistics::max(self.values()).ok_or(Error::EmptySeries)
    }

    /// [Summary] of the whole [Series].
    pub fn summary(&self) -> Result<Summary, Error> {
        Summary::from_values(self.values()).ok_or(Error::EmptySeries)
    }

    /// Drops the oldest value, only used by bounded retention.
    pub(crate) fn evict_first(&mut self) -> Option<f64> {
        self.inner.pop_front()
    }
}

impl std::iter::FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
