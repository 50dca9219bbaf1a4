//! Input samples
use crate::errors::ParsingError;
use scan_fmt::scan_fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Sample] is one (time, x, y) observation of a body.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Sampling instant
    pub time: f64,
    /// Position along x
    pub x: f64,
    /// Position along y
    pub y: f64,
}

impl Sample {
    /// Creates a new [Sample]
    pub fn new(time: f64, x: f64, y: f64) -> Self {
        Self { time, x, y }
    }

    /// Euclidean distance between the positions of two [Sample]s.
    pub fn distance(&self, rhs: &Self) -> f64 {
        ((self.x - rhs.x).powi(2) + (self.y - rhs.y).powi(2)).sqrt()
    }
}

/// [Entry] associates a [Sample] to the body it was observed on.
/// This is what a simulation driver (or a recorded file) provides.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Body identifier
    pub body: String,
    /// Observation
    pub sample: Sample,
}

impl std::str::FromStr for Entry {
    type Err = ParsingError;
    /// Parses an [Entry] from a whitespace separated "<id> <time> <x> <y>" line.
    /// ```
    /// use kinetrack::prelude::Entry;
    /// use std::str::FromStr;
    ///
    /// let entry = Entry::from_str("earth 1.0 1.5E11 -2.0").unwrap();
    /// assert_eq!(entry.body, "earth");
    /// assert_eq!(entry.sample.time, 1.0);
    /// assert_eq!(entry.sample.x, 1.5E11);
    /// assert_eq!(entry.sample.y, -2.0);
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParsingError::EmptyIdentifier);
        }

        let (body, time, x, y) =
            match scan_fmt!(line, "{} {} {} {}", String, String, String, String) {
                (Some(body), Some(time), Some(x), Some(y)) => (body, time, x, y),
                _ => return Err(ParsingError::MissingField),
            };

        let time = time
            .parse::<f64>()
            .or(Err(ParsingError::FloatParsing("time")))?;
        let x = x.parse::<f64>().or(Err(ParsingError::FloatParsing("x")))?;
        let y = y.parse::<f64>().or(Err(ParsingError::FloatParsing("y")))?;

        Ok(Self {
            body,
            sample: Sample::new(time, x, y),
        })
    }
}
