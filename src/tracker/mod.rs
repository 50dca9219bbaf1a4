mod record;
mod stats;

pub use record::{BodyRecord, Quantity};
pub use stats::BodyStats;

use crate::prelude::{Error, Sample};
use log::{debug, error};
use std::collections::HashMap;

/// [Tracker] is used to track all bodies of a simulation
/// and derive their kinematic statistics.
/// ```
/// use kinetrack::prelude::Tracker;
///
/// let mut tracker = Tracker::new();
/// tracker.add_entry("a", 0.0, 0.0, 0.0);
/// tracker.add_entry("a", 2.0, 6.0, 8.0);
///
/// let report = tracker.report();
/// let stats = report.get("a").unwrap();
/// assert_eq!(stats.elapsed_time, 2.0);
/// assert_eq!(stats.velocity.max, 5.0);
/// assert_eq!(stats.acceleration.max, 2.5);
/// ```
#[derive(Default, Debug, Clone)]
pub struct Tracker {
    /// Internal buffer
    bodies: HashMap<String, BodyRecord>,
    /// Retention limit (samples per body)
    max_samples: Option<usize>,
}

impl Tracker {
    /// Allocate new [Tracker], retaining all samples.
    pub fn new() -> Self {
        Self {
            bodies: HashMap::with_capacity(8),
            max_samples: None,
        }
    }

    /// Define a [Tracker] that only retains the latest `max_samples`
    /// samples of each body (at least one). Statistics then only
    /// cover that window, and the 0.0 placeholders disappear once
    /// the first sample was evicted.
    pub fn with_max_samples(&self, max_samples: usize) -> Self {
        let mut s = self.clone();
        s.max_samples = Some(max_samples);
        s
    }

    /// Provide a new observation of that particular body.
    /// Observations must be provided in chronological order: they are
    /// differentiated in arrival order. Two observations stamped at the
    /// same instant produce non finite velocity and acceleration,
    /// which are stored as is.
    pub fn add_entry(&mut self, body: &str, time: f64, x: f64, y: f64) {
        self.add_sample(body, Sample::new(time, x, y));
    }

    /// Provide a new [Sample] for that particular body.
    pub fn add_sample(&mut self, body: &str, sample: Sample) {
        if let Some(record) = self.bodies.get_mut(body) {
            record.update(body, sample);
            if let Some(max_samples) = self.max_samples {
                record.retain(body, max_samples);
            }
        } else {
            debug!("{}({}) - new body", body, sample.time);
            self.bodies
                .insert(body.to_string(), BodyRecord::new(sample));
        }
    }

    /// Number of bodies being tracked
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True if no body was ever observed
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates the identifiers of all tracked bodies (unordered).
    pub fn bodies(&self) -> impl Iterator<Item = &str> + '_ {
        self.bodies.keys().map(|k| k.as_str())
    }

    /// Returns the [BodyRecord] of desired body.
    pub fn body(&self, body: &str) -> Result<&BodyRecord, Error> {
        self.bodies
            .get(body)
            .ok_or_else(|| Error::UnknownBody(body.to_string()))
    }

    /// Computes [BodyStats] of desired body.
    pub fn body_stats(&self, body: &str) -> Result<BodyStats, Error> {
        self.body(body)?.stats()
    }

    /// Computes [BodyStats] of every tracked body.
    /// This never modifies the [Tracker] and may be called at any time.
    /// A body whose statistics cannot be formed is left out of the report.
    pub fn report(&self) -> HashMap<String, BodyStats> {
        self.bodies
            .iter()
            .filter_map(|(body, record)| match record.stats() {
                Ok(stats) => Some((body.clone(), stats)),
                Err(e) => {
                    error!("{} - statistics error: {}", body, e);
                    None
                },
            })
            .collect()
    }
}
