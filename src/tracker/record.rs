//! Per body kinematic history
use itertools::izip;
use log::{debug, trace, warn};
use strum_macros::{Display, EnumIter, EnumString};

use crate::prelude::{BodyStats, Error, Sample, Series};

/// [Quantity] designates one of the [Series] stored in a [BodyRecord].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Quantity {
    /// Sampling instants
    Time,
    /// Position along x
    X,
    /// Position along y
    Y,
    /// Displacement since previous sample
    Distance,
    /// Displacement over elapsed time
    Velocity,
    /// Velocity change over elapsed time
    Acceleration,
}

/// [BodyRecord] holds the raw and derived history of one body.
/// All [Series] always have the same length. The first entry of
/// the derived quantities is a 0.0 placeholder, since nothing can
/// be derived from a single [Sample].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    time: Series,
    x: Series,
    y: Series,
    distance: Series,
    velocity: Series,
    acceleration: Series,
    /// Latest [Sample], differentiation reference
    prev: Sample,
    /// Latest velocity, differentiation reference
    prev_velocity: f64,
}

impl BodyRecord {
    /// Creates a new [BodyRecord] from the first [Sample] of a body.
    pub(crate) fn new(sample: Sample) -> Self {
        let series = || {
            let mut s = Series::with_capacity(16);
            s.append(0.0);
            s
        };

        let mut time = Series::with_capacity(16);
        let mut x = Series::with_capacity(16);
        let mut y = Series::with_capacity(16);
        time.append(sample.time);
        x.append(sample.x);
        y.append(sample.y);

        Self {
            time,
            x,
            y,
            distance: series(),
            velocity: series(),
            acceleration: series(),
            prev: sample,
            prev_velocity: 0.0,
        }
    }

    /// Latches a new [Sample] and derives distance, velocity and
    /// acceleration against the previous one. Samples are differentiated
    /// in arrival order: timestamps are not sorted nor verified.
    pub(crate) fn update(&mut self, body: &str, sample: Sample) {
        let dt = sample.time - self.prev.time;
        let distance = sample.distance(&self.prev);
        let velocity = distance / dt;
        let acceleration = (velocity - self.prev_velocity) / dt;

        if !velocity.is_finite() || !acceleration.is_finite() {
            warn!(
                "{}({}) - non finite derivative (dt={}, v={}, a={})",
                body, sample.time, dt, velocity, acceleration
            );
        } else {
            trace!(
                "{}({}) - d={} v={} a={}",
                body,
                sample.time,
                distance,
                velocity,
                acceleration
            );
        }

        self.time.append(sample.time);
        self.x.append(sample.x);
        self.y.append(sample.y);
        self.distance.append(distance);
        self.velocity.append(velocity);
        self.acceleration.append(acceleration);

        self.prev = sample;
        self.prev_velocity = velocity;
    }

    /// Evicts the oldest entries until at most `max` (at least 1) remain.
    pub(crate) fn retain(&mut self, body: &str, max: usize) {
        let max = max.max(1);
        let excess = self.len().saturating_sub(max);
        if excess == 0 {
            return;
        }
        for _ in 0..excess {
            for series in [
                &mut self.time,
                &mut self.x,
                &mut self.y,
                &mut self.distance,
                &mut self.velocity,
                &mut self.acceleration,
            ] {
                series.evict_first();
            }
        }
        debug!("{} - evicted {} sample(s)", body, excess);
    }

    /// Number of [Sample]s retained for this body.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false: a record exists from the first [Sample] onwards.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the [Series] of desired [Quantity].
    pub fn series(&self, quantity: Quantity) -> &Series {
        match quantity {
            Quantity::Time => &self.time,
            Quantity::X => &self.x,
            Quantity::Y => &self.y,
            Quantity::Distance => &self.distance,
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
        }
    }

    /// Iterates the raw [Sample]s in arrival order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        izip!(self.time.values(), self.x.values(), self.y.values())
            .map(|(time, x, y)| Sample::new(time, x, y))
    }

    /// Scans all [Series] and returns this body's [BodyStats].
    pub fn stats(&self) -> Result<BodyStats, Error> {
        let elapsed_time = self.time.last()? - self.time.first()?;
        let velocity = self.velocity.summary()?;
        let acceleration = self.acceleration.summary()?;
        Ok(BodyStats {
            elapsed_time,
            distance: velocity.mean * elapsed_time,
            velocity,
            acceleration,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{BodyRecord, Quantity};
    use crate::prelude::Sample;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn first_sample_placeholders() {
        let record = BodyRecord::new(Sample::new(1.0, 2.0, 3.0));
        assert_eq!(record.len(), 1);
        assert!(!record.is_empty());
        for quantity in Quantity::iter() {
            assert_eq!(record.series(quantity).len(), 1, "{}", quantity);
        }
        assert_eq!(record.series(Quantity::Time).first(), Ok(1.0));
        assert_eq!(record.series(Quantity::X).first(), Ok(2.0));
        assert_eq!(record.series(Quantity::Y).first(), Ok(3.0));
        assert_eq!(record.series(Quantity::Distance).first(), Ok(0.0));
        assert_eq!(record.series(Quantity::Velocity).first(), Ok(0.0));
        assert_eq!(record.series(Quantity::Acceleration).first(), Ok(0.0));
    }

    #[test]
    fn quantity_names() {
        assert_eq!(Quantity::Velocity.to_string(), "velocity");
        assert_eq!(Quantity::from_str("acceleration"), Ok(Quantity::Acceleration));
        assert_eq!(Quantity::from_str("x"), Ok(Quantity::X));
        assert!(Quantity::from_str("jerk").is_err());
        assert_eq!(Quantity::iter().count(), 6);
    }

    #[test]
    fn samples_echo() {
        let mut record = BodyRecord::new(Sample::new(0.0, 0.0, 0.0));
        record.update("a", Sample::new(1.0, 1.0, 0.0));
        record.update("a", Sample::new(2.0, 1.0, 1.0));
        let samples = record.samples().collect::<Vec<_>>();
        assert_eq!(
            samples,
            vec![
                Sample::new(0.0, 0.0, 0.0),
                Sample::new(1.0, 1.0, 0.0),
                Sample::new(2.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn retention() {
        let mut record = BodyRecord::new(Sample::new(0.0, 0.0, 0.0));
        for i in 1..10 {
            record.update("a", Sample::new(i as f64, i as f64, 0.0));
            record.retain("a", 4);
        }
        assert_eq!(record.len(), 4);
        for quantity in Quantity::iter() {
            assert_eq!(record.series(quantity).len(), 4, "{}", quantity);
        }
        assert_eq!(record.series(Quantity::Time).first(), Ok(6.0));
        assert_eq!(record.series(Quantity::Time).last(), Ok(9.0));
        assert_eq!(record.series(Quantity::Velocity).first(), Ok(1.0));

        record.retain("a", 0);
        assert_eq!(record.len(), 1);
        assert_eq!(record.series(Quantity::Time).first(), Ok(9.0));
    }
}
