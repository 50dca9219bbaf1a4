use crate::prelude::Summary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [BodyStats] resulting from a full scan of a [BodyRecord](crate::prelude::BodyRecord).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyStats {
    /// Time elapsed between first and last sample
    pub elapsed_time: f64,
    /// Approximate distance traveled: mean velocity times elapsed time.
    /// This is not the path length (sum of all displacements).
    pub distance: f64,
    /// Velocity [Summary]
    pub velocity: Summary,
    /// Acceleration [Summary]
    pub acceleration: Summary,
}

impl std::fmt::Display for BodyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Time: {}", self.elapsed_time)?;
        writeln!(f, "Distance: {}", self.distance)?;
        writeln!(f, "\nVelocity")?;
        write!(f, "{}", self.velocity)?;
        writeln!(f, "\nAcceleration")?;
        write!(f, "{}", self.acceleration)
    }
}

#[cfg(test)]
mod test {
    use super::BodyStats;
    use crate::prelude::Summary;

    #[test]
    fn report_formatting() {
        let stats = BodyStats {
            elapsed_time: 4.0,
            distance: 10.0,
            velocity: Summary {
                min: 0.0,
                max: 5.0,
                mean: 2.5,
                std_dev: 0.5,
            },
            acceleration: Summary {
                min: -2.5,
                max: 2.5,
                mean: 0.0,
                std_dev: 1.5,
            },
        };
        assert_eq!(
            stats.to_string(),
            "Time: 4
Distance: 10

Velocity
min: 0
max: 5
avg: 2.5
std: 0.5

Acceleration
min: -2.5
max: 2.5
avg: 0
std: 1.5
"
        );
    }
}
