#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod errors;
pub mod sample;
pub mod series;
pub mod statistics;
pub mod tracker;


pub mod prelude {
    pub use crate::{
        errors::{Error, ParsingError},
        sample::{Entry, Sample},
        series::Series,
        statistics::Summary,
        tracker::{BodyRecord, BodyStats, Quantity, Tracker},
    };
}
