//! # urti-series
//!
//! Assembles raw month-by-year count tables into a single chronologically
//! ordered [`TimeSeries`] on a monthly grid.
//!
//! ## Architecture
//!
//! ```text
//! MonthlyCounts { years, "Jan" -> [..], "Feb" -> [..], .. }
//!   └─ build_series()
//!        ├─ validate years (strictly increasing)
//!        ├─ parse month names          (urti-calendar)
//!        ├─ year-major, month-minor walk, skipping short tracks
//!        └─ TimeSeries::new()          (timestamp / value invariants)
//! ```
//!
//! A track shorter than the year list stands for an in-progress year: the
//! missing trailing entries are skipped, never treated as an error.
//!
//! # Quick start
//!
//! ```
//! use urti_series::{MonthlyCounts, build_series};
//!
//! let mut counts = MonthlyCounts::new(vec![2010, 2011]);
//! counts.insert("Jan", vec![40, 62]);
//! counts.insert("Feb", vec![250]);
//!
//! let series = build_series(&counts).unwrap();
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.values(), &[40.0, 250.0, 62.0]);
//! ```

mod builder;
mod counts;
mod error;
mod time_series;

pub use builder::build_series;
pub use counts::MonthlyCounts;
pub use error::SeriesError;
pub use time_series::{SeriesPoint, TimeSeries};
