//! # urti-calendar
//!
//! Month names and year-month timestamps for monthly count series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"Jan\""] -->|"str::parse::<Month>()"| B["Month"]
//!     B -->|"YearMonth::new(year, month)"| C["YearMonth"]
//!     C -->|".next() / .add_months(n)"| C
//!     C -->|"month_sequence()"| D["Vec of YearMonth"]
//!     C -->|".months_until()"| E["signed month distance"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use urti_calendar::{Month, YearMonth, month_sequence};
//!
//! let month: Month = "Dec".parse().unwrap();
//! let start = YearMonth::new(2024, month);
//! let months = month_sequence(start.next(), 3);
//! assert_eq!(months[0], YearMonth::new(2025, Month::Jan));
//! assert_eq!(months[2].to_string(), "2025-03");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Calendar month enum and abbreviation parsing |
//! | `year_month` | Year-month timestamp with monthly arithmetic |
//! | `sequence` | Consecutive month sequence generation |
//! | `error` | Error types |

mod error;
mod month;
mod sequence;
mod year_month;

pub use error::CalendarError;
pub use month::Month;
pub use sequence::month_sequence;
pub use year_month::YearMonth;
