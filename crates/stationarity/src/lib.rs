//! # urti-stationarity
//!
//! Augmented Dickey-Fuller (ADF) unit-root test for deciding whether a
//! (usually differenced) count series is stationary.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["AdfConfig::new()"] -->|".with_lag_selection(..)"| A
//!     A -->|"adf_test(&values, &config)?"| B["AdfResult"]
//!     B --> C[".statistic / .p_value"]
//!     B --> D[".critical_values"]
//!     B --> E[".stationary (p < significance)"]
//!     F["check_stationarity(&values, d, &config)?"] -->|"difference d times"| B
//! ```
//!
//! ## Test regression
//!
//! ```text
//! Δy[t] = α + β·y[t-1] + Σ_{i=1..k} γ_i·Δy[t-i] + ε[t]
//! ```
//!
//! The statistic is the t-ratio of `β`. The lag count `k` is picked by
//! information criterion over `0..=max_lag` on a common sample, then the
//! regression is re-run on every observation the chosen lag allows.
//! p-values follow MacKinnon's (1994) response surface and critical values
//! MacKinnon's (2010) finite-sample tables, both for the constant-only case.

mod adf;
mod error;
mod mackinnon;
mod ols;

pub use adf::{AdfConfig, AdfResult, CriticalValues, LagSelection, adf_test, check_stationarity};
pub use error::StationarityError;
pub use mackinnon::{mackinnon_critical_values, mackinnon_p_value};
