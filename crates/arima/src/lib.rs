//! # urti-arima
//!
//! ARIMA(p,d,q) fitting, candidate comparison, forecasting and residual
//! diagnostics for monthly count series, via exact state-space
//! maximum likelihood (Kalman filter + Nelder-Mead).
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArimaSpec::new(p, d, q)"] -->|".fit(&series)?"| B["ArimaFit"]
//!     B --> C[".ar() / .ma() / .sigma2()"]
//!     B --> D[".aic() / .bic()"]
//!     B -->|".forecast(h)?"| E["Forecast"]
//!     B -->|".residual_diagnostics()"| F["ResidualDiagnostics"]
//!     G["compare_candidates(&series, &specs, &opts)"] -->|"one fit per spec"| H["CandidateComparison"]
//! ```
//!
//! ## Two Usage Paths
//!
//! **Direct fit** (known order):
//! ```ignore
//! let fit = ArimaSpec::new(3, 1, 0).fit(&series)?;
//! let forecast = fit.forecast(12)?;
//! ```
//!
//! **Candidate comparison** (scores for the caller to choose from):
//! ```ignore
//! let comparison = compare_candidates(&series, &DEFAULT_CANDIDATES, &FitOptions::default());
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArimaFit::ar()`] | AR coefficients: weights on past differenced values |
//! | theta | [`ArimaFit::ma()`] | MA coefficients: weights on past forecast errors |
//! | sigma2 | [`ArimaFit::sigma2()`] | Innovation (white-noise) variance |
//! | AIC | [`ArimaFit::aic()`] | `2k − 2 logL` (lower = better) |
//! | BIC | [`ArimaFit::bic()`] | `k ln(n) − 2 logL`, n = observations after differencing |
//! | psi | (internal) | Impulse-response weights driving forecast standard errors |

mod config;
mod error;
mod fit;
mod forecast;
mod residuals;
mod selection;
mod session;
mod spec;

pub(crate) mod diff;
pub(crate) mod kalman;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod state_space;

pub use config::FitOptions;
pub use error::ArimaError;
pub use fit::{ArimaFit, DEFAULT_LEVEL};
pub use forecast::{Forecast, ForecastPoint};
pub use residuals::{ResidualDiagnostics, ResidualPoint};
pub use selection::{
    CandidateComparison, CandidateReport, CandidateRow, DEFAULT_CANDIDATES, compare_candidates,
    compare_candidates_par,
};
pub use session::{FitSession, SessionStatus};
pub use spec::ArimaSpec;
