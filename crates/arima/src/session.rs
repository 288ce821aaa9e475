//! Stateful wrapper around a single fit.
//!
//! ```mermaid
//! stateDiagram-v2
//!     [*] --> Unfit
//!     Unfit --> Fitting: fit(&series)
//!     Fitting --> Fitted: Ok
//!     Fitting --> Failed: Err
//! ```
//!
//! Forecasts and residuals are available only in `Fitted`; a failed session
//! keeps its error and must be replaced to retry.

use serde::Serialize;
use urti_series::TimeSeries;

use crate::config::FitOptions;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::forecast::Forecast;
use crate::residuals::ResidualDiagnostics;
use crate::spec::ArimaSpec;

/// Lifecycle stage of a [`FitSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Unfit,
    Fitting,
    Fitted,
    Failed,
}

#[derive(Debug, Clone)]
enum SessionState {
    Unfit,
    Fitting,
    Fitted(Box<ArimaFit>),
    Failed(ArimaError),
}

/// One specification, fitted at most once.
#[derive(Debug, Clone)]
pub struct FitSession {
    spec: ArimaSpec,
    options: FitOptions,
    state: SessionState,
}

impl FitSession {
    /// Creates an unfitted session with default [`FitOptions`].
    pub fn new(spec: ArimaSpec) -> Self {
        Self {
            spec,
            options: FitOptions::default(),
            state: SessionState::Unfit,
        }
    }

    /// Replaces the optimizer options.
    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// The session's specification.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Current lifecycle stage.
    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Unfit => SessionStatus::Unfit,
            SessionState::Fitting => SessionStatus::Fitting,
            SessionState::Fitted(_) => SessionStatus::Fitted,
            SessionState::Failed(_) => SessionStatus::Failed,
        }
    }

    /// Fits the session's spec to `series`.
    ///
    /// Only an `Unfit` session runs the optimizer. A `Fitted` session returns
    /// its existing fit and a `Failed` session returns its stored error.
    pub fn fit(&mut self, series: &TimeSeries) -> Result<&ArimaFit, ArimaError> {
        if let SessionState::Unfit = self.state {
            self.state = SessionState::Fitting;
            self.state = match self.spec.fit_with(series, &self.options) {
                Ok(fit) => SessionState::Fitted(Box::new(fit)),
                Err(e) => SessionState::Failed(e),
            };
        }
        self.fitted_or_error()
    }

    fn fitted_or_error(&self) -> Result<&ArimaFit, ArimaError> {
        match &self.state {
            SessionState::Fitted(fit) => Ok(&**fit),
            SessionState::Failed(e) => Err(e.clone()),
            SessionState::Unfit | SessionState::Fitting => Err(ArimaError::NotFitted),
        }
    }

    /// The fit.
    ///
    /// # Errors
    ///
    /// [`ArimaError::NotFitted`] unless the session is `Fitted`.
    pub fn fitted(&self) -> Result<&ArimaFit, ArimaError> {
        match &self.state {
            SessionState::Fitted(fit) => Ok(&**fit),
            _ => Err(ArimaError::NotFitted),
        }
    }

    /// The stored failure of a `Failed` session.
    pub fn error(&self) -> Option<&ArimaError> {
        match &self.state {
            SessionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Forecasts from the fit with 95% intervals.
    ///
    /// # Errors
    ///
    /// [`ArimaError::NotFitted`] unless the session is `Fitted`, then as
    /// [`ArimaFit::forecast()`].
    pub fn forecast(&self, horizon: usize) -> Result<Forecast, ArimaError> {
        self.fitted()?.forecast(horizon)
    }

    /// Forecasts from the fit with intervals at `level`.
    pub fn forecast_with_level(&self, horizon: usize, level: f64) -> Result<Forecast, ArimaError> {
        self.fitted()?.forecast_with_level(horizon, level)
    }

    /// Residual diagnostics of the fit.
    ///
    /// # Errors
    ///
    /// [`ArimaError::NotFitted`] unless the session is `Fitted`.
    pub fn residuals(&self) -> Result<ResidualDiagnostics, ArimaError> {
        Ok(self.fitted()?.residual_diagnostics())
    }
}
