//! Error types for the ticker crate

use thiserror::Error;

/// Ticker lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    #[error("Tick period must be greater than zero")]
    ZeroPeriod,

    #[error("Ticker '{0}' has been stopped")]
    Stopped(String),

    #[error("No Tokio runtime available to drive the timer")]
    NoRuntime,
}
