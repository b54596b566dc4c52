//! Error types for the widget crate

use clockface_ticker::TickerError;
use thiserror::Error;

use crate::config::ConfigError;

/// Widget lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Widget '{0}' has been destroyed")]
    Destroyed(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Ticker error: {0}")]
    Ticker(#[from] TickerError),
}

pub type WidgetResult<T> = std::result::Result<T, WidgetError>;
