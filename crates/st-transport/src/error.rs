//! Transport evaluator errors.

use st_core::CoreError;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Problems found while reading a configuration record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required key is absent.
    #[error("Missing required key '{key}'")]
    Missing { key: String },

    /// A key is present but its value is not a number.
    #[error("Key '{key}' must be numeric, found {found}")]
    NonNumeric { key: String, found: String },

    /// A lower/upper pair does not describe a non-empty interval.
    #[error("Invalid bounds for {what}: [{lo}, {hi}]")]
    InvalidBounds { what: &'static str, lo: f64, hi: f64 },

    /// A value is present but outside what the model accepts.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: &'static str },

    /// Bounds reach outside the range where the backend is defined.
    #[error("{what} bounds [{lo}, {hi}] exceed the {backend} range [{valid_lo}, {valid_hi}]")]
    OutsideBackendRange {
        what: &'static str,
        backend: String,
        lo: f64,
        hi: f64,
        valid_lo: f64,
        valid_hi: f64,
    },
}

/// Errors that can occur while building or using transport evaluators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Configuration record could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Non-physical values (non-positive mole weight, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}

impl From<CoreError> for TransportError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidBounds { what, lo, hi } => {
                TransportError::Config(ConfigError::InvalidBounds { what, lo, hi })
            }
            CoreError::NonFinite { what, .. } => TransportError::NonPhysical { what },
            CoreError::InvalidArg { what } | CoreError::Invariant { what } => {
                TransportError::InvalidArg { what }
            }
        }
    }
}

impl From<TransportError> for CoreError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Config(ConfigError::InvalidBounds { what, lo, hi }) => {
                CoreError::InvalidBounds { what, lo, hi }
            }
            TransportError::Config(cfg) => CoreError::InvalidArg {
                what: format!("Transport configuration: {cfg}"),
            },
            TransportError::NonPhysical { what } => CoreError::Invariant {
                what: format!("Non-physical transport value: {what}"),
            },
            TransportError::InvalidArg { what } => CoreError::InvalidArg { what },
        }
    }
}
