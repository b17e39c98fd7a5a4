use crate::domain::clinical::NumericField;
use std::fmt;
use thiserror::Error;

/// User-correctable input problems. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all numeric fields.")]
    MissingNumericField { field: NumericField },

    #[error("{field} must be a {}.", .field.value_kind())]
    MalformedNumber { field: NumericField, input: String },

    #[error("{field} must be {}.", .field.bounds_text())]
    OutOfRange { field: NumericField, input: String },
}

impl ValidationError {
    pub fn field(&self) -> NumericField {
        match self {
            ValidationError::MissingNumericField { field }
            | ValidationError::MalformedNumber { field, .. }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Failures of the prediction exchange itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("Server error: {reason}")]
    Network { reason: String },

    #[error("Server returned error: {status} - {body}")]
    Server { status: u16, body: String },

    #[error("Parsing error: {reason}")]
    Parse { reason: String },
}

/// Anything that ends a predict action without a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Validation(_) => ErrorKind::Validation,
            PredictError::Prediction(PredictionError::Network { .. }) => ErrorKind::Network,
            PredictError::Prediction(PredictionError::Server { .. }) => ErrorKind::Server,
            PredictError::Prediction(PredictionError::Parse { .. }) => ErrorKind::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Network,
    Server,
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Parse => "parse",
        };
        f.write_str(name)
    }
}
