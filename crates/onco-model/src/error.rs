use thiserror::Error;

/// Rejection raised while turning raw form input into a typed calculator input.
///
/// Calculations themselves never return this; they signal an out-of-domain
/// input by producing no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number, got {value:?}")]
    NotNumeric { field: &'static str, value: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("unknown {field} {value:?} (expected one of: {expected})")]
    UnknownChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl InputError {
    /// Name of the input field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::Missing { field }
            | InputError::NotNumeric { field, .. }
            | InputError::NotFinite { field }
            | InputError::NotPositive { field, .. }
            | InputError::Negative { field, .. }
            | InputError::OutOfRange { field, .. }
            | InputError::UnknownChoice { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
