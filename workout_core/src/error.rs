//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sensor package could not be turned into a workout
    #[error("Package error: {0}")]
    Package(#[from] PackageError),
}

/// Reasons a sensor package is rejected by the factory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    /// Package data is not a list of values
    #[error("expected a list of values, got {found}")]
    NotASequence { found: &'static str },

    /// Tag does not name a known workout type
    #[error("workout type '{tag}' is not supported; available types: {allowed}")]
    UnsupportedType { tag: String, allowed: String },

    /// Wrong number of values for the workout type
    #[error("{workout} takes {expected} values, got {actual}")]
    Arity {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A required value is null
    #[error("value #{index} ({field}) is empty")]
    MissingValue { index: usize, field: &'static str },

    /// A value is present but is not a number
    #[error("value #{index} ({field}) is not a number")]
    NotANumber { index: usize, field: &'static str },

    /// A number outside the range the formulas accept
    #[error("value {value} is invalid for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Category of a rejected package, used to pick the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    UnsupportedType,
    Arity,
    Type,
    MissingValue,
    Other,
}

impl ErrorCategory {
    /// Fixed message shown to the user for this category
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorCategory::UnsupportedType => "Неизвестный тип тренировки",
            ErrorCategory::Arity => "Передано неверное количество аргументов",
            ErrorCategory::Type => "Ожидается список числовых данных",
            ErrorCategory::MissingValue => "Передано пустое значение",
            ErrorCategory::Other => "Не удалось обработать тренировку",
        }
    }
}

impl PackageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PackageError::NotASequence { .. } | PackageError::NotANumber { .. } => {
                ErrorCategory::Type
            }
            PackageError::UnsupportedType { .. } => ErrorCategory::UnsupportedType,
            PackageError::Arity { .. } => ErrorCategory::Arity,
            PackageError::MissingValue { .. } => ErrorCategory::MissingValue,
            PackageError::InvalidValue { .. } => ErrorCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_follow_variants_not_text() {
        let err = PackageError::Arity {
            workout: "Running",
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.category(), ErrorCategory::Arity);

        let err = PackageError::NotANumber {
            index: 1,
            field: "duration",
        };
        assert_eq!(err.category(), ErrorCategory::Type);
    }

    #[test]
    fn test_unsupported_type_names_allowed_tags() {
        let err = PackageError::UnsupportedType {
            tag: "BIKE".into(),
            allowed: "SWM, RUN, WLK".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("BIKE"));
        assert!(msg.contains("SWM, RUN, WLK"));
    }
}
