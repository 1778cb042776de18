//! Style sheet loading errors.

use std::path::PathBuf;

use crate::style::CounterStyleError;

/// Error returned when a style sheet cannot be loaded or applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid YAML/JSON or does not match the schema.
    Parse { message: String },
    /// The file could not be read.
    Io { path: PathBuf, message: String },
    /// The file extension is neither `.yaml`, `.yml` nor `.json`.
    UnsupportedFormat { path: PathBuf },
    /// A definition lacks a field its system needs.
    MissingField { style: String, field: &'static str },
    /// A range decorator has `min > max`.
    InvalidRange { style: String, min: i64, max: i64 },
    /// The symbol table was rejected.
    Construction {
        style: String,
        source: CounterStyleError,
    },
    /// `base`, `fallback` or an alias names an unknown style.
    UnresolvedReference { from: String, to: String },
    /// Definitions refer to each other in a loop.
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse { message } => {
                write!(f, "failed to parse counter style sheet: {}", message)
            }
            ConfigError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path.display(), message)
            }
            ConfigError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "unsupported style sheet format '{}' (expected .yaml, .yml or .json)",
                    path.display()
                )
            }
            ConfigError::MissingField { style, field } => {
                write!(f, "counter style '{}' is missing '{}'", style, field)
            }
            ConfigError::InvalidRange { style, min, max } => {
                write!(
                    f,
                    "counter style '{}' has an empty range {}..={}",
                    style, min, max
                )
            }
            ConfigError::Construction { style, source } => {
                write!(f, "counter style '{}': {}", style, source)
            }
            ConfigError::UnresolvedReference { from, to } => {
                write!(f, "counter style '{}' refers to unknown style '{}'", from, to)
            }
            ConfigError::CycleDetected { path } => {
                write!(f, "cycle detected in counter style sheet: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Construction { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::System;
    use std::error::Error;

    #[test]
    fn test_construction_error_has_source() {
        let err = ConfigError::Construction {
            style: "bad".to_string(),
            source: CounterStyleError::TooFewSymbols {
                system: System::Fixed,
                minimum: 1,
                found: 0,
            },
        };
        assert!(err.to_string().contains("'bad'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_range_display() {
        let err = ConfigError::InvalidRange {
            style: "r".to_string(),
            min: 5,
            max: 1,
        };
        assert!(err.to_string().contains("5..=1"));
    }

    #[test]
    fn test_cycle_display() {
        let err = ConfigError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert!(err.to_string().contains("a -> b -> a"));
    }
}
