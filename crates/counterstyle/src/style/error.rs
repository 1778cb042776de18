//! Counter style construction errors.

use super::system::System;

/// Error returned when a counter style cannot be constructed.
///
/// Rendering never fails; only malformed symbol tables are reported, and
/// they are reported as soon as the style is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterStyleError {
    /// The symbol list is shorter than the system requires.
    TooFewSymbols {
        system: System,
        minimum: usize,
        found: usize,
    },
    /// An additive table has no weight greater than zero.
    NoPositiveWeights,
}

impl std::fmt::Display for CounterStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterStyleError::TooFewSymbols {
                system,
                minimum,
                found,
            } => {
                write!(
                    f,
                    "{} counter style needs at least {} symbol(s), got {}",
                    system, minimum, found
                )
            }
            CounterStyleError::NoPositiveWeights => {
                write!(f, "additive counter style needs at least one positive weight")
            }
        }
    }
}

impl std::error::Error for CounterStyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_symbols_display() {
        let err = CounterStyleError::TooFewSymbols {
            system: System::Numeric,
            minimum: 2,
            found: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("numeric"));
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_no_positive_weights_display() {
        let msg = CounterStyleError::NoPositiveWeights.to_string();
        assert!(msg.contains("positive weight"));
    }
}
