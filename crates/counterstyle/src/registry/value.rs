//! Registry entry values.

use crate::style::CounterStyle;

/// A registry entry: a concrete style or the name of another entry.
#[derive(Debug, Clone)]
pub enum CounterValue {
    /// A concrete counter style.
    Style(CounterStyle),
    /// A reference to another entry by name.
    Alias(String),
}

impl CounterValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CounterValue::Style(_) => "style",
            CounterValue::Alias(_) => "alias",
        }
    }
}

impl From<CounterStyle> for CounterValue {
    fn from(style: CounterStyle) -> Self {
        CounterValue::Style(style)
    }
}

impl From<&str> for CounterValue {
    fn from(name: &str) -> Self {
        CounterValue::Alias(name.to_string())
    }
}

impl From<String> for CounterValue {
    fn from(name: String) -> Self {
        CounterValue::Alias(name)
    }
}

/// Aliases compare by target; styles compare by identity, so a style equals
/// its clones but not an independently built style that renders the same.
impl PartialEq for CounterValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CounterValue::Alias(a), CounterValue::Alias(b)) => a == b,
            (CounterValue::Style(a), CounterValue::Style(b)) => a.same_as(b),
            _ => false,
        }
    }
}
