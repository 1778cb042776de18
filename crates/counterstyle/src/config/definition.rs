//! Serde types for counter style definitions.

use serde::Deserialize;

/// One entry of a style sheet: an alias or a full definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// `name: other-name`
    Alias(String),
    /// `name: { system: ..., ... }`
    Definition(StyleDefinition),
}

/// How the base style of a definition is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemKind {
    Cyclic,
    Fixed,
    Symbolic,
    Alphabetic,
    Numeric,
    Additive,
    /// Start from another named style instead of a symbol table.
    Extends,
}

/// A counter style definition, in the spirit of CSS `@counter-style`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleDefinition {
    pub system: SystemKind,
    /// Symbols for every system except `additive` and `extends`.
    #[serde(default)]
    pub symbols: Vec<String>,
    /// `[weight, symbol]` pairs for the `additive` system.
    #[serde(default)]
    pub additive_symbols: Vec<(u64, String)>,
    /// The style an `extends` definition starts from.
    #[serde(default)]
    pub base: Option<String>,
    /// Decorators, applied in order.
    #[serde(default)]
    pub decorate: Vec<Decorator>,
    /// Name of the style rendering indices this one declines.
    #[serde(default)]
    pub fallback: Option<String>,
}

/// A decorator step of a definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Decorator {
    /// Missing bounds are unbounded.
    Range {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    Negative {
        prefix: String,
        #[serde(default)]
        suffix: String,
    },
    PadLeft {
        length: usize,
        pad: String,
    },
    PadRight {
        length: usize,
        pad: String,
    },
}
