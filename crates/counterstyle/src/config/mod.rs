//! Counter style sheets loaded from YAML or JSON.
//!
//! A style sheet maps names to either an alias (`upper-r: upper-roman`) or a
//! definition modelled on CSS `@counter-style`:
//!
//! ```yaml
//! padded-roman:
//!   system: additive
//!   additive-symbols: [[10, X], [9, IX], [5, V], [4, IV], [1, I]]
//!   decorate:
//!     - { kind: range, min: 1, max: 39 }
//!     - { kind: pad-left, length: 4, pad: " " }
//!   fallback: decimal
//! bracketed:
//!   system: extends
//!   base: decimal
//!   decorate:
//!     - { kind: negative, prefix: "(", suffix: ")" }
//! ```
//!
//! Definitions may refer to predefined styles, to entries already in the
//! target registry, or to each other, in any order. Applying a sheet builds
//! every definition in dependency order and returns a copy of the target
//! [`CounterStyles`] registry with the results added.

mod definition;
mod error;

pub use definition::{Decorator, StyleDefinition, StyleEntry, SystemKind};
pub use error::ConfigError;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::registry::CounterStyles;
use crate::style::{CounterStyle, CounterStyleError};

/// A parsed collection of counter style definitions and aliases.
///
/// # Example
///
/// ```rust
/// use counterstyle::{CounterStyles, StyleSheet};
///
/// let sheet = StyleSheet::from_yaml(
///     r#"
/// step:
///   system: cyclic
///   symbols: ["→", "⇒"]
/// part: upper-roman
/// "#,
/// )
/// .unwrap();
///
/// let styles = sheet.apply(&CounterStyles::predefined()).unwrap();
/// assert_eq!(styles.format("step", 2).unwrap(), "⇒");
/// assert_eq!(styles.format("part", 3).unwrap(), "III");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    entries: BTreeMap<String, StyleEntry>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML style sheet.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a JSON style sheet.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Reads a style sheet file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Fails for extensions other than `.yaml`, `.yml` and `.json`, for
    /// unreadable files, and for malformed content.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parse = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!("loading counter style sheet from {}", path.display());
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse(&source)
    }

    /// Adds an entry, returning the updated sheet for chaining.
    pub fn add(mut self, name: &str, entry: StyleEntry) -> Self {
        self.entries.insert(name.to_string(), entry);
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Builds every entry on top of `registry`, returning the combined
    /// registry.
    ///
    /// Definitions become concrete styles; aliases stay aliases. Entries
    /// replace registry entries of the same name. `registry` itself is left
    /// as it was, whether or not the sheet applies.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be built.
    pub fn apply(&self, registry: &CounterStyles) -> Result<CounterStyles, ConfigError> {
        let mut builder = SheetBuilder {
            sheet: self,
            registry,
            built: HashMap::new(),
            visiting: Vec::new(),
        };
        for name in self.entries.keys() {
            builder.resolve(name, name)?;
        }
        let built = builder.built;

        let mut styles = registry.clone();
        for (name, entry) in &self.entries {
            match entry {
                StyleEntry::Alias(target) => styles.insert(name, target.as_str()),
                StyleEntry::Definition(_) => {
                    if let Some(style) = built.get(name) {
                        styles.insert(name, style.clone());
                    }
                }
            }
        }
        debug!("applied {} counter style sheet entries", self.entries.len());
        Ok(styles)
    }
}

/// Resolves sheet entries depth-first, memoizing built styles.
struct SheetBuilder<'a> {
    sheet: &'a StyleSheet,
    registry: &'a CounterStyles,
    built: HashMap<String, CounterStyle>,
    visiting: Vec<String>,
}

impl SheetBuilder<'_> {
    fn resolve(&mut self, name: &str, from: &str) -> Result<CounterStyle, ConfigError> {
        if let Some(style) = self.built.get(name) {
            return Ok(style.clone());
        }

        let sheet = self.sheet;
        let Some(entry) = sheet.entries.get(name) else {
            return self
                .registry
                .resolve(name)
                .map_err(|_| ConfigError::UnresolvedReference {
                    from: from.to_string(),
                    to: name.to_string(),
                });
        };

        if let Some(start) = self.visiting.iter().position(|visited| visited == name) {
            let mut path = self.visiting[start..].to_vec();
            path.push(name.to_string());
            return Err(ConfigError::CycleDetected { path });
        }

        self.visiting.push(name.to_string());
        let style = match entry {
            StyleEntry::Alias(target) => self.resolve(target, name),
            StyleEntry::Definition(definition) => self.build(name, definition),
        };
        self.visiting.pop();

        let style = style?;
        self.built.insert(name.to_string(), style.clone());
        Ok(style)
    }

    fn build(
        &mut self,
        name: &str,
        definition: &StyleDefinition,
    ) -> Result<CounterStyle, ConfigError> {
        debug!("building counter style '{}'", name);
        let construct = |result: Result<CounterStyle, CounterStyleError>| {
            result.map_err(|source| ConfigError::Construction {
                style: name.to_string(),
                source,
            })
        };
        let symbols = || definition.symbols.iter().cloned();

        let mut style = match definition.system {
            SystemKind::Cyclic => construct(CounterStyle::cyclic(symbols()))?,
            SystemKind::Fixed => construct(CounterStyle::fixed(symbols()))?,
            SystemKind::Symbolic => construct(CounterStyle::symbolic(symbols()))?,
            SystemKind::Alphabetic => construct(CounterStyle::alphabetic(symbols()))?,
            SystemKind::Numeric => construct(CounterStyle::numeric(symbols()))?,
            SystemKind::Additive => construct(CounterStyle::additive(
                definition.additive_symbols.iter().cloned(),
            ))?,
            SystemKind::Extends => {
                let base = definition
                    .base
                    .as_deref()
                    .ok_or_else(|| ConfigError::MissingField {
                        style: name.to_string(),
                        field: "base",
                    })?;
                self.resolve(base, name)?
            }
        };

        for decorator in &definition.decorate {
            style = match decorator {
                Decorator::Range { min, max } => {
                    let min = min.unwrap_or(i64::MIN);
                    let max = max.unwrap_or(i64::MAX);
                    if min > max {
                        return Err(ConfigError::InvalidRange {
                            style: name.to_string(),
                            min,
                            max,
                        });
                    }
                    style.range(min, max)
                }
                Decorator::Negative { prefix, suffix } => style.negative(prefix, suffix),
                Decorator::PadLeft { length, pad } => style.pad_left(*length, pad),
                Decorator::PadRight { length, pad } => style.pad_right(*length, pad),
            };
        }

        if let Some(fallback) = &definition.fallback {
            let fallback = self.resolve(fallback, name)?;
            style = style.fallback(fallback);
        }

        Ok(style)
    }
}
