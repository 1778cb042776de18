//! Named counter styles and aliases.
//!
//! This module provides:
//!
//! - [`CounterValue`]: A registry entry, either a concrete style or an alias
//! - [`CounterStyles`]: A registry of named styles
//! - [`RegistryError`]: Errors from lookup and validation
//!
//! Aliases let a project name its styles semantically (`"step"`) while the
//! concrete choice (`"lower-roman"`) lives in one place.

mod error;
mod value;

pub use error::RegistryError;
pub use value::CounterValue;

use std::collections::{BTreeMap, HashSet};

use log::{debug, trace};

use crate::predefined;
use crate::style::CounterStyle;

/// A registry of named counter styles.
///
/// # Example
///
/// ```rust
/// use counterstyle::CounterStyles;
///
/// let styles = CounterStyles::predefined()
///     .add("chapter", "upper-roman")
///     .add("section", "lower-alpha");
///
/// assert_eq!(styles.format("chapter", 9).unwrap(), "IX");
/// assert_eq!(styles.format("section", 2).unwrap(), "b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CounterStyles {
    entries: BTreeMap<String, CounterValue>,
}

impl CounterStyles {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every predefined style and alias.
    pub fn predefined() -> Self {
        let styles = predefined::CATALOG
            .iter()
            .fold(Self::new(), |styles, (name, style)| {
                styles.add(name, CounterStyle::clone(style))
            });
        predefined::ALIASES
            .iter()
            .fold(styles, |styles, (alias, target)| styles.add(alias, *target))
    }

    /// Adds a named entry, returning the updated registry for chaining.
    ///
    /// The value can be a [`CounterStyle`] or a `&str`/`String` naming
    /// another entry. An existing entry of the same name is replaced.
    pub fn add<V: Into<CounterValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a named entry in place.
    pub fn insert<V: Into<CounterValue>>(&mut self, name: &str, value: V) {
        let value = value.into();
        trace!("registering counter style '{}' ({})", name, value.kind());
        self.entries.insert(name.to_string(), value);
    }

    /// Returns true if an entry with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the raw entry without following aliases.
    pub fn entry(&self, name: &str) -> Option<&CounterValue> {
        self.entries.get(name)
    }

    /// Resolves a name to its style, following aliases.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for unknown names,
    /// [`RegistryError::UnresolvedAlias`] when an alias chain ends in a
    /// missing entry, and [`RegistryError::CycleDetected`] for alias loops.
    pub fn resolve(&self, name: &str) -> Result<CounterStyle, RegistryError> {
        let mut current = name;
        let mut path: Vec<&str> = vec![name];
        let mut seen: HashSet<&str> = HashSet::from([name]);

        loop {
            match self.entries.get(current) {
                Some(CounterValue::Style(style)) => return Ok(style.clone()),
                Some(CounterValue::Alias(target)) => {
                    let target = target.as_str();
                    path.push(target);
                    if !seen.insert(target) {
                        return Err(RegistryError::CycleDetected {
                            path: path.iter().map(|s| s.to_string()).collect(),
                        });
                    }
                    current = target;
                }
                None if current == name => {
                    return Err(RegistryError::NotFound {
                        name: name.to_string(),
                    });
                }
                None => {
                    return Err(RegistryError::UnresolvedAlias {
                        from: path[path.len() - 2].to_string(),
                        to: current.to_string(),
                    });
                }
            }
        }
    }

    /// Resolves a name to its style, or `None` if that fails.
    pub fn get(&self, name: &str) -> Option<CounterStyle> {
        self.resolve(name).ok()
    }

    /// Renders `index` with the named style.
    ///
    /// # Errors
    ///
    /// Fails only when the name does not resolve; rendering itself always
    /// produces a label.
    pub fn format(&self, name: &str, index: i64) -> Result<String, RegistryError> {
        self.resolve(name).map(|style| style.format(index))
    }

    /// Validates that every alias resolves to a concrete style.
    ///
    /// # Errors
    ///
    /// Returns the first dangling or cyclic alias found, in name order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (name, value) in &self.entries {
            if let CounterValue::Alias(_) = value {
                self.resolve(name)?;
            }
        }
        debug!("validated {} counter style entries", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_has() {
        let styles = CounterStyles::new().add("plain", CounterStyle::decimal());
        assert!(styles.has("plain"));
        assert!(!styles.has("other"));
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let styles = CounterStyles::default();
        assert!(styles.is_empty());
        assert_eq!(
            styles.resolve("decimal").unwrap_err(),
            RegistryError::NotFound {
                name: "decimal".to_string()
            }
        );
    }

    #[test]
    fn test_predefined_contains_catalog() {
        let styles = CounterStyles::predefined();
        assert!(styles.has("decimal"));
        assert!(styles.has("korean-hanja-formal"));
        assert!(styles.has("lower-latin"));
        assert_eq!(
            styles.len(),
            predefined::CATALOG.len() + predefined::ALIASES.len()
        );
        assert!(styles.validate().is_ok());
    }

    #[test]
    fn test_alias_chain() {
        let styles = CounterStyles::predefined()
            .add("heading", "chapter")
            .add("chapter", "upper-latin");
        assert_eq!(styles.format("heading", 27).unwrap(), "AA");
    }

    #[test]
    fn test_replace_entry() {
        let styles = CounterStyles::predefined().add("decimal", "lower-roman");
        assert_eq!(styles.format("decimal", 4).unwrap(), "iv");
    }

    #[test]
    fn test_unresolved_alias() {
        let styles = CounterStyles::new().add("a", "b").add("b", "missing");
        assert_eq!(
            styles.resolve("a").unwrap_err(),
            RegistryError::UnresolvedAlias {
                from: "b".to_string(),
                to: "missing".to_string(),
            }
        );
        assert!(styles.validate().is_err());
    }

    #[test]
    fn test_cycle_detected() {
        let styles = CounterStyles::new().add("a", "b").add("b", "a");
        assert_eq!(
            styles.resolve("a").unwrap_err(),
            RegistryError::CycleDetected {
                path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            }
        );
    }

    #[test]
    fn test_self_alias_is_cycle() {
        let styles = CounterStyles::new().add("loop", "loop");
        assert!(matches!(
            styles.validate(),
            Err(RegistryError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_get_returns_none_on_error() {
        let styles = CounterStyles::new().add("a", "missing");
        assert!(styles.get("a").is_none());
        assert!(styles.get("zzz").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let styles = CounterStyles::new()
            .add("b", CounterStyle::decimal())
            .add("a", "b");
        let names: Vec<&str> = styles.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_entry_does_not_follow_alias() {
        let styles = CounterStyles::new().add("a", "b");
        assert_eq!(
            styles.entry("a"),
            Some(&CounterValue::Alias("b".to_string()))
        );
    }

    #[test]
    fn test_insert_in_place() {
        let mut styles = CounterStyles::new();
        styles.insert("x", CounterStyle::decimal());
        assert_eq!(styles.format("x", -2).unwrap(), "-2");
    }
}
