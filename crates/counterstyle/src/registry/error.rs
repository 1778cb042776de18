//! Registry lookup and validation errors.

/// Error returned when a registry name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No entry with this name exists.
    NotFound { name: String },
    /// An alias references an entry that doesn't exist
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound { name } => {
                write!(f, "counter style '{}' not found", name)
            }
            RegistryError::UnresolvedAlias { from, to } => {
                write!(f, "counter style '{}' aliases non-existent style '{}'", from, to)
            }
            RegistryError::CycleDetected { path } => {
                write!(f, "cycle detected in counter style aliases: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for RegistryError {}
