//! Template parsing errors.

/// Error returned when a template string cannot be parsed.
///
/// Offsets are byte positions of the offending brace in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a style the registry does not know.
    UnknownStyle { name: String },
    /// A `{` has no matching `}`.
    Unterminated { offset: usize },
    /// A placeholder contains no style name.
    EmptyPlaceholder { offset: usize },
    /// A single `}` appears outside a placeholder.
    UnmatchedBrace { offset: usize },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::UnknownStyle { name } => {
                write!(f, "unknown counter style '{}'", name)
            }
            TemplateError::Unterminated { offset } => {
                write!(f, "unterminated placeholder starting at byte {}", offset)
            }
            TemplateError::EmptyPlaceholder { offset } => {
                write!(f, "empty placeholder at byte {}", offset)
            }
            TemplateError::UnmatchedBrace { offset } => {
                write!(f, "unmatched '}}' at byte {} (use '}}}}' for a literal brace)", offset)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let err = TemplateError::UnknownStyle {
            name: "klingon".to_string(),
        };
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_unmatched_brace_display() {
        let msg = TemplateError::UnmatchedBrace { offset: 4 }.to_string();
        assert!(msg.contains("byte 4"));
        assert!(msg.contains("'}}'"));
    }
}
