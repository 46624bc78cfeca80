//! Error types for citation formatting.
//!
//! Formatting itself is total and never fails; the only fallible surface is
//! resolving a style name supplied as text.

use crate::style::CitationStyle;

/// Result type alias for refstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving citation-formatting inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A style name did not match any supported citation style.
    #[error("unknown citation style '{value}': expected one of {}", CitationStyle::names().join(", "))]
    UnknownStyle { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_lists_valid_names() {
        let err = Error::UnknownStyle {
            value: "ieee".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("unknown citation style 'ieee'"), "Got: {}", display);
        assert!(display.contains("apa"), "Got: {}", display);
        assert!(display.contains("mla"), "Got: {}", display);
        assert!(display.contains("chicago"), "Got: {}", display);
    }
}
