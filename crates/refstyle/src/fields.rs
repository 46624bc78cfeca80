//! The bibliographic input record.

use serde::{Deserialize, Serialize};

/// Free-text bibliographic fields collected from the caller.
///
/// Every field is optional free-form text; an empty (or whitespace-only)
/// string means the field is absent. The record has no identity or
/// lifecycle — it is built from user input at call time and discarded after
/// formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationFields {
    /// Author(s), e.g. `"Jane Smith and John Doe"`. Multiple authors are
    /// separated by the literal `" and "`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,

    /// Publication year; free-form, typically a 4-digit year.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub year: String,

    /// Title of the work.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Publisher, journal, or container.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Optional locator URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl CitationFields {
    /// Author field, trimmed; `None` when absent.
    pub(crate) fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    /// Year field, trimmed; `None` when absent.
    pub(crate) fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    /// Title field, trimmed; `None` when absent.
    pub(crate) fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Source field, trimmed; `None` when absent.
    pub(crate) fn source(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    /// URL field, trimmed; `None` when absent.
    pub(crate) fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }
}

/// A field is present only when non-empty after trimming whitespace.
fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_are_absent() {
        let fields = CitationFields {
            author: "  ".to_string(),
            title: " T ".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.author(), None);
        assert_eq!(fields.title(), Some("T"));
        assert_eq!(fields.year(), None);
    }

    #[test]
    fn deserializes_partial_record() {
        let fields: CitationFields =
            serde_json::from_str(r#"{"author": "Jane Smith", "year": "2024"}"#).unwrap();
        assert_eq!(fields.author, "Jane Smith");
        assert_eq!(fields.year, "2024");
        assert!(fields.title.is_empty());
        assert!(fields.source.is_empty());
        assert!(fields.url.is_empty());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let fields = CitationFields {
            title: "T".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"title":"T"}"#);
    }
}
