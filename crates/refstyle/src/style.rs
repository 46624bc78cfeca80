//! The closed set of supported citation styles.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A citation style governing field order and punctuation.
///
/// The set is closed: malformed style values are rejected when parsed
/// ([`CitationStyle::from_str`]), never at format time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// APA 7th edition (author-name inversion applies on this path).
    Apa,
    /// MLA 9th edition.
    Mla,
    /// Chicago, author-date variant.
    Chicago,
}

impl CitationStyle {
    /// All supported styles, in presentation order.
    pub const ALL: [CitationStyle; 3] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
    ];

    /// The canonical (parseable) name of this style.
    pub fn name(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "apa",
            CitationStyle::Mla => "mla",
            CitationStyle::Chicago => "chicago",
        }
    }

    /// Human-facing label, e.g. for a style picker.
    pub fn label(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA 7",
            CitationStyle::Mla => "MLA 9",
            CitationStyle::Chicago => "Chicago",
        }
    }

    /// Canonical names of all supported styles.
    pub fn names() -> [&'static str; 3] {
        [
            CitationStyle::Apa.name(),
            CitationStyle::Mla.name(),
            CitationStyle::Chicago.name(),
        ]
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CitationStyle {
    type Err = Error;

    /// Parse a style name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(CitationStyle::Apa),
            "mla" => Ok(CitationStyle::Mla),
            "chicago" => Ok(CitationStyle::Chicago),
            _ => Err(Error::UnknownStyle {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for style in CitationStyle::ALL {
            assert_eq!(style.name().parse::<CitationStyle>().unwrap(), style);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("APA".parse::<CitationStyle>().unwrap(), CitationStyle::Apa);
        assert_eq!(
            " Chicago ".parse::<CitationStyle>().unwrap(),
            CitationStyle::Chicago
        );
    }

    #[test]
    fn parse_rejects_unknown_style() {
        let err = "ieee".parse::<CitationStyle>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownStyle {
                value: "ieee".to_string()
            }
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CitationStyle::Mla).unwrap();
        assert_eq!(json, "\"mla\"");
        let back: CitationStyle = serde_json::from_str("\"chicago\"").unwrap();
        assert_eq!(back, CitationStyle::Chicago);
    }
}
