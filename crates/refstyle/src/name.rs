//! Author-name parsing and APA-style normalization.
//!
//! The input is free text, so this is a heuristic: an author list is split
//! on the literal `" and "`, and within each entry the last
//! whitespace-delimited token is taken as the family name and the first
//! token as the given name. There is no handling of particles, suffixes, or
//! non-Western name order.

use std::fmt;

/// A single author name split into given/family parts.
///
/// Derived and ephemeral — only used while rendering an APA author list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAuthorName {
    /// Given name; `None` for single-token names such as `"Plato"`.
    pub given: Option<String>,
    /// Family name (the last whitespace-delimited token).
    pub family: String,
}

impl ParsedAuthorName {
    /// Parse one author entry. Returns `None` for empty input.
    pub fn parse(raw: &str) -> Option<ParsedAuthorName> {
        let mut tokens = raw.split_whitespace();
        let first = tokens.next()?;
        match tokens.next_back() {
            Some(last) => Some(ParsedAuthorName {
                given: Some(first.to_string()),
                family: last.to_string(),
            }),
            // Single token: family name only, no initial to derive.
            None => Some(ParsedAuthorName {
                given: None,
                family: first.to_string(),
            }),
        }
    }
}

impl fmt::Display for ParsedAuthorName {
    /// Render as `"Family, G."`, or bare `"Family"` when no given name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match initial(self.given.as_deref()) {
            Some(init) => write!(f, "{}, {}.", self.family, init),
            None => f.write_str(&self.family),
        }
    }
}

/// First character of the given name, used as the initial.
fn initial(given: Option<&str>) -> Option<char> {
    given?.chars().next()
}

/// Split an author list on the literal `" and "` separator.
///
/// Ordering is preserved and entries are not deduplicated; entries that are
/// empty after trimming are skipped.
pub fn parse_author_list(author: &str) -> Vec<ParsedAuthorName> {
    author
        .split(" and ")
        .filter_map(ParsedAuthorName::parse)
        .collect()
}

/// Rewrite `"First Last and First Last"` as `"Last, F., Last, F."`.
///
/// Returns `None` when the list contains no names at all, so the caller can
/// fall back to its placeholder.
pub fn normalize_author_list(author: &str) -> Option<String> {
    let names = parse_author_list(author);
    if names.is_empty() {
        return None;
    }
    Some(
        names
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
