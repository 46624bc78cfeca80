//! Per-style citation assembly.
//!
//! Formatting is total: it never fails and never returns an empty string.
//! Author, year, and title always render, falling back to placeholders when
//! absent; source and URL are omitted entirely (with their punctuation)
//! when absent.

use crate::fields::CitationFields;
use crate::name::normalize_author_list;
use crate::style::CitationStyle;

/// Placeholder for an absent author field.
const AUTHOR_PLACEHOLDER: &str = "Author";
/// Placeholder for an absent title field.
const TITLE_PLACEHOLDER: &str = "Title";

/// Formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Whether APA formatting rewrites `"First Last"` author names into
    /// `"Last, F."` form. MLA and Chicago pass the author field through
    /// unmodified either way.
    pub normalize_author_names: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            normalize_author_names: true,
        }
    }
}

/// Format one citation line in the given style.
///
/// Deterministic and total over its input domain: any combination of empty
/// fields produces a well-formed, non-empty, single-line citation.
pub fn format(fields: &CitationFields, style: CitationStyle, options: &FormatOptions) -> String {
    let citation = match style {
        CitationStyle::Apa => format_apa(fields, options),
        CitationStyle::Mla => format_mla(fields),
        CitationStyle::Chicago => format_chicago(fields),
    };
    citation.trim_end().to_string()
}

/// APA 7: `Author, A. A. (Year). Title. Source. URL`
fn format_apa(fields: &CitationFields, options: &FormatOptions) -> String {
    let author = if options.normalize_author_names {
        fields.author().and_then(normalize_author_list)
    } else {
        fields.author().map(str::to_string)
    };
    let author = author.unwrap_or_else(|| AUTHOR_PLACEHOLDER.to_string());

    let mut out = format!(
        "{} ({}). {}.",
        author,
        fields.year().unwrap_or("n.d."),
        fields.title().unwrap_or(TITLE_PLACEHOLDER),
    );
    if let Some(source) = fields.source() {
        out.push(' ');
        out.push_str(source);
        out.push('.');
    }
    if let Some(url) = fields.url() {
        out.push(' ');
        out.push_str(url);
    }
    out
}

/// MLA 9: `Author. "Title." Source, Year, URL.`
fn format_mla(fields: &CitationFields) -> String {
    let mut out = format!(
        "{}. \"{}.\" ",
        fields.author().unwrap_or(AUTHOR_PLACEHOLDER),
        fields.title().unwrap_or(TITLE_PLACEHOLDER),
    );
    if let Some(source) = fields.source() {
        out.push_str(source);
        out.push_str(", ");
    }
    out.push_str(fields.year().unwrap_or("no date"));
    if let Some(url) = fields.url() {
        out.push_str(", ");
        out.push_str(url);
    }
    out.push('.');
    out
}

/// Chicago author-date: `Author. "Title." Source (Year). URL`
fn format_chicago(fields: &CitationFields) -> String {
    let mut out = format!(
        "{}. \"{}.\"",
        fields.author().unwrap_or(AUTHOR_PLACEHOLDER),
        fields.title().unwrap_or(TITLE_PLACEHOLDER),
    );
    if let Some(source) = fields.source() {
        out.push(' ');
        out.push_str(source);
    }
    out.push_str(&format!(" ({}).", fields.year().unwrap_or("n.d.")));
    if let Some(url) = fields.url() {
        out.push(' ');
        out.push_str(url);
    }
    out
}
