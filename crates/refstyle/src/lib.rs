//! Heuristic citation formatting for APA, MLA, and Chicago styles.
//!
//! This crate takes free-text bibliographic fields and renders them as a
//! single formatted citation line:
//! - [`CitationFields`]: the five free-form input fields (author, year,
//!   title, source, URL), any of which may be empty
//! - [`CitationStyle`]: the target style (APA 7, MLA 9, or a Chicago
//!   author-date variant)
//! - [`FormatOptions`]: formatting knobs, currently whether APA author
//!   names are reformatted from "First Last" into "Last, F."
//!
//! Formatting is a total function: missing fields degrade to style-specific
//! placeholders (`Author`, `Title`, `n.d.`, `no date`) or are omitted along
//! with their punctuation, and the result is never empty. This is a
//! presentation heuristic over free text, not a bibliographic-standards
//! engine — there is no field validation and no name-order
//! internationalization.
//!
//! # Example
//!
//! ```rust
//! use refstyle::{format, CitationFields, CitationStyle, FormatOptions};
//!
//! let fields = CitationFields {
//!     author: "Jane Smith and John Doe".into(),
//!     year: "2024".into(),
//!     title: "A Study of Studies".into(),
//!     source: "Journal of Meta-Research".into(),
//!     url: String::new(),
//! };
//!
//! let citation = format(&fields, CitationStyle::Apa, &FormatOptions::default());
//! assert_eq!(
//!     citation,
//!     "Smith, J., Doe, J. (2024). A Study of Studies. Journal of Meta-Research."
//! );
//! ```

pub mod error;
pub mod fields;
pub mod format;
pub mod name;
pub mod style;

// Re-export main types
pub use error::{Error, Result};
pub use fields::CitationFields;
pub use format::{format, FormatOptions};
pub use name::ParsedAuthorName;
pub use style::CitationStyle;
