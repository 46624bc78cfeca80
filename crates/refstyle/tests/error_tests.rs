//! Tests for refstyle error types.
//!
//! These verify that the error variants have correct Display output and
//! surface through the public parsing API.

use refstyle::{CitationStyle, Error};

#[test]
fn unknown_style_display() {
    let err = "harvard".parse::<CitationStyle>().unwrap_err();
    let display = err.to_string();
    assert!(
        display.contains("unknown citation style 'harvard'"),
        "Got: {}",
        display
    );
    assert!(display.contains("apa, mla, chicago"), "Got: {}", display);
}

#[test]
fn unknown_style_preserves_original_input() {
    // The error carries the value as supplied, not lowercased.
    let err = "  IEEE ".parse::<CitationStyle>().unwrap_err();
    assert_eq!(
        err,
        Error::UnknownStyle {
            value: "  IEEE ".to_string()
        }
    );
}
