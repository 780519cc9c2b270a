//! Error types for OpenLyrics conversion
//!
//! Two error kinds, one per direction: `ParseError` for malformed or
//! structurally incomplete documents, `BuildError` for serialization
//! failures. Both conversions are deterministic pure transforms, so a
//! failure recurs on the same input and there is nothing to retry.

use thiserror::Error;

/// Errors raised while parsing an OpenLyrics document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is not well-formed XML
    #[error("invalid XML: {0}")]
    InvalidXml(String),

    /// The document root is not a `<song>` element
    #[error("expected <song> document root, found <{0}>")]
    UnexpectedRoot(String),

    /// A required top-level section is absent. A valid OpenLyrics
    /// document always carries `<properties>`, `<format>` and `<lyrics>`.
    #[error("missing required <{0}> section")]
    MissingSection(&'static str),
}

/// Errors raised while building an OpenLyrics document
#[derive(Debug, Error)]
pub enum BuildError {
    /// The XML writer failed to serialize the document tree
    #[error("XML serialization failed: {0}")]
    Serialize(#[from] quick_xml::Error),

    /// The serialized document is not valid UTF-8
    #[error("serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
