//! OpenLyrics document conversion
//!
//! Bidirectional conversion between a typed song model and the
//! [OpenLyrics](https://openlyrics.org) 0.9 XML format:
//!
//! - [`parse_document`] maps an XML document into a normalized [`Song`]
//! - [`build_document`] produces an XML document from a (possibly
//!   partial) [`Song`], filling in the defaults the format requires
//!
//! Both directions are synchronous pure functions over in-memory
//! strings; no I/O is performed and no state is shared between calls.
//!
//! # Basic usage
//!
//! ```ignore
//! use openlyrics::{build_document, parse_document, Properties, Song, Title};
//!
//! let song = Song {
//!     properties: Properties {
//!         titles: vec![Title::new("Amazing Grace")],
//!         ..Properties::default()
//!     },
//!     ..Song::default()
//! };
//! let xml = build_document(&song)?;
//! let reparsed = parse_document(&xml)?;
//! assert_eq!(reparsed.properties.titles[0].value, "Amazing Grace");
//! ```

pub mod builder;
pub mod errors;
pub mod parser;
pub mod types;

mod schema;

// Re-export the public API at the crate root
pub use builder::build_document;
pub use errors::{BuildError, ParseError};
pub use parser::parse_document;
pub use schema::{FORMAT_VERSION, NAMESPACE};
pub use types::{
    Author, Format, FormatTag, FormatTags, Instrument, Meta, Properties, Song, Songbook, Tempo,
    Theme, Title, Verse,
};
