//! Song model types
//!
//! This module defines the typed song model shared by both conversion
//! directions:
//! - Document-level metadata (`Meta`)
//! - Song properties (`Properties` and its entry types)
//! - Formatting hints (`Format`)
//! - Lyric content (`Verse`, `Instrument`)
//!
//! Everything derives `Default`, so a partial song for building is plain
//! struct-update syntax on `Song::default()`.

use serde::{Deserialize, Serialize};

// ============================================================================
// ROOT
// ============================================================================

/// A complete song: the result of parsing an OpenLyrics document, or the
/// (possibly partial) input to building one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Document-level attributes from the `<song>` root element
    pub meta: Meta,

    /// Song properties (titles, authors, songbooks, ...)
    pub properties: Properties,

    /// Application-specific formatting tag groups
    pub format: Format,

    /// Sung sections, in document order
    pub verses: Vec<Verse>,

    /// Instrumental sections, in document order
    pub instruments: Vec<Instrument>,
}

// ============================================================================
// META
// ============================================================================

/// Attributes of the `<song>` root element.
///
/// All fields are optional; on build, absent fields keep the empty-string
/// placeholders the format requires (except `version`, which defaults to
/// `0.9`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Document language code (`xml:lang`)
    pub lang: Option<String>,

    /// OpenLyrics format version of the document
    pub version: Option<String>,

    /// Application that created the document
    pub created_in: Option<String>,

    /// Application that last modified the document
    pub modified_in: Option<String>,

    /// Timestamp of the last modification (ISO 8601 in well-formed files,
    /// carried through verbatim)
    pub modified_date: Option<String>,
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// Contents of the `<properties>` section.
///
/// The sequence fields preserve document order. `titles` is the one
/// sequence the format requires to be non-empty; the parser carries
/// whatever the document holds and the builder emits the other sequences
/// and scalars only when supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub titles: Vec<Title>,
    pub authors: Vec<Author>,
    pub comments: Vec<String>,
    pub songbooks: Vec<Songbook>,
    pub themes: Vec<Theme>,

    /// Copyright statement
    pub copyright: Option<String>,

    /// CCLI license number
    pub ccli_no: Option<String>,

    /// Release year or date
    pub released: Option<String>,

    /// Chord transposition offset in semitones, carried as text
    pub transposition: Option<String>,

    pub tempo: Option<Tempo>,

    /// Musical key (e.g. "Eb")
    pub key: Option<String>,

    /// Variant description distinguishing arrangements of the same song
    pub variant: Option<String>,

    pub publisher: Option<String>,

    /// Comma-separated search keywords
    pub keywords: Option<String>,

    /// Space-separated verse name order (e.g. "v1 c v2 c")
    pub verse_order: Option<String>,
}

/// A song title entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Title text
    pub value: String,

    /// Title language code
    pub lang: Option<String>,

    /// Transliteration language code
    pub translit: Option<String>,

    /// Marks the original-language title
    pub original: Option<bool>,
}

impl Title {
    pub fn new(value: impl Into<String>) -> Self {
        Title {
            value: value.into(),
            ..Title::default()
        }
    }
}

/// A song author entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    pub value: String,

    /// Author type: "words", "music" or "translation"
    pub kind: Option<String>,

    /// Translation language, for translation authors
    pub lang: Option<String>,
}

impl Author {
    pub fn new(value: impl Into<String>) -> Self {
        Author {
            value: value.into(),
            ..Author::default()
        }
    }
}

/// A songbook reference. Attribute-only: songbook elements carry no body
/// and serialize self-closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Songbook {
    /// Songbook name
    pub name: String,

    /// Entry (page or song number) within the songbook
    pub entry: Option<String>,
}

impl Songbook {
    pub fn new(name: impl Into<String>) -> Self {
        Songbook {
            name: name.into(),
            entry: None,
        }
    }
}

/// A theme/category entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme text
    pub value: String,

    /// Theme identifier
    pub id: Option<String>,

    /// Theme language code
    pub lang: Option<String>,
}

impl Theme {
    pub fn new(value: impl Into<String>) -> Self {
        Theme {
            value: value.into(),
            ..Theme::default()
        }
    }
}

/// Song tempo with its unit (`type` attribute, e.g. "bpm").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tempo {
    pub value: String,
    pub unit: Option<String>,
}

// ============================================================================
// FORMAT
// ============================================================================

/// Contents of the `<format>` section: per-application formatting tag
/// groups, carried through without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub tags: Vec<FormatTags>,
}

/// One `<tags>` group belonging to a single application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTags {
    /// Application the tag definitions belong to
    pub application: String,

    pub tags: Vec<FormatTag>,
}

/// A single formatting tag definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTag {
    pub name: String,
    pub open: Option<String>,
    pub close: Option<String>,
}

// ============================================================================
// LYRICS
// ============================================================================

/// A sung section of the song.
///
/// Each entry of `lines` is one line-group: the normalized text of one
/// `<lines>` element, with break markers converted to literal newlines
/// and comment spans stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Section name (e.g. "v1", "c", "b")
    pub name: String,

    /// Section language code
    pub lang: Option<String>,

    /// Transliteration language code
    pub translit: Option<String>,

    /// Normalized line-groups, in document order
    pub lines: Vec<String>,
}

impl Verse {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Verse {
            name: name.into(),
            lang: None,
            translit: None,
            lines,
        }
    }
}

/// An instrumental section. Structurally identical to [`Verse`] but
/// denotes music without sung text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Section name (e.g. "intro", "solo")
    pub name: String,

    /// Section language code
    pub lang: Option<String>,

    /// Transliteration language code
    pub translit: Option<String>,

    /// Normalized line-groups, in document order
    pub lines: Vec<String>,
}

impl Instrument {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Instrument {
            name: name.into(),
            lang: None,
            translit: None,
            lines,
        }
    }
}
