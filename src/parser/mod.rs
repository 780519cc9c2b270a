//! OpenLyrics parse pipeline
//!
//! Three stages behind one public function:
//! 1. **Suspend**: entity-escape `<lines>` spans so malformed break
//!    markup cannot break the structural parse
//! 2. **Normalize**: structural parse (roxmltree), then conversion into
//!    the owned tree with deterministic sequence shapes
//! 3. **Read**: map the tree into the song model, failing fast when a
//!    required top-level section is absent

pub(crate) mod reader;
pub(crate) mod tree;

use crate::errors::ParseError;
use crate::types::Song;

/// Parse an OpenLyrics XML document into a [`Song`].
///
/// Fails when the input is not well-formed XML, when the document root
/// is not `<song>`, or when one of the required `<properties>`,
/// `<format>` or `<lyrics>` sections is absent.
pub fn parse_document(xml: &str) -> Result<Song, ParseError> {
    let suspended = tree::suspend_line_markup(xml);
    let doc = roxmltree::Document::parse(&suspended)
        .map_err(|err| ParseError::InvalidXml(err.to_string()))?;
    let song = tree::from_document(&doc);

    if song.name != "song" {
        return Err(ParseError::UnexpectedRoot(song.name));
    }
    let properties = song
        .child("properties")
        .ok_or(ParseError::MissingSection("properties"))?;
    let format = song
        .child("format")
        .ok_or(ParseError::MissingSection("format"))?;
    let lyrics = song
        .child("lyrics")
        .ok_or(ParseError::MissingSection("lyrics"))?;

    let verses = reader::read_verses(lyrics.sequence("verse"));
    let instruments = reader::read_instruments(lyrics.sequence("instrument"));
    log::debug!(
        "parsed OpenLyrics document: {} verse(s), {} instrument(s)",
        verses.len(),
        instruments.len()
    );

    Ok(Song {
        meta: reader::read_meta(&song),
        properties: reader::read_properties(properties),
        format: reader::read_format(format),
        verses,
        instruments,
    })
}
