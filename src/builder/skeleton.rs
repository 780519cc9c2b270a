//! Canonical skeleton and overwrite operations
//!
//! The skeleton is the fixed OpenLyrics-shaped template: namespace and
//! version attributes populated, empty placeholders for the meta
//! attributes, a `properties/titles` placeholder, an empty `format`
//! node and an empty `lyrics` node. The overwrite operations fill it
//! from caller-supplied song data; each consumes the tree and returns
//! the updated one, so there is no shared mutable template and no
//! hidden ordering between them (they touch disjoint sub-trees).

use crate::builder::element::XmlElement;
use crate::schema;
use crate::types::{Format, Instrument, Meta, Properties, Verse};

pub(crate) fn skeleton() -> XmlElement {
    XmlElement::new("song")
        .attr("xmlns", schema::NAMESPACE)
        .attr("xml:lang", "")
        .attr("version", schema::FORMAT_VERSION)
        .attr("createdIn", "")
        .attr("modifiedIn", "")
        .attr("modifiedDate", "")
        .child(XmlElement::new("properties").child(XmlElement::new("titles")))
        .child(XmlElement::new("format"))
        .child(XmlElement::new("lyrics"))
}

/// Sets each meta attribute the caller supplied a non-empty value for;
/// the others keep the template's empty-string defaults, which the
/// format tolerates but requires to exist.
pub(crate) fn overwrite_meta(mut song: XmlElement, meta: &Meta) -> XmlElement {
    if let Some(lang) = supplied(&meta.lang) {
        song = song.set_attr("xml:lang", lang);
    }
    if let Some(version) = supplied(&meta.version) {
        song = song.set_attr("version", version);
    }
    if let Some(created_in) = supplied(&meta.created_in) {
        song = song.set_attr("createdIn", created_in);
    }
    if let Some(modified_in) = supplied(&meta.modified_in) {
        song = song.set_attr("modifiedIn", modified_in);
    }
    if let Some(modified_date) = supplied(&meta.modified_date) {
        song = song.set_attr("modifiedDate", modified_date);
    }
    song
}

/// Replaces the titles placeholder with the caller's titles and emits
/// the optional sequences and scalar properties only when supplied; an
/// unsupplied sequence is omitted entirely rather than left as an empty
/// placeholder.
pub(crate) fn overwrite_properties(song: XmlElement, properties: &Properties) -> XmlElement {
    song.map_child("properties", |_| {
        let titles = XmlElement::new("titles").children(properties.titles.iter().map(|title| {
            XmlElement::new("title")
                .opt_attr("lang", title.lang.as_deref())
                .opt_attr("translit", title.translit.as_deref())
                .opt_attr(
                    "original",
                    title
                        .original
                        .map(|original| if original { "true" } else { "false" }),
                )
                .text(&title.value)
        }));
        let mut node = XmlElement::new("properties").child(titles);

        if !properties.authors.is_empty() {
            node = node.child(XmlElement::new("authors").children(properties.authors.iter().map(
                |author| {
                    XmlElement::new("author")
                        .opt_attr("type", author.kind.as_deref())
                        .opt_attr("lang", author.lang.as_deref())
                        .text(&author.value)
                },
            )));
        }
        if !properties.comments.is_empty() {
            node = node.child(XmlElement::new("comments").children(
                properties
                    .comments
                    .iter()
                    .map(|comment| XmlElement::new("comment").text(comment)),
            ));
        }

        node = scalar(node, "copyright", &properties.copyright);
        node = scalar(node, "ccliNo", &properties.ccli_no);
        node = scalar(node, "released", &properties.released);
        node = scalar(node, "transposition", &properties.transposition);
        if let Some(tempo) = &properties.tempo {
            node = node.child(
                XmlElement::new("tempo")
                    .opt_attr("type", tempo.unit.as_deref())
                    .text(&tempo.value),
            );
        }
        node = scalar(node, "key", &properties.key);
        node = scalar(node, "variant", &properties.variant);
        node = scalar(node, "publisher", &properties.publisher);
        node = scalar(node, "keywords", &properties.keywords);
        node = scalar(node, "verseOrder", &properties.verse_order);

        if !properties.songbooks.is_empty() {
            node = node.child(XmlElement::new("songbooks").children(
                properties.songbooks.iter().map(|songbook| {
                    // Attribute-only; serializes self-closed
                    XmlElement::new("songbook")
                        .attr("name", &songbook.name)
                        .opt_attr("entry", songbook.entry.as_deref())
                }),
            ));
        }
        if !properties.themes.is_empty() {
            node = node.child(XmlElement::new("themes").children(properties.themes.iter().map(
                |theme| {
                    XmlElement::new("theme")
                        .opt_attr("id", theme.id.as_deref())
                        .opt_attr("lang", theme.lang.as_deref())
                        .text(&theme.value)
                },
            )));
        }
        node
    })
}

/// Fills the (empty) format node with the caller's tag groups.
pub(crate) fn overwrite_formats(song: XmlElement, format: &Format) -> XmlElement {
    if format.tags.is_empty() {
        return song;
    }
    song.map_child("format", |node| {
        node.children(format.tags.iter().map(|group| {
            XmlElement::new("tags")
                .attr("application", &group.application)
                .children(group.tags.iter().map(|tag| {
                    let mut node = XmlElement::new("tag").attr("name", &tag.name);
                    if let Some(open) = &tag.open {
                        node = node.child(XmlElement::new("open").text(open));
                    }
                    if let Some(close) = &tag.close {
                        node = node.child(XmlElement::new("close").text(close));
                    }
                    node
                }))
        }))
    })
}

/// Replaces the verse placeholder wholesale. Line-groups are serialized
/// as literal text; newline characters are not converted back into
/// break markup.
pub(crate) fn overwrite_verses(song: XmlElement, verses: &[Verse]) -> XmlElement {
    song.map_child("lyrics", |lyrics| {
        lyrics.children(verses.iter().map(|verse| {
            XmlElement::new("verse")
                .attr("name", &verse.name)
                .opt_attr("lang", verse.lang.as_deref())
                .opt_attr("translit", verse.translit.as_deref())
                .children(
                    verse
                        .lines
                        .iter()
                        .map(|group| XmlElement::new("lines").text(group)),
                )
        }))
    })
}

/// Appends instrument sections only when the caller supplied any;
/// instruments are optional and absent otherwise.
pub(crate) fn overwrite_instruments(song: XmlElement, instruments: &[Instrument]) -> XmlElement {
    if instruments.is_empty() {
        return song;
    }
    song.map_child("lyrics", |lyrics| {
        lyrics.children(instruments.iter().map(|instrument| {
            XmlElement::new("instrument")
                .attr("name", &instrument.name)
                .opt_attr("lang", instrument.lang.as_deref())
                .opt_attr("translit", instrument.translit.as_deref())
                .children(
                    instrument
                        .lines
                        .iter()
                        .map(|group| XmlElement::new("lines").text(group)),
                )
        }))
    })
}

fn scalar(node: XmlElement, name: &str, value: &Option<String>) -> XmlElement {
    match supplied(value) {
        Some(value) => node.child(XmlElement::new(name).text(value)),
        None => node,
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
