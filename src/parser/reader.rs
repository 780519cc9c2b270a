//! Song reader
//!
//! Pure mapping from the normalized XML tree into the song model. No
//! I/O, no mutation of the input tree; structural preconditions are
//! checked by the entry point before these run.

use crate::parser::tree::TreeNode;
use crate::types::{
    Author, Format, FormatTag, FormatTags, Instrument, Meta, Properties, Songbook, Tempo, Theme,
    Title, Verse,
};

pub(crate) fn read_meta(song: &TreeNode) -> Meta {
    Meta {
        lang: attr_string(song, "xml:lang"),
        version: attr_string(song, "version"),
        created_in: attr_string(song, "createdIn"),
        modified_in: attr_string(song, "modifiedIn"),
        modified_date: attr_string(song, "modifiedDate"),
    }
}

pub(crate) fn read_properties(properties: &TreeNode) -> Properties {
    let titles = properties
        .child("titles")
        .map(|titles| {
            titles
                .sequence("title")
                .iter()
                .map(|title| Title {
                    value: node_string(title),
                    lang: attr_string(title, "lang"),
                    translit: attr_string(title, "translit"),
                    original: title.attribute("original").map(|flag| flag == "true"),
                })
                .collect()
        })
        .unwrap_or_default();

    let authors = properties
        .child("authors")
        .map(|authors| {
            authors
                .sequence("author")
                .iter()
                .map(|author| Author {
                    value: node_string(author),
                    kind: attr_string(author, "type"),
                    lang: attr_string(author, "lang"),
                })
                .collect()
        })
        .unwrap_or_default();

    let comments = properties
        .child("comments")
        .map(|comments| {
            comments
                .sequence("comment")
                .iter()
                .map(node_string)
                .collect()
        })
        .unwrap_or_default();

    let songbooks = properties
        .child("songbooks")
        .map(|songbooks| {
            songbooks
                .sequence("songbook")
                .iter()
                .map(|songbook| Songbook {
                    name: attr_string(songbook, "name").unwrap_or_default(),
                    entry: attr_string(songbook, "entry"),
                })
                .collect()
        })
        .unwrap_or_default();

    let themes = properties
        .child("themes")
        .map(|themes| {
            themes
                .sequence("theme")
                .iter()
                .map(|theme| Theme {
                    value: node_string(theme),
                    id: attr_string(theme, "id"),
                    lang: attr_string(theme, "lang"),
                })
                .collect()
        })
        .unwrap_or_default();

    let tempo = properties.child("tempo").map(|tempo| Tempo {
        value: node_string(tempo),
        unit: attr_string(tempo, "type"),
    });

    Properties {
        titles,
        authors,
        comments,
        songbooks,
        themes,
        copyright: child_text(properties, "copyright"),
        ccli_no: child_text(properties, "ccliNo"),
        released: child_text(properties, "released"),
        transposition: child_text(properties, "transposition"),
        tempo,
        key: child_text(properties, "key"),
        variant: child_text(properties, "variant"),
        publisher: child_text(properties, "publisher"),
        keywords: child_text(properties, "keywords"),
        verse_order: child_text(properties, "verseOrder"),
    }
}

pub(crate) fn read_format(format: &TreeNode) -> Format {
    let tags = format
        .sequence("tags")
        .iter()
        .map(|group| FormatTags {
            application: attr_string(group, "application").unwrap_or_default(),
            tags: group
                .sequence("tag")
                .iter()
                .map(|tag| FormatTag {
                    name: attr_string(tag, "name").unwrap_or_default(),
                    open: child_text(tag, "open"),
                    close: child_text(tag, "close"),
                })
                .collect(),
        })
        .collect();
    Format { tags }
}

pub(crate) fn read_verses(verses: &[TreeNode]) -> Vec<Verse> {
    verses
        .iter()
        .map(|verse| Verse {
            name: attr_string(verse, "name").unwrap_or_default(),
            lang: attr_string(verse, "lang"),
            translit: attr_string(verse, "translit"),
            lines: read_lines(verse),
        })
        .collect()
}

pub(crate) fn read_instruments(instruments: &[TreeNode]) -> Vec<Instrument> {
    instruments
        .iter()
        .map(|instrument| Instrument {
            name: attr_string(instrument, "name").unwrap_or_default(),
            lang: attr_string(instrument, "lang"),
            translit: attr_string(instrument, "translit"),
            lines: read_lines(instrument),
        })
        .collect()
}

/// Line-groups arrive already normalized by the tree layer; an empty
/// `<lines/>` element contributes an empty line-group.
fn read_lines(section: &TreeNode) -> Vec<String> {
    section.sequence("lines").iter().map(node_string).collect()
}

fn attr_string(node: &TreeNode, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

fn child_text(node: &TreeNode, name: &str) -> Option<String> {
    node.child(name).map(node_string)
}

fn node_string(node: &TreeNode) -> String {
    node.text().unwrap_or_default().to_string()
}
