//! Declarative OpenLyrics schema data
//!
//! Everything format-specific that drives the generic XML layers lives
//! here as static data: the namespace and version constants, the set of
//! paths that always normalize to sequences, the line-container paths
//! whose inner markup is never parsed structurally, the self-closing tag
//! exception, and the text post-processor for line content. Supporting a
//! new element shape is a data change in this module, not a code change
//! in the parser or builder.

use once_cell::sync::Lazy;
use regex::Regex;

/// OpenLyrics XML namespace
pub const NAMESPACE: &str = "http://openlyrics.info/namespace/2009/song";

/// OpenLyrics format version emitted by default
pub const FORMAT_VERSION: &str = "0.9";

/// Stylesheet processing instruction body emitted after the XML declaration
pub(crate) const STYLESHEET_PI: &str =
    r#"xml-stylesheet href="../stylesheets/openlyrics.css" type="text/css""#;

/// Dotted paths (from the document root) that are always represented as
/// ordered sequences, even when the document holds a single occurrence.
/// Keeps the model shape uniform regardless of document variance.
pub(crate) const SEQUENCE_PATHS: &[&str] = &[
    "song.properties.titles.title",
    "song.properties.titles.title.text",
    "song.properties.authors.author",
    "song.properties.comments.comment",
    "song.properties.songbooks.songbook",
    "song.properties.themes.theme",
    "song.lyrics.verse",
    "song.lyrics.verse.lines",
    "song.lyrics.instrument",
    "song.lyrics.instrument.lines",
];

/// Dotted paths whose inner content is handed to [`process_node_text`]
/// as raw text instead of being parsed into child elements. Line content
/// may hold break markup too malformed to survive structural parsing.
pub(crate) const SUSPENDED_PATHS: &[&str] = &[
    "song.lyrics.verse.lines",
    "song.lyrics.instrument.lines",
];

/// Tags serialized self-closed when they have no body. Every other empty
/// element is written as an open/close pair.
pub(crate) const SELF_CLOSING_TAGS: &[&str] = &["songbook"];

pub(crate) fn is_sequence_path(path: &str) -> bool {
    SEQUENCE_PATHS.contains(&path)
}

pub(crate) fn is_suspended_path(path: &str) -> bool {
    SUSPENDED_PATHS.contains(&path)
}

pub(crate) fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}

/// Break markers in any of their well-formed or malformed spellings:
/// `<br>`, `<br/>`, `<br />`, `</br>`, any case, optional internal
/// whitespace. A newline directly after the marker is absorbed so the
/// replacement never doubles newlines.
static BREAK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\s*/?\s*br\s*/?\s*>\r?\n?").expect("valid break-tag pattern"));

/// XML/HTML comment spans, non-greedy across newlines. An unterminated
/// comment does not match and is left in place.
static COMMENT_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

/// Text post-processor keyed by node path.
///
/// Returns `Some(processed)` for line-container paths, where every break
/// marker becomes a single literal newline, comment spans are stripped,
/// and the basic XML entities are decoded so the model holds the logical
/// text. Returns `None` for every other path, meaning the value is
/// carried through unmodified.
pub(crate) fn process_node_text(path: &str, text: &str) -> Option<String> {
    if !is_suspended_path(path) {
        return None;
    }
    let text = BREAK_TAG.replace_all(text, "\n");
    let text = COMMENT_SPAN.replace_all(&text, "");
    Some(decode_entities(&text))
}

/// Decodes the five basic XML entities. Line content arrives as raw
/// text, so references in it are still encoded; decoding here keeps
/// building and re-parsing idempotent (the writer re-escapes on output).
/// `&amp;` is decoded last so it cannot fabricate new references.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSE_LINES: &str = "song.lyrics.verse.lines";

    #[test]
    fn break_tag_variants_become_newlines() {
        let processed = process_node_text(VERSE_LINES, "a<br>b<BR/>c<br />d</br>e").unwrap();
        assert_eq!(processed, "a\nb\nc\nd\ne");
    }

    #[test]
    fn trailing_newline_after_break_is_not_doubled() {
        let processed = process_node_text(VERSE_LINES, "a<br/>\nb<br/>\r\nc").unwrap();
        assert_eq!(processed, "a\nb\nc");
    }

    #[test]
    fn comment_spans_are_stripped() {
        let processed =
            process_node_text(VERSE_LINES, "keep <!-- drop\nthis -->me<!---->!").unwrap();
        assert_eq!(processed, "keep me!");
    }

    #[test]
    fn unterminated_comment_is_left_verbatim() {
        let processed = process_node_text(VERSE_LINES, "keep <!-- the rest").unwrap();
        assert_eq!(processed, "keep <!-- the rest");
    }

    #[test]
    fn entity_references_are_decoded() {
        let processed = process_node_text(VERSE_LINES, "you &amp; me &lt;here&gt;").unwrap();
        assert_eq!(processed, "you & me <here>");
    }

    #[test]
    fn decoded_ampersand_does_not_fabricate_references() {
        // Logical text "&lt;" arrives doubly encoded; one decode step
        // must not cascade into "<"
        let processed = process_node_text(VERSE_LINES, "a &amp;lt; b").unwrap();
        assert_eq!(processed, "a &lt; b");
    }

    #[test]
    fn other_paths_pass_through() {
        assert_eq!(process_node_text("song.properties.titles.title", "a<br>b"), None);
    }

    #[test]
    fn single_title_path_is_a_sequence() {
        assert!(is_sequence_path("song.properties.titles.title"));
        assert!(!is_sequence_path("song.properties.titles"));
        assert!(!is_sequence_path("song.properties"));
    }
}
