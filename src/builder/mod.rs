//! OpenLyrics build pipeline
//!
//! Starts from the canonical skeleton, folds the overwrite operations
//! over it with the caller-supplied song data, then serializes the
//! resulting tree.

pub(crate) mod element;
pub(crate) mod skeleton;
pub(crate) mod writer;

use crate::errors::BuildError;
use crate::types::Song;

/// Build an OpenLyrics XML document from a (possibly partial) [`Song`].
///
/// Required fields the caller did not supply keep their skeleton
/// defaults: empty meta attributes, the `0.9` version, and the
/// `properties/titles` and `lyrics` placeholders. Optional sequences
/// the caller did not supply are omitted from the output entirely.
pub fn build_document(song: &Song) -> Result<String, BuildError> {
    let tree = skeleton::skeleton();
    let tree = skeleton::overwrite_meta(tree, &song.meta);
    let tree = skeleton::overwrite_properties(tree, &song.properties);
    let tree = skeleton::overwrite_formats(tree, &song.format);
    let tree = skeleton::overwrite_verses(tree, &song.verses);
    let tree = skeleton::overwrite_instruments(tree, &song.instruments);

    log::debug!(
        "building OpenLyrics document: {} title(s), {} verse(s)",
        song.properties.titles.len(),
        song.verses.len()
    );
    writer::write_document(&tree)
}
