// Build pipeline: skeleton defaults, overwrite behavior, and
// serialization details

use openlyrics::{
    build_document, Author, Format, FormatTag, FormatTags, Instrument, Meta, Properties, Song,
    Songbook, Tempo, Theme, Title, Verse,
};

fn titled_song(title: &str) -> Song {
    Song {
        properties: Properties {
            titles: vec![Title::new(title)],
            ..Properties::default()
        },
        ..Song::default()
    }
}

#[test]
fn test_build_minimal_defaults() {
    let xml = build_document(&titled_song("Amazing Grace")).expect("build should succeed");

    assert!(
        xml.contains(r#"xmlns="http://openlyrics.info/namespace/2009/song""#),
        "namespace attribute missing: {xml}"
    );
    assert!(xml.contains(r#"version="0.9""#), "default version missing: {xml}");
    assert!(xml.contains(r#"xml:lang="""#), "empty lang placeholder missing: {xml}");
    assert!(xml.contains(r#"createdIn="""#), "empty createdIn placeholder missing: {xml}");
    assert!(xml.contains(r#"modifiedIn="""#), "empty modifiedIn placeholder missing: {xml}");
    assert!(xml.contains(r#"modifiedDate="""#), "empty modifiedDate placeholder missing: {xml}");
    assert!(xml.contains("<title>Amazing Grace</title>"));

    // Unsupplied optional sequences are omitted, not emitted empty
    assert!(!xml.contains("<authors"));
    assert!(!xml.contains("<comments"));
    assert!(!xml.contains("<songbooks"));
    assert!(!xml.contains("<themes"));
    assert!(!xml.contains("<instrument"));
}

#[test]
fn test_build_header() {
    let xml = build_document(&titled_song("T")).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(
        r#"<?xml-stylesheet href="../stylesheets/openlyrics.css" type="text/css"?>"#
    ));
}

#[test]
fn test_build_output_is_trimmed() {
    let xml = build_document(&titled_song("T")).unwrap();
    assert_eq!(xml, xml.trim(), "output should carry no surrounding whitespace");
}

#[test]
fn test_build_meta_overwrites_placeholders() {
    let song = Song {
        meta: Meta {
            lang: Some("de".to_string()),
            created_in: Some("openlyrics 0.1.0".to_string()),
            modified_date: Some("2024-03-01T09:00:00".to_string()),
            ..Meta::default()
        },
        ..titled_song("T")
    };
    let xml = build_document(&song).unwrap();

    assert!(xml.contains(r#"xml:lang="de""#));
    assert!(xml.contains(r#"createdIn="openlyrics 0.1.0""#));
    assert!(xml.contains(r#"modifiedDate="2024-03-01T09:00:00""#));
    // Unsupplied fields keep the empty placeholder
    assert!(xml.contains(r#"modifiedIn="""#));
}

#[test]
fn test_build_songbook_self_closes() {
    let mut song = titled_song("T");
    song.properties.songbooks = vec![
        Songbook {
            name: "Hymnal".to_string(),
            entry: Some("42".to_string()),
        },
        Songbook::new("Chorus Book"),
    ];
    let xml = build_document(&song).unwrap();

    assert!(
        xml.contains(r#"<songbook name="Hymnal" entry="42"/>"#),
        "songbook with entry should self-close: {xml}"
    );
    assert!(
        xml.contains(r#"<songbook name="Chorus Book"/>"#),
        "songbook without entry should self-close, not pair: {xml}"
    );
    assert!(!xml.contains("</songbook>"));
}

#[test]
fn test_build_properties_sections() {
    let mut song = titled_song("T");
    song.properties.authors = vec![
        Author::new("John Newton"),
        Author {
            value: "Trad.".to_string(),
            kind: Some("music".to_string()),
            lang: None,
        },
    ];
    song.properties.comments = vec!["a comment".to_string()];
    song.properties.themes = vec![Theme {
        value: "Grace".to_string(),
        id: Some("3".to_string()),
        lang: None,
    }];
    song.properties.ccli_no = Some("22025".to_string());
    song.properties.tempo = Some(Tempo {
        value: "90".to_string(),
        unit: Some("bpm".to_string()),
    });
    let xml = build_document(&song).unwrap();

    assert!(xml.contains("<author>John Newton</author>"));
    assert!(xml.contains(r#"<author type="music">Trad.</author>"#));
    assert!(xml.contains("<comment>a comment</comment>"));
    assert!(xml.contains(r#"<theme id="3">Grace</theme>"#));
    assert!(xml.contains("<ccliNo>22025</ccliNo>"));
    assert!(xml.contains(r#"<tempo type="bpm">90</tempo>"#));
}

#[test]
fn test_build_verse_lines_keep_literal_newlines() {
    let mut song = titled_song("T");
    song.verses = vec![Verse::new(
        "v1",
        vec!["Line one\nLine two".to_string()],
    )];
    let xml = build_document(&song).unwrap();

    // Newlines are not converted back into break markup
    assert!(xml.contains("<lines>Line one\nLine two</lines>"), "got: {xml}");
    assert!(!xml.contains("<br"));
}

#[test]
fn test_build_verse_attributes() {
    let mut song = titled_song("T");
    song.verses = vec![Verse {
        name: "v1".to_string(),
        lang: Some("en".to_string()),
        translit: None,
        lines: vec!["text".to_string()],
    }];
    let xml = build_document(&song).unwrap();

    assert!(xml.contains(r#"<verse name="v1" lang="en">"#));
}

#[test]
fn test_build_instruments_only_when_supplied() {
    let without = build_document(&titled_song("T")).unwrap();
    assert!(!without.contains("<instrument"));

    let mut song = titled_song("T");
    song.instruments = vec![Instrument::new("intro", vec!["D G D".to_string()])];
    let with = build_document(&song).unwrap();
    assert!(with.contains(r#"<instrument name="intro">"#));
    assert!(with.contains("<lines>D G D</lines>"));
}

#[test]
fn test_build_format_tags() {
    let mut song = titled_song("T");
    song.format = Format {
        tags: vec![FormatTags {
            application: "OpenLP".to_string(),
            tags: vec![FormatTag {
                name: "red".to_string(),
                open: Some(r#"<span style="color:red">"#.to_string()),
                close: Some("</span>".to_string()),
            }],
        }],
    };
    let xml = build_document(&song).unwrap();

    assert!(xml.contains(r#"<tags application="OpenLP">"#));
    assert!(xml.contains(r#"<tag name="red">"#));
    assert!(
        xml.contains("<open>&lt;span style=&quot;color:red&quot;&gt;</open>"),
        "tag body should be escaped: {xml}"
    );
}

#[test]
fn test_build_empty_format_pairs() {
    let xml = build_document(&titled_song("T")).unwrap();
    assert!(xml.contains("<format></format>"), "got: {xml}");
}

#[test]
fn test_build_escapes_text() {
    let xml = build_document(&titled_song("Song & Dance <Live>")).unwrap();
    assert!(xml.contains("<title>Song &amp; Dance &lt;Live&gt;</title>"));
}
