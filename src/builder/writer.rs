//! Document serialization
//!
//! Event-based serialization of the output element tree: XML
//! declaration, the stylesheet processing instruction, two-space
//! indentation, and open/close pairs for every element except the tags
//! in the self-closing set.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::builder::element::{Content, XmlElement};
use crate::errors::BuildError;
use crate::schema;

pub(crate) fn write_document(root: &XmlElement) -> Result<String, BuildError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::PI(BytesText::from_escaped(schema::STYLESHEET_PI)))?;
    write_element(&mut writer, root)?;

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(xml.trim().to_string())
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    match &element.content {
        Content::Empty if schema::is_self_closing(&element.name) => {
            writer.write_event(Event::Empty(start))?;
        }
        Content::Empty => {
            writer.write_event(Event::Start(start))?;
            // Empty text keeps the indent writer from breaking the pair
            // across lines, so the element serializes as <name></name>.
            writer.write_event(Event::Text(BytesText::new("")))?;
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        }
        Content::Text(text) => {
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        }
        Content::Children(children) => {
            writer.write_event(Event::Start(start))?;
            for child in children {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        }
    }
    Ok(())
}
