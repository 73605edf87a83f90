//! Parsing and rendering of the flat markup dialect.
//!
//! A document is a sequence of top-level `<tag class="LABEL">text</tag>`
//! elements. Whitespace between elements is insignificant. Attributes other
//! than `class` are kept in document order and rendered after it. Anything
//! the element model cannot represent (nested elements, stray text, unbalanced
//! tags, missing `class`) is reported as malformed markup.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::TaggedElement;
use crate::error::{Error, Result};

/// Unescaped attributes of an element, split into `class` and the rest
fn read_attributes(
    e: &BytesStart<'_>,
    position: usize,
) -> Result<(Option<String>, Vec<(String, String)>)> {
    let mut class = None;
    let mut others = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::malformed(position, err.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|err| Error::malformed(position, err.to_string()))?
            .into_owned();
        if attr.key.as_ref() == b"class" {
            class = Some(value);
        } else {
            let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            others.push((name, value));
        }
    }
    Ok((class, others))
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Start a new top-level element, refusing nesting and class-less elements
fn open_element(
    e: &BytesStart<'_>,
    current: &Option<TaggedElement>,
    position: usize,
) -> Result<TaggedElement> {
    let tag = element_name(e);
    if let Some(parent) = current {
        return Err(Error::malformed(
            position,
            format!(
                "nested element <{}> inside <{} class=\"{}\">",
                tag, parent.tag, parent.class
            ),
        ));
    }
    match read_attributes(e, position)? {
        (Some(class), attributes) => Ok(TaggedElement {
            attributes,
            ..TaggedElement::new(tag, class, String::new())
        }),
        (None, _) => Err(Error::malformed(
            position,
            format!("element <{}> has no class attribute", tag),
        )),
    }
}

/// Append text either to the open element or, outside any element, accept
/// only whitespace
fn push_text(current: &mut Option<TaggedElement>, text: &str, position: usize) -> Result<()> {
    match current {
        Some(element) => {
            element.content.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(Error::malformed(
            position,
            format!("text outside of any element: {:?}", text.trim()),
        )),
    }
}

/// Parse a markup fragment into its ordered top-level elements
pub fn parse_elements(markup: &str) -> Result<Vec<TaggedElement>> {
    let mut reader = Reader::from_str(markup);
    let mut elements = Vec::new();
    let mut current: Option<TaggedElement> = None;

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current = Some(open_element(&e, &current, position)?);
            }
            Ok(Event::Empty(e)) => {
                // `<p class="X"/>` is an element with no content
                let element = open_element(&e, &current, position)?;
                elements.push(element);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match current.take() {
                    Some(element) if element.tag == name => elements.push(element),
                    Some(element) => {
                        return Err(Error::malformed(
                            position,
                            format!("expected </{}>, found </{}>", element.tag, name),
                        ))
                    }
                    None => {
                        return Err(Error::malformed(
                            position,
                            format!("unexpected end tag </{}>", name),
                        ))
                    }
                }
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|err| Error::malformed(position, err.to_string()))?;
                push_text(&mut current, &text, position)?;
            }
            Ok(Event::CData(c)) => {
                let text = String::from_utf8_lossy(&c).into_owned();
                push_text(&mut current, &text, position)?;
            }
            Ok(Event::Eof) => break,
            // Comments, declarations and processing instructions carry no text
            Ok(_) => {}
            Err(err) => return Err(Error::malformed(reader.buffer_position(), err.to_string())),
        }
    }

    if let Some(element) = current {
        return Err(Error::malformed(
            markup.len(),
            format!("unclosed element <{} class=\"{}\">", element.tag, element.class),
        ));
    }

    Ok(elements)
}

/// Render elements back to markup, joined by `separator`
pub fn render_elements(elements: &[TaggedElement], separator: &str) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        element.write_markup(&mut out);
    }
    out
}
