//! Markup (XML) output.
//!
//! [`list_to_xml`] builds a flat document in which every node is written as
//! `<key> content </key>`, with exactly one space either side of the
//! content. Existing consumers rely on that spacing, so it stays.
//! [`indent`] is a separate pass that lays any well-formed document out one
//! element per line.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;

/// First line of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const DEFAULT_ROOT_NAME: &str = "root";
pub const DEFAULT_ITEM_NAME: &str = "element";

fn push_node(out: &mut String, key: &str, content: &str) {
    out.push('<');
    out.push_str(key);
    out.push_str("> ");
    out.push_str(content);
    out.push_str(" </");
    out.push_str(key);
    out.push('>');
}

/// One record wrapped in an `item_name` element, fields in insertion order.
pub fn record_to_xml(record: &Record, item_name: &str) -> String {
    let mut fields = String::new();
    for (key, value) in record.iter() {
        push_node(&mut fields, key, &partial_escape(value));
    }

    let mut out = String::new();
    push_node(&mut out, item_name, &fields);
    out
}

/// Render records as a flat XML document.
///
/// # Example
/// ```
/// use converter::models::Record;
/// use converter::serialize::xml::list_to_xml;
///
/// let record: Record = [("name", "test"), ("stars", "2")].into_iter().collect();
/// let xml = list_to_xml(&[record], "root", "element");
///
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <root> <element> <name> test </name><stars> 2 </stars> </element> </root>"
/// );
/// ```
pub fn list_to_xml(records: &[Record], root_name: &str, item_name: &str) -> String {
    let items: String = records.iter().map(|r| record_to_xml(r, item_name)).collect();

    let mut out = String::with_capacity(XML_DECLARATION.len() + items.len() + 64);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    push_node(&mut out, root_name, &items);
    out
}

fn xml_error(position: u64, err: impl std::fmt::Display) -> SerializeError {
    SerializeError::Xml {
        position,
        message: err.to_string(),
    }
}

/// Pretty-indent an XML document.
///
/// Elements go on their own lines, nested `width` spaces deeper than their
/// parent. Whitespace-only text between tags is dropped, except inside an
/// element that has no children (`<phone>  </phone>` stays as is). Any
/// other text stays inline with its element, byte for byte. Tag names are
/// re-emitted as read, without checking that end tags match.
pub fn indent(xml: &str, width: usize) -> SerializeResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', width);

    // whitespace read right after a start tag, kept until we know whether
    // the element closes or opens a child
    let mut pending: Option<BytesText<'_>> = None;
    let mut after_start = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(reader.buffer_position() as u64, e))?;

        let event = match event {
            Event::Eof => break,
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {
                if after_start {
                    pending = Some(text);
                }
                after_start = false;
                continue;
            }
            Event::End(end) => {
                if let Some(text) = pending.take() {
                    writer
                        .write_event(Event::Text(text))
                        .map_err(|e| xml_error(reader.buffer_position() as u64, e))?;
                }
                Event::End(end)
            }
            event => {
                pending = None;
                event
            }
        };

        after_start = matches!(event, Event::Start(_));
        writer
            .write_event(event)
            .map_err(|e| xml_error(reader.buffer_position() as u64, e))?;
    }

    Ok(String::from_utf8(writer.into_inner())?)
}
