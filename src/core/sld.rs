//! SLD detection and reformatting.
//!
//! Reformatting drops whitespace-only text between markup and re-indents
//! the document with one tab per level. Element names, attributes, text,
//! CDATA, comments and processing instructions pass through untouched.

use crate::utils::error::{Result, SyncError};
use quick_xml::events::{BytesDecl, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Media type the WMS server uses for Styled Layer Descriptor documents.
pub const SLD_MEDIA_TYPE: &str = "application/vnd.ogc.sld+xml";

/// True when the declared content type names an SLD document. Parameters
/// such as `; charset=UTF-8` are allowed.
pub fn is_sld_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains(SLD_MEDIA_TYPE))
}

/// Parses `source` and returns it tab-indented, ending with a newline.
///
/// Any XML declaration is rewritten to `encoding="UTF-8"` since the
/// result is always UTF-8 bytes; `standalone` is carried over. Elements
/// whose only content is whitespace keep it.
pub fn pretty_print(source: &str) -> Result<Vec<u8>> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b'\t', 1);
    let mut depth: usize = 0;
    let mut seen_root = false;
    // Blank text directly after a start tag. Kept only if the element
    // closes right away, so `<Literal> </Literal>` survives.
    let mut pending_blank = None;
    let mut just_opened = false;

    loop {
        let event = reader.read_event()?;
        let blank = pending_blank.take();
        let opens = matches!(event, Event::Start(_));
        match event {
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {
                if just_opened {
                    pending_blank = Some(text);
                }
                continue;
            }
            Event::Eof => break,
            Event::Decl(decl) => {
                let standalone = decl
                    .standalone()
                    .transpose()
                    .map_err(|e| malformed(&e.to_string()))?
                    .map(|value| String::from_utf8_lossy(&value).into_owned());
                writer.write_event(Event::Decl(BytesDecl::new(
                    "1.0",
                    Some("UTF-8"),
                    standalone.as_deref(),
                )))?;
            }
            Event::Text(text) => {
                if depth == 0 {
                    return Err(malformed("text outside the root element"));
                }
                writer.write_event(Event::Text(text))?;
            }
            Event::Start(start) => {
                if depth == 0 && seen_root {
                    return Err(malformed("more than one root element"));
                }
                seen_root = true;
                depth += 1;
                writer.write_event(Event::Start(start))?;
            }
            Event::End(end) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed("closing tag without an open element"))?;
                if let Some(text) = blank {
                    writer.write_event(Event::Text(text))?;
                }
                writer.write_event(Event::End(end))?;
            }
            Event::Empty(empty) => {
                if depth == 0 && seen_root {
                    return Err(malformed("more than one root element"));
                }
                seen_root = true;
                writer.write_event(Event::Empty(empty))?;
            }
            other => writer.write_event(other)?,
        }
        just_opened = opens;
    }

    if depth > 0 {
        return Err(malformed("document ends inside an open element"));
    }
    if !seen_root {
        return Err(malformed("document has no root element"));
    }

    let mut output = writer.into_inner().into_inner();
    output.push(b'\n');
    Ok(output)
}

fn malformed(message: &str) -> SyncError {
    SyncError::MalformedDocumentError {
        message: message.to_string(),
    }
}
