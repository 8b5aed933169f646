use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DocError;

/// One `<member>` entry: the raw identifier plus optional summary markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMember {
    /// Raw member identifier from the `name` attribute.
    pub name: String,
    /// Raw inner markup of the `<summary>` element, inline reference
    /// elements preserved verbatim for the cross-reference pass.
    pub summary: Option<String>,
}

/// In-memory form of a documentation file.
#[derive(Debug, Clone, Default)]
pub struct DocFile {
    /// Assembly display name; empty when the document omits it.
    pub assembly_name: String,
    pub members: Vec<DocMember>,
}

/// Decode a documentation XML string into its raw document model.
///
/// Recognized shape: a root element containing `<assembly><name>` and
/// `<members>` with one `<member name="...">` per documented symbol.
/// Unknown elements are skipped. A missing assembly name is not an
/// error; the name stays empty.
pub fn load(xml: &str) -> Result<DocFile, DocError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc = DocFile::default();
    let mut in_assembly = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"assembly" => in_assembly = true,
                b"name" if in_assembly => {
                    doc.assembly_name = reader
                        .read_text(e.name())
                        .map_err(|err| DocError::xml(format!("assembly name: {err}")))?
                        .trim()
                        .to_string();
                }
                b"member" => doc.members.push(read_member(&mut reader, &e)?),
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"member" {
                    if let Some(name) = attribute(&e, b"name")? {
                        doc.members.push(DocMember {
                            name,
                            summary: None,
                        });
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"assembly" {
                    in_assembly = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(DocError::xml(format!(
                    "parse error at position {}: {err}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    Ok(doc)
}

/// Read one `<member>` element through its end tag, capturing the raw
/// summary markup and skipping the other documentation blocks
/// (`<param>`, `<returns>`, `<remarks>`, ...).
fn read_member(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<DocMember, DocError> {
    let name = attribute(start, b"name")?.unwrap_or_default();
    let mut summary = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"summary" {
                    let text = reader
                        .read_text(e.name())
                        .map_err(|err| DocError::xml(format!("summary text: {err}")))?;
                    summary = Some(text.trim().to_string());
                } else {
                    reader
                        .read_to_end(e.name())
                        .map_err(|err| DocError::xml(format!("member content: {err}")))?;
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"member" => break,
            Ok(Event::Eof) => return Err(DocError::xml("unterminated <member> element")),
            Err(err) => {
                return Err(DocError::xml(format!(
                    "parse error at position {}: {err}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    Ok(DocMember { name, summary })
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, DocError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| DocError::xml(format!("attribute error: {err}")))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| DocError::xml(format!("attribute value error: {err}")))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}
