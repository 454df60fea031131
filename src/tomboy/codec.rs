//! XML decoding for manifests and note files.
//!
//! Manifests are plain attribute records and go through quick-xml's serde
//! deserializer. Note files need the raw inner markup of `<text>`, which serde
//! cannot give us, so they are walked with the pull [`Reader`] instead.

use crate::model::{Content, Manifest, Note};
use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("invalid XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("unexpected document shape: {0}")]
    Schema(DeError),

    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error("{0}")]
    Structure(String),
}

impl From<DeError> for XmlError {
    fn from(err: DeError) -> Self {
        match err {
            DeError::InvalidXml(inner) => XmlError::Syntax(inner),
            other => XmlError::Schema(other),
        }
    }
}

pub fn decode_manifest(xml: &str) -> Result<Manifest, XmlError> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Decodes a `.note` document.
///
/// Only direct children of the root named `title` and `text` are read (by local
/// name, so namespace prefixes do not matter). A missing child leaves the field
/// empty. If a child repeats, the last one wins.
///
/// The title is character data: entities are unescaped, CDATA sections are
/// taken as-is and nested elements are skipped. The body stays raw markup.
pub fn decode_note(xml: &str) -> Result<Note, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut note = Note::default();
    let mut depth: usize = 0;
    let mut root: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 1 {
                    let end = e.to_end().into_owned();
                    match e.local_name().as_ref() {
                        b"title" => {
                            note.title = read_character_data(&mut reader)?;
                            continue;
                        }
                        b"text" => {
                            let raw = reader.read_text(end.name())?;
                            note.text = Content::new(raw.into_owned());
                            continue;
                        }
                        _ => {}
                    }
                }
                if depth == 0 {
                    root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    return Ok(note);
                }
                if depth == 1 {
                    match e.local_name().as_ref() {
                        b"title" => note.title.clear(),
                        b"text" => note.text = Content::default(),
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    XmlError::Structure(format!(
                        "unmatched closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                if depth == 0 {
                    return Ok(note);
                }
            }
            Event::Eof => {
                return Err(match root {
                    Some(name) => XmlError::Structure(format!(
                        "unexpected end of document inside <{}>",
                        name
                    )),
                    None => XmlError::Structure("document has no root element".to_string()),
                });
            }
            _ => {}
        }
    }
}

/// Collects the direct character data of the element whose start tag was just
/// read, consuming events up to its matching end tag.
fn read_character_data(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut data = String::new();
    let mut depth: usize = 0;

    loop {
        match reader.read_event()? {
            Event::Text(t) if depth == 0 => data.push_str(&t.unescape()?),
            Event::CData(c) if depth == 0 => {
                data.push_str(&String::from_utf8(c.into_inner().into_owned())?)
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(data);
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(XmlError::Structure(
                    "unexpected end of document inside <title>".to_string(),
                ))
            }
            _ => {}
        }
    }
}
