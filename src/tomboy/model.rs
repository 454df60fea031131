use serde::{Deserialize, Deserializer};
use std::fmt;

/// The archive's `manifest.xml`.
///
/// Children other than `<note>` are ignored, as are unknown attributes such as
/// `xmlns`. Missing attributes fall back to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(rename = "@revision", default, deserialize_with = "lenient_int")]
    pub revision: i64,

    #[serde(rename = "note", default)]
    pub notes: Vec<NoteEntry>,
}

/// A pointer to a note file. Holds no content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteEntry {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "@rev", default, deserialize_with = "lenient_int")]
    pub rev: i64,
}

/// Integer attribute that tolerates surrounding whitespace; an empty value is 0.
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| D::Error::custom(format!("invalid integer {:?}", raw)))
}

impl NoteEntry {
    pub fn new(id: impl Into<String>, rev: i64) -> Self {
        Self { id: id.into(), rev }
    }
}

impl fmt::Display for NoteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Revision: {}, Id: {}", self.rev, self.id)
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.notes.iter().map(ToString::to_string).collect();
        writeln!(f, "Revision: {}", self.revision)?;
        writeln!(f, "Notes: [{}]", entries.join("; "))
    }
}

/// Raw inner markup of a note's `<text>` element, kept verbatim.
///
/// Formatting elements (`<bold>`, `<list>`, ...) and entity references stay as
/// literal markup; nothing is stripped or unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: Content,
}

impl Note {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: Content::new(text),
        }
    }
}
