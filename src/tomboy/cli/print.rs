use std::io::{self, Write};
use std::path::PathBuf;
use tomboy::api::LoadedNote;

/// Writes each note as `Title: <title>\n<body>\n\n`, in the order given.
pub(crate) fn write_notes<W: Write>(out: &mut W, notes: &[LoadedNote]) -> io::Result<()> {
    for loaded in notes {
        write!(out, "Title: {}\n{}\n\n", loaded.note.title, loaded.note.text)?;
    }
    Ok(())
}

pub(crate) fn write_paths<W: Write>(out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(out, "Note: {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tomboy::model::{Note, NoteEntry};

    fn loaded(id: &str, title: &str, body: &str) -> LoadedNote {
        LoadedNote {
            entry: NoteEntry::new(id, 1),
            path: PathBuf::from(format!("/n/0/1/{}.note", id)),
            note: Note::new(title, body),
        }
    }

    #[test]
    fn test_write_notes_format() {
        let mut buf = Vec::new();
        write_notes(
            &mut buf,
            &[loaded("a", "Hello", "World"), loaded("b", "Fmt", "<bold>Hi</bold>")],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Title: Hello\nWorld\n\nTitle: Fmt\n<bold>Hi</bold>\n\n"
        );
    }

    #[test]
    fn test_write_notes_empty() {
        let mut buf = Vec::new();
        write_notes(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_paths() {
        let mut buf = Vec::new();
        write_paths(&mut buf, &[PathBuf::from("/n/0/2/abc123.note")]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Note: /n/0/2/abc123.note\n");
    }
}
