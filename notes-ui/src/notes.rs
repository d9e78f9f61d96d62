//! In-memory notes. Nothing here is persisted.

/// One note: a tab label and its markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub filename: String,
    pub content: String,
}

/// All open notes plus the one whose tab is showing.
#[derive(Debug, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    active: Option<usize>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty note labelled with its position ("1", "2", ...).
    pub fn new_note(&mut self) -> usize {
        let filename = (self.notes.len() + 1).to_string();
        self.open_note(filename, String::new())
    }

    /// Add a note with existing content.
    pub fn open_note(&mut self, filename: impl Into<String>, content: impl Into<String>) -> usize {
        self.notes.push(Note {
            filename: filename.into(),
            content: content.into(),
        });
        let index = self.notes.len() - 1;
        tracing::debug!(index, filename = %self.notes[index].filename, "note added");
        index
    }

    /// Mark a note as the one shown in the preview. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.notes.len() {
            self.active = Some(index);
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Note> {
        self.active.and_then(|index| self.notes.get(index))
    }

    pub fn active_mut(&mut self) -> Option<&mut Note> {
        self.active.and_then(|index| self.notes.get_mut(index))
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Note> {
        self.notes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notes_are_numbered() {
        let mut book = Notebook::new();
        assert_eq!(book.new_note(), 0);
        assert_eq!(book.new_note(), 1);
        let labels: Vec<_> = book.notes().iter().map(|n| n.filename.as_str()).collect();
        assert_eq!(labels, vec!["1", "2"]);
        assert!(book.notes().iter().all(|n| n.content.is_empty()));
    }

    #[test]
    fn test_no_active_note_until_selected() {
        let mut book = Notebook::new();
        book.new_note();
        assert!(book.active().is_none());

        book.select(0);
        assert_eq!(book.active_index(), Some(0));
        assert_eq!(book.active().map(|n| n.filename.as_str()), Some("1"));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut book = Notebook::new();
        book.new_note();
        book.select(0);
        book.select(5);
        assert_eq!(book.active_index(), Some(0));
    }

    #[test]
    fn test_edit_active_note() {
        let mut book = Notebook::new();
        book.open_note("todo.md", "# Todo");
        book.select(0);
        if let Some(note) = book.active_mut() {
            note.content.push_str("\n\n- milk");
        }
        assert_eq!(book.active().unwrap().content, "# Todo\n\n- milk");
    }
}
