//! The ordered collection of notes.
//!
//! Insertion order is display order. Identifiers are minted from a counter that moves
//! forward on every successful [`Notebook::add`] and never goes back, so ids of removed
//! notes are not handed out again.

use crate::error::{NoteError, Result};
use crate::labels::Labels;
use crate::model::NoteEntity;
use crate::note::Note;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    next_id: u64,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next added note should carry. Does not advance the counter.
    pub fn mint_next_id(&self) -> String {
        self.next_id.to_string()
    }

    /// Appends `note` and advances the id counter.
    ///
    /// A note whose id is already present is rejected and the counter is left alone.
    /// A numeric id at or past the counter moves the counter beyond it, so minting never
    /// lands on an id that is in use.
    pub fn add(&mut self, note: Note) -> Result<()> {
        if self.exists_id(note.id()) {
            warn!(id = %note.id(), "rejected note with duplicate id");
            return Err(NoteError::DuplicateId(note.id().to_string()));
        }
        debug!(id = %note.id(), kind = %note.kind(), "note added");
        let floor = note.id().parse::<u64>().map_or(0, |n| n.saturating_add(1));
        self.notes.push(note);
        self.next_id = (self.next_id + 1).max(floor);
        Ok(())
    }

    /// Removes and returns the note at position `index`. The returned note is inert.
    pub fn remove_by_index(&mut self, index: usize) -> Result<Note> {
        if index >= self.notes.len() {
            return Err(NoteError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        let mut note = self.notes.remove(index);
        note.prepare_for_removal();
        debug!(id = %note.id(), index, "note removed");
        Ok(note)
    }

    /// Removes the note with `id`, returning it in the `Removed` state.
    /// An unknown id is a no-op.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Note> {
        let pos = self.position(id)?;
        let mut note = self.notes.remove(pos);
        note.prepare_for_removal();
        debug!(id, "note removed");
        Some(note)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == id)
    }

    pub fn exists_id(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Appends `entity` as a new version of the note with `id`.
    ///
    /// The entity must carry the same id as the note; ids never change through edits.
    pub fn update(&mut self, id: &str, entity: NoteEntity, timestamp: &str) -> Result<()> {
        if entity.id != id {
            warn!(expected = id, found = %entity.id, "rejected update with foreign id");
            return Err(NoteError::IdMismatch {
                expected: id.to_string(),
                found: entity.id,
            });
        }
        let note = self
            .get_by_id_mut(id)
            .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))?;
        note.update(entity, timestamp)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn render(&self) -> String {
        self.render_with(&Labels::default())
    }

    /// Every note's rendering in insertion order, one per line.
    pub fn render_with(&self, labels: &Labels) -> String {
        self.notes
            .iter()
            .map(|note| note.render_with(labels))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == id)
    }
}
