//! # Storage Layer
//!
//! A note keeps every value it has ever held. The container for those values is the
//! [`VersionedStore`]: an ordered, append-oriented list of one entity kind with lookup by
//! identity.
//!
//! ## Design Rationale
//!
//! The store is generic over anything implementing [`HasId`] so that the same container can
//! hold note versions today and other entity kinds later, and so that it can be tested with
//! throwaway types.
//!
//! ## Contract
//!
//! - Insertion order is preserved; `get_all` returns oldest first.
//! - Nothing is ever compacted. Capacity grows with every update.
//! - A store is owned by exactly one note and never shared.
//!
//! Nothing here touches the disk; notes live for the lifetime of the process.

pub mod versioned;

pub use versioned::VersionedStore;

/// Anything with a string identity that can be looked up in a [`VersionedStore`].
pub trait HasId {
    fn id(&self) -> &str;
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{NoteEntity, NoteKind};
    use crate::note::Note;
    use crate::notebook::Notebook;

    pub const CREATED_AT: &str = "18.10.2026 09:00:00";

    /// Builds a notebook with a known set of notes, minting ids the way the CLI does.
    pub struct NotebookFixture {
        pub notebook: Notebook,
    }

    impl Default for NotebookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl NotebookFixture {
        pub fn new() -> Self {
            Self {
                notebook: Notebook::new(),
            }
        }

        pub fn with_text_note(mut self, name: &str, text: &str) -> Self {
            let id = self.notebook.mint_next_id();
            let entity = NoteEntity::text(id, name, text);
            self.notebook
                .add(Note::new(NoteKind::Text, entity, CREATED_AT))
                .unwrap();
            self
        }

        pub fn with_reminder(mut self, text: &str, done: bool) -> Self {
            let id = self.notebook.mint_next_id();
            let entity = NoteEntity::reminder(id, text, done);
            self.notebook
                .add(Note::new(NoteKind::Reminder, entity, CREATED_AT))
                .unwrap();
            self
        }

        pub fn with_text_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Note {}", i + 1);
                let text = format!("Content for note {}", i + 1);
                self = self.with_text_note(&name, &text);
            }
            self
        }

        pub fn build(self) -> Notebook {
            self.notebook
        }
    }
}
