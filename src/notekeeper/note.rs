//! A single note and its version history.
//!
//! A [`Note`] is a tagged value: the [`NoteKind`] decides how it renders, the current
//! [`NoteEntity`] holds what it says. Every entity the note has ever held lives in a
//! [`VersionedStore`] owned by that note alone.
//!
//! ## Lifecycle
//!
//! ```text
//!   new ──► Active ──update──► Active
//!              │
//!              └──prepare_for_removal──► Removed (terminal)
//! ```
//!
//! While a note is `Active`, its history is never empty and its last entry equals the
//! current entity. Removal drops the history; a removed note still renders its last
//! content but refuses further updates.

use crate::error::{NoteError, Result};
use crate::labels::Labels;
use crate::model::{NoteEntity, NoteKind};
use crate::store::{HasId, VersionedStore};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Active,
    Removed,
}

#[derive(Debug, Clone)]
pub struct Note {
    kind: NoteKind,
    entity: NoteEntity,
    history: VersionedStore<NoteEntity>,
    created_at: String,
    updated_at: String,
    state: NoteState,
}

impl Note {
    /// Wraps `initial` as the current entity and the sole history entry.
    pub fn new(kind: NoteKind, initial: NoteEntity, created_at: impl Into<String>) -> Self {
        let mut history = VersionedStore::new();
        history.add(initial.clone());
        Self {
            kind,
            entity: initial,
            history,
            created_at: created_at.into(),
            updated_at: String::new(),
            state: NoteState::Active,
        }
    }

    pub fn text(initial: NoteEntity, created_at: impl Into<String>) -> Self {
        Self::new(NoteKind::Text, initial, created_at)
    }

    pub fn reminder(initial: NoteEntity, created_at: impl Into<String>) -> Self {
        Self::new(NoteKind::Reminder, initial, created_at)
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.entity.id
    }

    pub fn entity(&self) -> &NoteEntity {
        &self.entity
    }

    pub fn history(&self) -> &VersionedStore<NoteEntity> {
        &self.history
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Empty until the first update.
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn state(&self) -> NoteState {
        self.state
    }

    pub fn is_removed(&self) -> bool {
        self.state == NoteState::Removed
    }

    /// Replaces the current entity and appends it to the history.
    ///
    /// The id inside `entity` is not checked here; the notebook does that before calling.
    pub fn update(&mut self, entity: NoteEntity, timestamp: impl Into<String>) -> Result<()> {
        if self.is_removed() {
            return Err(NoteError::NoteRemoved(self.entity.id.clone()));
        }
        self.history.add(entity.clone());
        self.entity = entity;
        self.updated_at = timestamp.into();
        debug!(
            id = %self.entity.id,
            versions = self.history.len(),
            "note updated"
        );
        Ok(())
    }

    /// Drops every retained version and moves the note to `Removed`.
    pub fn prepare_for_removal(&mut self) {
        self.history.clear();
        self.state = NoteState::Removed;
    }

    pub fn render(&self) -> String {
        self.render_with(&Labels::default())
    }

    pub fn render_with(&self, labels: &Labels) -> String {
        let mut out = format!("#{} {}", self.entity.id(), body(self.kind, &self.entity, labels));
        out.push_str(&format!(" | {} {}", labels.created, self.created_at));
        if !self.updated_at.is_empty() {
            out.push_str(&format!(" | {} {}", labels.updated, self.updated_at));
        }
        out
    }

    /// Every retained version, oldest first, numbered from 1.
    pub fn render_history(&self, labels: &Labels) -> String {
        self.history
            .iter()
            .enumerate()
            .map(|(i, version)| {
                format!("{} {}: {}", labels.version, i + 1, body(self.kind, version, labels))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn body(kind: NoteKind, entity: &NoteEntity, labels: &Labels) -> String {
    match kind {
        NoteKind::Text => format!("{}: {}", entity.name, entity.text),
        NoteKind::Reminder => format!("{}: {}", entity.text, labels.status(entity.done)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;

    fn groceries() -> Note {
        Note::text(NoteEntity::text("0", "Groceries", "milk,eggs"), "t0")
    }

    #[test]
    fn new_note_has_single_history_entry() {
        let note = groceries();
        assert_eq!(note.history().len(), 1);
        assert_eq!(note.history().last(), Some(note.entity()));
        assert_eq!(note.created_at(), "t0");
        assert_eq!(note.updated_at(), "");
        assert_eq!(note.state(), NoteState::Active);
    }

    #[test]
    fn updates_append_to_history() {
        let mut note = groceries();
        for i in 1..=3 {
            let entity = NoteEntity::text("0", "Groceries", format!("v{}", i));
            note.update(entity, format!("t{}", i)).unwrap();
        }

        assert_eq!(note.history().len(), 4);
        assert_eq!(note.history().last(), Some(note.entity()));
        assert_eq!(note.entity().text, "v3");
        assert_eq!(note.created_at(), "t0");
        assert_eq!(note.updated_at(), "t3");
    }

    #[test]
    fn history_keeps_oldest_first() {
        let mut note = groceries();
        note.update(NoteEntity::text("0", "Groceries", "bread"), "t1")
            .unwrap();

        let texts: Vec<_> = note.history().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["milk,eggs", "bread"]);
    }

    #[test]
    fn renders_text_note() {
        let note = groceries();
        let rendered = note.render();
        assert_eq!(rendered, "#0 Groceries: milk,eggs | создано t0");
        assert!(!rendered.contains("изменено"));
    }

    #[test]
    fn renders_update_timestamp_after_update() {
        let mut note = groceries();
        note.update(NoteEntity::text("0", "Groceries", "milk,eggs,bread"), "t1")
            .unwrap();
        assert_eq!(
            note.render(),
            "#0 Groceries: milk,eggs,bread | создано t0 | изменено t1"
        );
    }

    #[test]
    fn renders_reminder_status() {
        let mut note = Note::reminder(NoteEntity::reminder("0", "Call mom", false), "t0");
        assert!(note.render().contains("Call mom: не сделано"));

        note.update(NoteEntity::reminder("0", "Call mom", true), "t1")
            .unwrap();
        assert!(note.render().contains("Call mom: сделано"));
        assert_eq!(note.history().len(), 2);
    }

    #[test]
    fn renders_with_english_labels() {
        let note = Note::reminder(NoteEntity::reminder("4", "Pay rent", true), "t0");
        let labels = Labels::for_locale(Locale::En);
        assert_eq!(note.render_with(&labels), "#4 Pay rent: done | created t0");
    }

    #[test]
    fn render_is_stable_without_mutation() {
        let note = groceries();
        assert_eq!(note.render(), note.render());
    }

    #[test]
    fn render_history_lists_every_version() {
        let mut note = groceries();
        note.update(NoteEntity::text("0", "Shopping", "bread"), "t1")
            .unwrap();

        let history = note.render_history(&Labels::for_locale(Locale::En));
        assert_eq!(
            history,
            "version 1: Groceries: milk,eggs\nversion 2: Shopping: bread"
        );
    }

    #[test]
    fn removal_clears_history_and_blocks_updates() {
        let mut note = groceries();
        note.prepare_for_removal();

        assert!(note.is_removed());
        assert!(note.history().is_empty());
        let err = note
            .update(NoteEntity::text("0", "x", "y"), "t1")
            .unwrap_err();
        assert!(matches!(err, NoteError::NoteRemoved(id) if id == "0"));
    }
}
