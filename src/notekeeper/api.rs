//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UIs. It owns the
//! [`Notebook`] and the active [`Labels`], dispatches to `commands::*`, and returns
//! `Result<CmdResult>`.
//!
//! Timestamps arrive as arguments. The facade never reads the clock and never prints.

use crate::commands;
use crate::error::Result;
use crate::labels::Labels;
use crate::model::{NoteDraft, NoteKind};
use crate::notebook::Notebook;

pub struct NotekeeperApi {
    notebook: Notebook,
    labels: Labels,
}

impl NotekeeperApi {
    pub fn new(labels: Labels) -> Self {
        Self {
            notebook: Notebook::new(),
            labels,
        }
    }

    pub fn create_note(
        &mut self,
        kind: NoteKind,
        draft: &NoteDraft,
        timestamp: &str,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.notebook, kind, draft, timestamp, &self.labels)
    }

    pub fn update_note(&mut self, id: &str, draft: &NoteDraft, timestamp: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.notebook, id, draft, timestamp, &self.labels)
    }

    pub fn toggle_done(&mut self, id: &str, timestamp: &str) -> Result<CmdResult> {
        commands::toggle::run(&mut self.notebook, id, timestamp, &self.labels)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.notebook, id)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run_at(&mut self.notebook, index)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.notebook, &self.labels)
    }

    pub fn note_history(&self, id: &str) -> Result<CmdResult> {
        commands::history::run(&self.notebook, id, &self.labels)
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl Default for NotekeeperApi {
    fn default() -> Self {
        Self::new(Labels::default())
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
