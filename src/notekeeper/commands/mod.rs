use crate::error::{NoteError, Result};
use crate::note::Note;
use crate::notebook::Notebook;

pub mod create;
pub mod delete;
pub mod history;
pub mod list;
pub mod toggle;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Ids of notes created, changed or removed by the command
    pub affected_ids: Vec<String>,
    /// Rendered lines for the UI to print as-is
    pub rendered: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, id: impl Into<String>) -> Self {
        self.affected_ids.push(id.into());
        self
    }

    pub fn with_rendered(mut self, rendered: impl Into<String>) -> Self {
        let rendered = rendered.into();
        self.rendered.extend(rendered.lines().map(str::to_string));
        self
    }
}

pub(crate) fn existing_note<'a>(notebook: &'a Notebook, id: &str) -> Result<&'a Note> {
    notebook
        .get_by_id(id)
        .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))
}
