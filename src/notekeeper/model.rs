use crate::store::HasId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of note the notebook understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Text,
    Reminder,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Text => write!(f, "text"),
            NoteKind::Reminder => write!(f, "reminder"),
        }
    }
}

/// Plain payload of a note. `id` is assigned once by the notebook; edits replace the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntity {
    pub id: String,
    // Only meaningful for text notes
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    // Only meaningful for reminders
    #[serde(default)]
    pub done: bool,
}

impl NoteEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn text(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            done: false,
        }
    }

    pub fn reminder(id: impl Into<String>, text: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            text: text.into(),
            done,
        }
    }

    /// Builds the entity for `id` from raw terminal input.
    pub fn from_draft(id: impl Into<String>, draft: &NoteDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name.clone(),
            text: draft.text.clone(),
            done: draft.done,
        }
    }
}

impl HasId for NoteEntity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Everything the user types for a note, minus the identifier the notebook mints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub name: String,
    pub text: String,
    pub done: bool,
}

impl NoteDraft {
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            done: false,
        }
    }

    pub fn reminder(text: impl Into<String>, done: bool) -> Self {
        Self {
            name: String::new(),
            text: text.into(),
            done,
        }
    }
}
