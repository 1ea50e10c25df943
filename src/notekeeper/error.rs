use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("No note at index {index} (notebook holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("A note with id {0} already exists")]
    DuplicateId(String),

    #[error("Update for note {expected} carries id {found}")]
    IdMismatch { expected: String, found: String },

    #[error("Note {0} has been removed")]
    NoteRemoved(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;
