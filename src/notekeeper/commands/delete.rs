use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;

/// Removes the note with `id`. An unknown id only produces a warning.
pub fn run(notebook: &mut Notebook, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !notebook.exists_id(id) {
        result.add_message(CmdMessage::warning(format!("No note with id {}", id)));
        return Ok(result);
    }

    if let Some(note) = notebook.remove_by_id(id) {
        result.add_message(CmdMessage::success(format!("Note #{} deleted", note.id())));
        result = result.with_affected(note.id());
    }
    Ok(result)
}

/// Removes the note at display position `index` (0-based).
pub fn run_at(notebook: &mut Notebook, index: usize) -> Result<CmdResult> {
    let note = notebook.remove_by_index(index)?;
    let mut result = CmdResult::default().with_affected(note.id());
    result.add_message(CmdMessage::success(format!("Note #{} deleted", note.id())));
    Ok(result)
}
