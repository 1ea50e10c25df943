use crate::commands::{existing_note, CmdMessage, CmdResult};
use crate::error::Result;
use crate::labels::Labels;
use crate::model::NoteKind;
use crate::notebook::Notebook;

/// Flips the done flag of a reminder by appending a new version.
pub fn run(notebook: &mut Notebook, id: &str, timestamp: &str, labels: &Labels) -> Result<CmdResult> {
    let note = existing_note(notebook, id)?;
    if note.kind() != NoteKind::Reminder {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Note #{} is not a reminder, nothing to mark",
            id
        )));
        return Ok(result);
    }

    let mut entity = note.entity().clone();
    entity.done = !entity.done;
    let done = entity.done;
    notebook.update(id, entity, timestamp)?;

    let note = existing_note(notebook, id)?;
    let mut result = CmdResult::default()
        .with_affected(id)
        .with_rendered(note.render_with(labels));
    result.add_message(CmdMessage::success(format!(
        "Reminder #{} marked {}",
        id,
        labels.status(done)
    )));
    Ok(result)
}
