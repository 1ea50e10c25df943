use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::labels::Labels;
use crate::model::{NoteDraft, NoteEntity, NoteKind};
use crate::note::Note;
use crate::notebook::Notebook;

pub fn run(
    notebook: &mut Notebook,
    kind: NoteKind,
    draft: &NoteDraft,
    timestamp: &str,
    labels: &Labels,
) -> Result<CmdResult> {
    let id = notebook.mint_next_id();
    let entity = NoteEntity::from_draft(id.clone(), draft);
    let note = Note::new(kind, entity, timestamp);
    let rendered = note.render_with(labels);
    notebook.add(note)?;

    let mut result = CmdResult::default()
        .with_affected(id.clone())
        .with_rendered(rendered);
    result.add_message(CmdMessage::success(format!("Created {} note #{}", kind, id)));
    Ok(result)
}
