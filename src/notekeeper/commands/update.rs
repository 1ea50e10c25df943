use crate::commands::{existing_note, CmdMessage, CmdResult};
use crate::error::Result;
use crate::labels::Labels;
use crate::model::{NoteDraft, NoteEntity};
use crate::notebook::Notebook;

/// Appends a new version built from `draft` to the note with `id`. The id itself is kept.
pub fn run(
    notebook: &mut Notebook,
    id: &str,
    draft: &NoteDraft,
    timestamp: &str,
    labels: &Labels,
) -> Result<CmdResult> {
    existing_note(notebook, id)?;

    let entity = NoteEntity::from_draft(id, draft);
    notebook.update(id, entity, timestamp)?;

    let note = existing_note(notebook, id)?;
    let mut result = CmdResult::default()
        .with_affected(id)
        .with_rendered(note.render_with(labels));
    result.add_message(CmdMessage::success(format!(
        "Note #{} updated ({} versions)",
        id,
        note.history().len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use crate::store::fixtures::NotebookFixture;

    #[test]
    fn updates_text_and_timestamp() {
        let mut notebook = NotebookFixture::new()
            .with_text_note("Groceries", "milk,eggs")
            .build();
        let draft = NoteDraft::text("Groceries", "milk,eggs,bread");

        let result = run(&mut notebook, "0", &draft, "later", &Labels::default()).unwrap();

        assert!(result.rendered[0].contains("Groceries: milk,eggs,bread"));
        assert!(result.rendered[0].contains("изменено later"));
        assert_eq!(notebook.get_by_id("0").unwrap().history().len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut notebook = Notebook::new();
        let err = run(
            &mut notebook,
            "3",
            &NoteDraft::default(),
            "later",
            &Labels::default(),
        )
        .unwrap_err();
        assert!(matches!(err, NoteError::NoteNotFound(_)));
    }
}
