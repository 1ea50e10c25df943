use crate::commands::{existing_note, CmdResult};
use crate::error::Result;
use crate::labels::Labels;
use crate::notebook::Notebook;

pub fn run(notebook: &Notebook, id: &str, labels: &Labels) -> Result<CmdResult> {
    let note = existing_note(notebook, id)?;
    Ok(CmdResult::default().with_rendered(note.render_history(labels)))
}
