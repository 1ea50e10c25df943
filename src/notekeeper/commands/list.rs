use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::labels::Labels;
use crate::notebook::Notebook;

pub fn run(notebook: &Notebook, labels: &Labels) -> Result<CmdResult> {
    if notebook.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(labels.empty_notebook));
        return Ok(result);
    }
    Ok(CmdResult::default().with_rendered(notebook.render_with(labels)))
}
