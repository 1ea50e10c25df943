use super::console::{Console, INVALID_INT};
use super::menu::MenuAction;
use colored::Colorize;
use notekeeper::api::{CmdMessage, CmdResult, MessageLevel, NotekeeperApi};
use notekeeper::error::{NoteError, Result};
use notekeeper::model::{NoteDraft, NoteKind};
use notekeeper::timestamp;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU_TITLE: &str = "Choose an action:";

/// The interactive menu loop. Runs until "Exit" or end of input.
pub struct Session<R, W> {
    api: NotekeeperApi,
    console: Console<R, W>,
    timestamp_format: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(api: NotekeeperApi, console: Console<R, W>, timestamp_format: String) -> Self {
        Self {
            api,
            console,
            timestamp_format,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let labels = MenuAction::labels();
        loop {
            let choice = self.console.show_menu(MENU_TITLE, &labels)?;
            if self.console.is_closed() {
                break;
            }
            let Some(action) = MenuAction::from_choice(choice) else {
                self.print_messages(&[CmdMessage::warning(format!(
                    "Pick a number between 1 and {}",
                    labels.len()
                ))])?;
                continue;
            };
            debug!(?action, "menu action");
            if action == MenuAction::Exit {
                break;
            }

            match self.dispatch(action) {
                Ok(Some(result)) => self.print_result(&result)?,
                Ok(None) => {}
                Err(NoteError::Io(e)) => return Err(NoteError::Io(e)),
                Err(e) => self.print_messages(&[CmdMessage::error(e.to_string())])?,
            }
            if self.console.is_closed() {
                break;
            }
        }
        Ok(())
    }

    // `None` means the input ran out half-way through the action.
    fn dispatch(&mut self, action: MenuAction) -> Result<Option<CmdResult>> {
        let result = match action {
            MenuAction::CreateText => {
                let draft = self.read_text_draft()?;
                if self.console.is_closed() {
                    return Ok(None);
                }
                let now = self.now();
                self.api.create_note(NoteKind::Text, &draft, &now)?
            }
            MenuAction::CreateReminder => {
                let Some(draft) = self.read_reminder_draft()? else {
                    return Ok(None);
                };
                let now = self.now();
                self.api.create_note(NoteKind::Reminder, &draft, &now)?
            }
            MenuAction::List => {
                self.console.heading("Notes")?;
                self.api.list_notes()?
            }
            MenuAction::Edit => {
                let Some(id) = self.read_id("Note id:")? else {
                    return Ok(None);
                };
                let kind = self
                    .api
                    .notebook()
                    .get_by_id(&id)
                    .map(|note| note.kind())
                    .ok_or_else(|| NoteError::NoteNotFound(id.clone()))?;
                let draft = match kind {
                    NoteKind::Text => self.read_text_draft()?,
                    NoteKind::Reminder => match self.read_reminder_draft()? {
                        Some(draft) => draft,
                        None => return Ok(None),
                    },
                };
                if self.console.is_closed() {
                    return Ok(None);
                }
                let now = self.now();
                self.api.update_note(&id, &draft, &now)?
            }
            MenuAction::ToggleDone => {
                let Some(id) = self.read_id("Reminder id:")? else {
                    return Ok(None);
                };
                let now = self.now();
                self.api.toggle_done(&id, &now)?
            }
            MenuAction::DeleteById => {
                let Some(id) = self.read_id("Note id:")? else {
                    return Ok(None);
                };
                self.api.delete_note(&id)?
            }
            MenuAction::DeleteAt => {
                let position = self.console.read_int("Note position (from 1):")?;
                if self.console.is_closed() {
                    return Ok(None);
                }
                match usize::try_from(position).ok().and_then(|p| p.checked_sub(1)) {
                    Some(index) => self.api.delete_at(index)?,
                    None => {
                        let mut result = CmdResult::default();
                        result.add_message(CmdMessage::warning("Positions start at 1"));
                        result
                    }
                }
            }
            MenuAction::History => {
                let Some(id) = self.read_id("Note id:")? else {
                    return Ok(None);
                };
                self.api.note_history(&id)?
            }
            MenuAction::Exit => return Ok(None),
        };
        Ok(Some(result))
    }

    /// `None` if the input ends before an id is typed.
    fn read_id(&mut self, prompt: &str) -> Result<Option<String>> {
        let id = self.console.read_string(prompt)?;
        if self.console.is_closed() && id.is_empty() {
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn read_text_draft(&mut self) -> Result<NoteDraft> {
        let name = self.console.read_string("Note name:")?;
        let text = self.console.read_string("Note text:")?;
        Ok(NoteDraft::text(name, text))
    }

    fn read_reminder_draft(&mut self) -> Result<Option<NoteDraft>> {
        let text = self.console.read_string("Reminder text:")?;
        Ok(self.read_status()?.map(|done| NoteDraft::reminder(text, done)))
    }

    /// Asks until the answer is 0 or 1. `None` if the input ends first.
    fn read_status(&mut self) -> Result<Option<bool>> {
        loop {
            match self.console.read_int("Status (1 - done, 0 - not done):")? {
                0 => return Ok(Some(false)),
                1 => return Ok(Some(true)),
                _ if self.console.is_closed() => return Ok(None),
                INVALID_INT => self.console.show("Please enter a number.")?,
                _ => self.console.show("Please enter 0 or 1.")?,
            }
        }
    }

    fn now(&self) -> String {
        timestamp::now(&self.timestamp_format)
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        for line in &result.rendered {
            self.console.show(line)?;
        }
        self.print_messages(&result.messages)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            match message.level {
                MessageLevel::Info => self.console.show(message.content.dimmed())?,
                MessageLevel::Success => self.console.show(message.content.green())?,
                MessageLevel::Warning => self.console.show(message.content.yellow())?,
                MessageLevel::Error => self.console.show(message.content.red())?,
            }
        }
        Ok(())
    }
}
