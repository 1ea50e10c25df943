#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateText,
    CreateReminder,
    List,
    Edit,
    ToggleDone,
    DeleteById,
    DeleteAt,
    History,
    Exit,
}

impl MenuAction {
    /// All actions in menu order
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::CreateText,
            MenuAction::CreateReminder,
            MenuAction::List,
            MenuAction::Edit,
            MenuAction::ToggleDone,
            MenuAction::DeleteById,
            MenuAction::DeleteAt,
            MenuAction::History,
            MenuAction::Exit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::CreateText => "Create text note",
            MenuAction::CreateReminder => "Create reminder",
            MenuAction::List => "Show all notes",
            MenuAction::Edit => "Edit note",
            MenuAction::ToggleDone => "Mark reminder done / not done",
            MenuAction::DeleteById => "Delete note by id",
            MenuAction::DeleteAt => "Delete note by position",
            MenuAction::History => "Show note history",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::all().iter().map(MenuAction::label).collect()
    }

    /// Maps a 1-based menu number to its action.
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_one_based() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::CreateText));
        assert_eq!(MenuAction::from_choice(9), Some(MenuAction::Exit));
    }

    #[test]
    fn out_of_range_choices_are_rejected() {
        assert_eq!(MenuAction::from_choice(0), None);
        assert_eq!(MenuAction::from_choice(-1), None);
        assert_eq!(MenuAction::from_choice(10), None);
    }

    #[test]
    fn labels_follow_menu_order() {
        let labels = MenuAction::labels();
        assert_eq!(labels.len(), MenuAction::all().len());
        assert_eq!(labels.last(), Some(&"Exit"));
    }
}
