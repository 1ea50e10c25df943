use crate::error::NoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the words used when rendering notes (status, timestamp captions, history).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(NoteError::Config(format!(
                "Unknown locale: {} (expected ru or en)",
                other
            ))),
        }
    }
}

/// Localized words used when rendering notes. Menu text and command messages are English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub created: &'static str,
    pub updated: &'static str,
    pub done: &'static str,
    pub not_done: &'static str,
    pub empty_notebook: &'static str,
    pub version: &'static str,
}

const RU: Labels = Labels {
    created: "создано",
    updated: "изменено",
    done: "сделано",
    not_done: "не сделано",
    empty_notebook: "Заметок пока нет.",
    version: "версия",
};

const EN: Labels = Labels {
    created: "created",
    updated: "updated",
    done: "done",
    not_done: "not done",
    empty_notebook: "No notes yet.",
    version: "version",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ru => RU,
            Locale::En => EN,
        }
    }

    pub fn status(&self, done: bool) -> &'static str {
        if done {
            self.done
        } else {
            self.not_done
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_russian() {
        let labels = Labels::default();
        assert_eq!(labels.status(true), "сделано");
        assert_eq!(labels.status(false), "не сделано");
    }

    #[test]
    fn parses_locale_case_insensitively() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ru ".parse::<Locale>().unwrap(), Locale::Ru);
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, NoteError::Config(_)));
    }
}
