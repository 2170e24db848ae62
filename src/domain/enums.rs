use serde::{Deserialize, Serialize};

/// Light or dark presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label shown on the header switch
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the header switch
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

/// Where keystrokes go on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the selection, letters trigger actions
    Normal,
    /// Keystrokes edit the pending input text
    Input,
}

/// Result of submitting the pending input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new task was appended
    Added,
    /// The task under edit was replaced in place
    Updated,
    /// The input was empty or whitespace, nothing changed
    Rejected,
}

impl AddOutcome {
    pub fn is_applied(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}
