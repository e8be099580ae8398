//! Presentation theme state.
//!
//! DESIGN
//! ======
//! Keeps the visual theme out of `CheckState` so toggling it never touches
//! form or result data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual theme; exactly one class is present on the document body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Modern,
    Cyber,
}

impl Theme {
    /// Theme selected by the toggle's checked state.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Cyber } else { Self::Modern }
    }

    #[must_use]
    pub fn is_cyber(self) -> bool {
        self == Self::Cyber
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Modern => "theme-modern",
            Self::Cyber => "theme-cyber",
        }
    }

    /// The class that must be absent while this theme is active.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Modern => Self::Cyber,
            Self::Cyber => Self::Modern,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
