//! Hook point definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumeration of all hook points in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    // ── Process lifecycle ──
    /// Fired once the engine has started.
    Startup,
    /// Fired during orderly process termination.
    Shutdown,

    // ── UI lifecycle ──
    /// Fired when the main window is being built.
    UiStartup,
    /// Fired after the main window has been shown.
    UiPostStartup,
    /// Fired when the main window is going away.
    UiShutdown,

    // ── Book ──
    /// Fired when a new, empty book is created.
    NewBook,
    /// Fired after a book has been opened.
    BookOpened,
    /// Fired before a book is closed.
    BookClosed,
    /// Fired after a book has been saved.
    BookSaved,

    // ── Extensions ──
    /// Fired when options should be written out.
    SaveOptions,
    /// Fired when a menu extension is contributed.
    AddExtension,
}

impl HookPoint {
    /// Every hook point.
    pub const ALL: [HookPoint; 11] = [
        Self::Startup,
        Self::Shutdown,
        Self::UiStartup,
        Self::UiPostStartup,
        Self::UiShutdown,
        Self::NewBook,
        Self::BookOpened,
        Self::BookClosed,
        Self::BookSaved,
        Self::SaveOptions,
        Self::AddExtension,
    ];

    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Shutdown => "shutdown",
            Self::UiStartup => "ui_startup",
            Self::UiPostStartup => "ui_post_startup",
            Self::UiShutdown => "ui_shutdown",
            Self::NewBook => "new_book",
            Self::BookOpened => "book_opened",
            Self::BookClosed => "book_closed",
            Self::BookSaved => "book_saved",
            Self::SaveOptions => "save_options",
            Self::AddExtension => "add_extension",
        }
    }

    /// Returns a short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Startup => "Functions to run at startup",
            Self::Shutdown => "Functions to run at shutdown",
            Self::UiStartup => "Functions to run when the UI comes up",
            Self::UiPostStartup => "Functions to run after the UI comes up",
            Self::UiShutdown => "Functions to run when the UI goes down",
            Self::NewBook => "Run after a new (empty) book is opened",
            Self::BookOpened => "Run after a book is opened",
            Self::BookClosed => "Run before a book is closed",
            Self::BookSaved => "Run after a book is saved",
            Self::SaveOptions => "Functions to run when saving options",
            Self::AddExtension => "Functions to run when the extensions menu is created",
        }
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_hook_has_unique_name_and_description() {
        let names: HashSet<_> = HookPoint::ALL.iter().map(HookPoint::as_str).collect();
        assert_eq!(names.len(), HookPoint::ALL.len());

        for hook in HookPoint::ALL {
            assert!(!hook.description().is_empty(), "{hook} has no description");
        }
    }

    #[test]
    fn test_display_matches_serde_name() {
        let json = serde_json::to_string(&HookPoint::UiPostStartup).unwrap();
        assert_eq!(json, format!("\"{}\"", HookPoint::UiPostStartup));
    }
}
