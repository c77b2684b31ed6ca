//! Session state for the interactive front end
//!
//! The session owns the editor plus a queue of notices waiting to be
//! rendered. Handlers only push notices; the loop drains and renders them.

use crate::editor::Editor;
use crate::stats::MapStats;
use crate::store::Entry;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Colouring of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Danger,
}

/// Two-column entry table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTable {
    pub title: Option<String>,
    pub identifier_header: String,
    pub rows: Vec<Entry>,
    pub tone: Tone,
}

impl EntryTable {
    pub fn new(title: Option<&str>, rows: Vec<Entry>) -> Self {
        Self {
            title: title.map(String::from),
            identifier_header: "Identifier".to_string(),
            rows,
            tone: Tone::Normal,
        }
    }

    /// Red table for entries about to be removed
    pub fn danger(title: &str, identifier_header: &str, rows: Vec<Entry>) -> Self {
        Self {
            title: Some(title.to_string()),
            identifier_header: identifier_header.to_string(),
            rows,
            tone: Tone::Danger,
        }
    }
}

/// Something to show the user
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
    Table(EntryTable),
    /// Clear the screen, then show the title and statistics
    Banner(MapStats),
}

/// Interactive session
#[derive(Debug)]
pub struct Session {
    pub editor: Editor,
    notices: Vec<Notice>,
    state: AppState,
}

impl Session {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            notices: Vec::new(),
            state: AppState::Running,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(Notice::Success(text.into()));
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.notify(Notice::Warning(text.into()));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(Notice::Error(text.into()));
    }

    /// Queue the title and current statistics
    pub fn show_banner(&mut self) {
        let stats = self.editor.stats();
        self.notify(Notice::Banner(stats));
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MapFile;
    use crate::store::MapStore;

    fn session() -> Session {
        Session::new(Editor::with_store(
            MapFile::new("/nonexistent/dme/map.csv"),
            MapStore::new(),
        ))
    }

    #[test]
    fn test_quit_changes_state() {
        let mut session = session();
        assert_eq!(session.state(), AppState::Running);
        session.quit();
        assert_eq!(session.state(), AppState::Quitting);
    }

    #[test]
    fn test_take_notices_drains_queue() {
        let mut session = session();
        session.success("done");
        session.warning("careful");
        assert_eq!(session.notices().len(), 2);

        let taken = session.take_notices();
        assert_eq!(
            taken,
            vec![
                Notice::Success("done".to_string()),
                Notice::Warning("careful".to_string())
            ]
        );
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_banner_reflects_store() {
        let mut session = session();
        session.show_banner();
        match &session.notices()[0] {
            Notice::Banner(stats) => assert_eq!(stats.total_entries, 0),
            other => panic!("unexpected notice: {:?}", other),
        }
    }
}
