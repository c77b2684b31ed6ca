//! Interactive front end
//!
//! A thin shell over [`crate::editor::Editor`]:
//! - NO async
//! - NO background threads
//! - Every menu entry is one editor operation
//!
//! Handlers never print. They push [`Notice`]s onto the [`Session`] and the
//! loop renders them, so handlers run the same against a terminal or a script.

pub mod handlers;
pub mod input;
pub mod prompt;
pub mod state;
pub mod view;

// Re-exports
pub use handlers::execute_command;
pub use input::MenuCommand;
pub use prompt::{Answer, Prompt, TerminalPrompt};
pub use state::{AppState, EntryTable, Notice, Session, Tone};
pub use view::render_notices;

use std::io::Write;
use tracing::debug;

/// UI result type
pub type Result<T> = std::result::Result<T, Error>;

/// UI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Title shown above the menu
pub const MENU_TITLE: &str = "What do you want to do?";

/// Run the menu loop until Exit is chosen or input is closed
pub fn run<P, W>(session: &mut Session, prompt: &mut P, out: &mut W) -> Result<()>
where
    P: Prompt + ?Sized,
    W: Write,
{
    loop {
        render_notices(out, session.take_notices())?;

        if session.state() == AppState::Quitting {
            return Ok(());
        }

        let commands = MenuCommand::ALL;
        let labels: Vec<String> = commands
            .iter()
            .map(|cmd| cmd.label(session.editor.compression()).to_string())
            .collect();

        match prompt.select(MENU_TITLE, &labels)? {
            Some(index) => match commands.get(index) {
                Some(&cmd) => execute_command(session, cmd, prompt)?,
                None => debug!(index, "Selection out of range"),
            },
            None if prompt.is_closed() => {
                debug!("Input closed, leaving menu");
                return Ok(());
            }
            None => debug!("Menu selection cancelled"),
        }
    }
}
