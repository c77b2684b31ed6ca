//! Menu command handlers
//!
//! One handler per [`MenuCommand`]. An empty or cancelled prompt aborts the
//! command without touching the map. Save failures are reported as error
//! notices; only terminal I/O errors propagate.

use tracing::debug;

use crate::editor::RenameOutcome;
use crate::ui::input::MenuCommand;
use crate::ui::prompt::{ask_value, Prompt};
use crate::ui::state::{EntryTable, Notice, Session};
use crate::ui::Result;

/// Confirmation choices for Clean Data
const CLEAN_CHOICES: [&str; 2] = ["Yes", "No (Keep them)"];

/// Dispatch one menu command
pub fn execute_command<P: Prompt + ?Sized>(
    session: &mut Session,
    cmd: MenuCommand,
    prompt: &mut P,
) -> Result<()> {
    debug!(?cmd, "Executing menu command");
    match cmd {
        MenuCommand::Search => handle_search(session, prompt),
        MenuCommand::Add => handle_add(session, prompt),
        MenuCommand::Update => handle_update(session, prompt),
        MenuCommand::Remove => handle_remove(session, prompt),
        MenuCommand::Clean => handle_clean(session, prompt),
        MenuCommand::Reload => {
            handle_reload(session);
            Ok(())
        }
        MenuCommand::ToggleCompression => {
            handle_toggle_compression(session);
            Ok(())
        }
        MenuCommand::Exit => {
            session.quit();
            Ok(())
        }
    }
}

/// Ask for a required value; logs and returns `None` on abort
fn ask_required<P: Prompt + ?Sized>(prompt: &mut P, label: &str) -> Result<Option<String>> {
    let value = ask_value(prompt, label)?;
    if value.is_none() {
        debug!(label, "Prompt aborted");
    }
    Ok(value)
}

/// Handle Search
pub fn handle_search<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<()> {
    let Some(term) = ask_required(prompt, "Enter name (identifier or obfuscated)")? else {
        return Ok(());
    };

    let results = session.editor.search(&term);
    if results.is_empty() {
        session.warning("No matches found.");
    } else {
        session.notify(Notice::Table(EntryTable::new(
            Some("Search Results"),
            results,
        )));
    }
    Ok(())
}

/// Handle Add
pub fn handle_add<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<()> {
    let Some(key) = ask_required(prompt, "Enter Obfuscated name")? else {
        return Ok(());
    };
    let Some(identifier) = ask_required(prompt, "Enter Identifier name")? else {
        return Ok(());
    };

    match session.editor.add(&key, &identifier) {
        Ok(stored) => session.success(format!("✔ Added {stored} and saved.")),
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
    Ok(())
}

/// Handle Update (rename every entry mapped to an identifier)
pub fn handle_update<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<()> {
    let Some(old) = ask_required(prompt, "Enter the identifier you want to update")? else {
        return Ok(());
    };

    let preview = session.editor.rename_preview(&old);
    if preview.is_empty() {
        session.warning("No obfuscated names found for this identifier.");
        return Ok(());
    }
    session.notify(Notice::Table(EntryTable::new(None, preview)));

    let Some(new) = ask_required(prompt, "Enter the new identifier")? else {
        return Ok(());
    };

    match session.editor.rename(&old, &new) {
        Ok(RenameOutcome::Renamed(count)) => session.success(format!(
            "Identifier updated for {count} obfuscated name(s) and saved."
        )),
        Ok(RenameOutcome::NoMatches) => {
            session.warning("No obfuscated names found for this identifier.")
        }
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
    Ok(())
}

/// Handle Remove
pub fn handle_remove<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<()> {
    let Some(key) = ask_required(prompt, "Enter Obfuscated name to remove")? else {
        return Ok(());
    };

    match session.editor.remove(&key) {
        Ok(true) => session.success("✔ Entry removed."),
        Ok(false) => session.warning("No such key found."),
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
    Ok(())
}

/// Handle Clean Data
pub fn handle_clean<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<()> {
    let candidates = session.editor.clean_candidates();
    if candidates.is_empty() {
        session.success("No invalid entries found.");
        return Ok(());
    }

    session.notify(Notice::Table(EntryTable::danger(
        "Invalid Entries",
        "Identifier Name",
        candidates.clone(),
    )));

    let choices: Vec<String> = CLEAN_CHOICES.iter().map(|c| c.to_string()).collect();
    let confirmed = prompt.select("Do you want to remove these invalid entries?", &choices)?
        == Some(0);

    if !confirmed {
        session.warning("Keeping all entries.");
        return Ok(());
    }

    match session.editor.remove_invalid(&candidates) {
        Ok(removed) => session.success(format!(
            "{removed} invalid entries removed and file updated."
        )),
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
    Ok(())
}

/// Handle Reload: save, then load fresh
pub fn handle_reload(session: &mut Session) {
    match session.editor.reload() {
        Ok(failure) => {
            session.show_banner();
            if let Some(e) = failure {
                session.error(format!("Failed to load map: {e}"));
            }
        }
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
}

/// Handle Compress / Decompress
pub fn handle_toggle_compression(session: &mut Session) {
    match session.editor.toggle_compression() {
        Ok(failure) => {
            session.show_banner();
            if let Some(e) = failure {
                session.error(format!("Failed to load map: {e}"));
            }
            if session.editor.compression().is_gzip() {
                session.success("✔ Compressed and saved.");
            } else {
                session.success("✔ Decompressed and saved.");
            }
        }
        Err(e) => session.error(format!("Failed to save map: {e}")),
    }
}
