//! Menu commands
//!
//! Closed set of menu entries. The toggle entry's label depends on the
//! current framing; dispatch never matches on labels.

use crate::codec::Compression;

/// Menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Search,
    Add,
    Update, // rename by identifier
    Remove,
    Clean,
    Reload,
    ToggleCompression, // "Compress" / "Decompress"
    Exit,
}

impl MenuCommand {
    /// Menu order
    pub const ALL: [MenuCommand; 8] = [
        MenuCommand::Search,
        MenuCommand::Add,
        MenuCommand::Update,
        MenuCommand::Remove,
        MenuCommand::Clean,
        MenuCommand::Reload,
        MenuCommand::ToggleCompression,
        MenuCommand::Exit,
    ];

    /// Label shown in the menu
    ///
    /// ```
    /// use dme::codec::Compression;
    /// use dme::ui::MenuCommand;
    ///
    /// assert_eq!(MenuCommand::ToggleCompression.label(Compression::Plain), "Compress");
    /// assert_eq!(MenuCommand::ToggleCompression.label(Compression::Gzip), "Decompress");
    /// ```
    pub fn label(self, compression: Compression) -> &'static str {
        match self {
            MenuCommand::Search => "Search",
            MenuCommand::Add => "Add",
            MenuCommand::Update => "Update",
            MenuCommand::Remove => "Remove",
            MenuCommand::Clean => "Clean Data",
            MenuCommand::Reload => "Reload",
            MenuCommand::ToggleCompression => match compression {
                Compression::Plain => "Compress",
                Compression::Gzip => "Decompress",
            },
            MenuCommand::Exit => "Exit",
        }
    }

    /// Position in [`MenuCommand::ALL`]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&cmd| cmd == self)
            .unwrap_or_default()
    }
}
