//! Notice rendering
//!
//! Plain line output with crossterm colouring. Layout (table borders, stats
//! lines, title rule) is computed by pure functions so it can be tested
//! without a terminal.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, Stylize},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

use crate::stats::MapStats;
use crate::ui::state::{EntryTable, Notice, Tone};

/// Application title
pub const TITLE: &str = "Deobfuscation Map Editor";

const KEY_HEADER: &str = "Obfuscated";
const FALLBACK_WIDTH: u16 = 80;
const STATS_FOOTER: &str = "---------------------------";

/// Render and flush all notices in order
pub fn render_notices<W: Write>(out: &mut W, notices: Vec<Notice>) -> io::Result<()> {
    for notice in notices {
        match notice {
            Notice::Success(text) => queue!(out, Print(text.green().bold()), Print("\n"))?,
            Notice::Warning(text) => queue!(out, Print(text.yellow()), Print("\n"))?,
            Notice::Error(text) => queue!(out, Print(text.red()), Print("\n"))?,
            Notice::Table(table) => render_table(out, &table)?,
            Notice::Banner(stats) => render_banner(out, &stats)?,
        }
    }
    out.flush()
}

fn render_table<W: Write>(out: &mut W, table: &EntryTable) -> io::Result<()> {
    let border = match table.tone {
        Tone::Normal => Color::Green,
        Tone::Danger => Color::Red,
    };

    if let Some(title) = &table.title {
        let title_color = match table.tone {
            Tone::Normal => Color::Yellow,
            Tone::Danger => Color::Red,
        };
        queue!(out, Print(title.as_str().with(title_color).bold()), Print("\n"))?;
    }

    for line in table_lines(table) {
        queue!(out, Print(line.with(border)), Print("\n"))?;
    }
    Ok(())
}

fn render_banner<W: Write>(out: &mut W, stats: &MapStats) -> io::Result<()> {
    let width = terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH);

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(title_rule(width as usize).with(Color::DarkRed).bold()),
        Print("\n"),
        Print("File Statistics:".green().bold()),
        Print("\n")
    )?;

    for (label, value) in stats_lines(stats) {
        queue!(
            out,
            Print(format!(" - {label}").yellow().bold()),
            Print(": "),
            Print(value.with(Color::DarkYellow)),
            Print("\n")
        )?;
    }

    queue!(out, Print(STATS_FOOTER.with(Color::DarkYellow)), Print("\n"))
}

/// Title centred in a horizontal rule of `width` columns
pub fn title_rule(width: usize) -> String {
    let title = format!(" {TITLE} ");
    let title_len = title.chars().count();
    if width <= title_len + 2 {
        return title.trim().to_string();
    }

    let left = (width - title_len) / 2;
    let right = width - title_len - left;
    format!("{}{}{}", "─".repeat(left), title, "─".repeat(right))
}

/// Label/value pairs of the statistics block
pub fn stats_lines(stats: &MapStats) -> Vec<(&'static str, String)> {
    vec![
        ("Distinct Entries", stats.distinct_identifiers.to_string()),
        ("Total Entries", stats.total_entries.to_string()),
        (
            "Last Edited",
            stats
                .last_modified
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "never".to_string()),
        ),
        (
            "File Size",
            stats
                .size_kib()
                .map(|kib| format!("{kib} KB"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Compressed", stats.compression.is_gzip().to_string()),
    ]
}

/// Rounded-border table lines (without colour)
pub fn table_lines(table: &EntryTable) -> Vec<String> {
    let width = |s: &str| s.chars().count();

    let key_width = table
        .rows
        .iter()
        .map(|row| width(&row.key))
        .chain(std::iter::once(width(KEY_HEADER)))
        .max()
        .unwrap_or_default();
    let identifier_width = table
        .rows
        .iter()
        .map(|row| width(&row.identifier))
        .chain(std::iter::once(width(&table.identifier_header)))
        .max()
        .unwrap_or_default();

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(key_width + 2),
            "─".repeat(identifier_width + 2)
        )
    };
    let row = |key: &str, identifier: &str| {
        format!(
            "│ {key}{} │ {identifier}{} │",
            " ".repeat(key_width - width(key)),
            " ".repeat(identifier_width - width(identifier))
        )
    };

    let mut lines = Vec::with_capacity(table.rows.len() + 4);
    lines.push(rule("╭", "┬", "╮"));
    lines.push(row(KEY_HEADER, &table.identifier_header));
    lines.push(rule("├", "┼", "┤"));
    lines.extend(table.rows.iter().map(|r| row(&r.key, &r.identifier)));
    lines.push(rule("╰", "┴", "╯"));
    lines
}
