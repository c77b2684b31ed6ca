//! Cancellable prompts
//!
//! A prompt returns either a value or [`Answer::Cancelled`]. Esc and Ctrl+C
//! cancel only the pending prompt; callers treat cancellation exactly like an
//! empty answer.
//!
//! When stdin is not a terminal, prompts fall back to plain line reads and
//! end of input counts as cancellation.

use crossterm::{
    cursor::{Hide, MoveToColumn, MoveUp, Show},
    event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Print, Stylize},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, BufRead, IsTerminal, Stdout, Write};

use crate::ui::Result;

/// Prompt answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Value(String),
    Cancelled,
}

impl Answer {
    /// Trimmed non-empty value; empty and cancelled answers give `None`
    pub fn into_value(self) -> Option<String> {
        match self {
            Answer::Value(value) => {
                let value = value.trim();
                (!value.is_empty()).then(|| value.to_string())
            }
            Answer::Cancelled => None,
        }
    }
}

/// Source of user answers
pub trait Prompt {
    /// Ask for a line of text
    fn ask(&mut self, label: &str) -> Result<Answer>;

    /// Pick one of `choices`; `None` when cancelled
    fn select(&mut self, title: &str, choices: &[String]) -> Result<Option<usize>>;

    /// True once no further input can arrive
    fn is_closed(&self) -> bool {
        false
    }
}

/// Ask and reduce the answer to an optional non-empty value
pub fn ask_value<P: Prompt + ?Sized>(prompt: &mut P, label: &str) -> Result<Option<String>> {
    Ok(prompt.ask(label)?.into_value())
}

/// Disables raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal prompt on stdin/stdout
pub struct TerminalPrompt<W: Write> {
    out: W,
    interactive: bool,
    closed: bool,
}

impl TerminalPrompt<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stdin().is_terminal())
    }
}

impl<W: Write> TerminalPrompt<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            closed: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn draw_input(&mut self, label: &str, buffer: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(label.cyan()),
            Print(": "),
            Print(buffer)
        )?;
        self.out.flush()
    }

    fn draw_choices(&mut self, choices: &[String], selected: usize, redraw: bool) -> io::Result<()> {
        if redraw {
            queue!(self.out, MoveUp(choices.len() as u16))?;
        }
        for (i, choice) in choices.iter().enumerate() {
            queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            if i == selected {
                queue!(self.out, Print("> ".cyan()), Print(choice.as_str().cyan().bold()))?;
            } else {
                queue!(self.out, Print("  "), Print(choice))?;
            }
            queue!(self.out, Print("\r\n"))?;
        }
        self.out.flush()
    }

    fn ask_raw(&mut self, label: &str) -> io::Result<Answer> {
        let _raw = RawModeGuard::enable()?;
        let mut buffer = String::new();
        self.draw_input(label, &buffer)?;

        loop {
            let Event::Key(key) = read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_cancel(&key) {
                queue!(self.out, Print("\r\n"))?;
                self.out.flush()?;
                return Ok(Answer::Cancelled);
            }
            match key.code {
                KeyCode::Enter => {
                    queue!(self.out, Print("\r\n"))?;
                    self.out.flush()?;
                    return Ok(Answer::Value(buffer));
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.push(c);
                }
                _ => continue,
            }
            self.draw_input(label, &buffer)?;
        }
    }

    fn select_raw(&mut self, title: &str, choices: &[String]) -> io::Result<Option<usize>> {
        queue!(self.out, Print(title.bold()), Print("\r\n"), Hide)?;
        let _raw = RawModeGuard::enable()?;
        let mut selected = 0;
        self.draw_choices(choices, selected, false)?;

        let picked = loop {
            let Event::Key(key) = read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_cancel(&key) {
                break None;
            }
            match key.code {
                KeyCode::Up => selected = selected.checked_sub(1).unwrap_or(choices.len() - 1),
                KeyCode::Down => selected = (selected + 1) % choices.len(),
                KeyCode::Enter => break Some(selected),
                KeyCode::Char(c) => match c.to_digit(10) {
                    Some(n) if (1..=choices.len()).contains(&(n as usize)) => {
                        break Some(n as usize - 1)
                    }
                    _ => continue,
                },
                _ => continue,
            }
            self.draw_choices(choices, selected, true)?;
        };

        queue!(self.out, Show)?;
        self.out.flush()?;
        Ok(picked)
    }

    fn select_lines(&mut self, title: &str, choices: &[String]) -> io::Result<Option<usize>> {
        writeln!(self.out, "{title}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, choice)?;
        }
        write!(self.out, "Choice: ")?;
        self.out.flush()?;

        let line = self.read_line()?;
        self.finish_choice(line, choices.len())
    }

    /// Map a typed line to a choice index, warning on anything unusable
    fn finish_choice(&mut self, line: Option<String>, count: usize) -> io::Result<Option<usize>> {
        let Some(line) = line else {
            return Ok(None);
        };

        match parse_choice(&line, count) {
            Some(index) => Ok(Some(index)),
            None => {
                let warning = format!(
                    "Invalid choice '{}', enter a number from 1 to {count}.",
                    line.trim()
                );
                queue!(self.out, Print(warning.yellow()), Print("\n"))?;
                self.out.flush()?;
                Ok(None)
            }
        }
    }
}

/// 1-based choice number to index
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}

impl<W: Write> Prompt for TerminalPrompt<W> {
    fn ask(&mut self, label: &str) -> Result<Answer> {
        if self.interactive {
            return Ok(self.ask_raw(label)?);
        }

        write!(self.out, "{label}: ")?;
        self.out.flush()?;
        Ok(match self.read_line()? {
            Some(line) => Answer::Value(line),
            None => Answer::Cancelled,
        })
    }

    fn select(&mut self, title: &str, choices: &[String]) -> Result<Option<usize>> {
        if choices.is_empty() {
            return Ok(None);
        }
        if self.interactive {
            Ok(self.select_raw(title, choices)?)
        } else {
            Ok(self.select_lines(title, choices)?)
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
