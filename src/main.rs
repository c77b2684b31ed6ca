//! dme: interactive deobfuscation map editor
//!
//! Startup order:
//! 1. Arguments and config
//! 2. Logging (stderr or file)
//! 3. Map path (argument, $DME_MAP, config, then prompt)
//! 4. Load, show statistics, run the menu

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use dme::cli::{self, init_logging, resolve_map_path, Args, Config, LogSettings};
use dme::ui::{self, prompt::ask_value, Session, TerminalPrompt};
use dme::Editor;

fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(cli::EXIT_FAILURE);
        }
    };

    // Guard must outlive the session so buffered log lines are flushed
    let _logging = match init_logging(&LogSettings::resolve(&args, &config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(cli::EXIT_FAILURE);
        }
    };

    match run(args, &config) {
        Ok(()) => process::exit(cli::EXIT_SUCCESS),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(cli::EXIT_FAILURE);
        }
    }
}

fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let mut prompt = TerminalPrompt::stdout();

    let path = match resolve_map_path(args.map, config) {
        Some(path) => path,
        None => match ask_value(&mut prompt, "Deobfuscation Map file")? {
            Some(value) => value.into(),
            None => {
                info!("No map file given, exiting");
                return Ok(());
            }
        },
    };

    let (editor, failure) = Editor::open(&path);
    let mut session = Session::new(editor);
    session.show_banner();
    if let Some(e) = failure {
        session.error(format!("Failed to load map: {e}"));
    }

    ui::run(&mut session, &mut prompt, &mut io::stdout())
        .with_context(|| format!("Terminal error while editing {}", path.display()))?;

    info!(path = %path.display(), "Session finished");
    Ok(())
}
