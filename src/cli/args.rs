//! CLI argument parsing
//!
//! ```text
//! dme [OPTIONS] [MAP]
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Deobfuscation Map Editor
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "dme", version, about = "Interactive editor for deobfuscation maps")]
pub struct Args {
    /// Mapping file (a `.gz` suffix selects gzip framing)
    pub map: Option<PathBuf>,

    /// Config file (default: $DME_HOME/config.toml, then ./dme.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "dme=debug"
    /// (default: $RUST_LOG, then `log_level` from the config, else "warn")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}
