//! CLI argument parsing for inject-config.
//!
//! Uses clap derive macros for declarative argument definitions. The tool has
//! a single job, so there are no subcommands; the run itself lives in the
//! `commands` module.

use crate::config::{ConfigFormat, DEFAULT_CONFIG_PATH};
use clap::Parser;
use std::path::PathBuf;

/// inject-config: turn a config file into `-D` compile-time definitions.
///
/// Every leaf value becomes one flag, named by its key path joined with `_`:
/// - "" becomes a bare flag (-DNAME)
/// - "`raw`" is emitted unquoted (regex metacharacters escaped)
/// - other strings are emitted as \"string\" literals
/// - booleans and numbers are emitted as-is
///
/// The flags are printed on one line; nothing is printed if there are none.
#[derive(Parser, Debug)]
#[command(name = "inject-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to read.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Config syntax. Detected from the file extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<ConfigFormat>,

    /// Prefix prepended (with `_`) to every flag name.
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Log debug detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
