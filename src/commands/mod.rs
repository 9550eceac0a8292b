//! Command implementation for inject-config.
//!
//! Loads the config document, flattens it, and prints the flag line.

use crate::cli::Cli;
use crate::config::load_document;
use crate::error::Result;
use crate::flags::render_line;
use crate::flatten::flatten;


/// Run the tool for parsed arguments.
pub fn dispatch(cli: &Cli) -> Result<()> {
    if let Some(line) = build_line(cli)? {
        println!("{}", line);
    }
    Ok(())
}

/// Produce the flag line for the configured file, or `None` if the config
/// yields no flags.
pub fn build_line(cli: &Cli) -> Result<Option<String>> {
    let doc = load_document(&cli.config, cli.format)?;
    let entries = flatten(&doc, &cli.prefix)?;
    tracing::info!(flags = entries.len(), "flattened config");
    Ok(render_line(&entries))
}
