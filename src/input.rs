// Resolves the CLI's text source: positional arguments, a named file, or
// piped stdin, in that order. This boundary is the one place where input can
// genuinely be absent at runtime, so it is where NullInput surfaces.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::Error;

/// Gather the text to convert from the first available source.
///
/// Precedence: positional `args` joined with single spaces, then the contents
/// of `file`, then piped stdin. An interactive terminal is never read, so
/// invoking the tool bare fails immediately instead of hanging.
///
/// # Errors
///
/// [`Error::NullInput`] when every channel comes up empty; a contextual I/O
/// error when `file` names an unreadable path.
pub fn gather_text(args: &[String], file: Option<&Path>) -> Result<String> {
    if !args.is_empty() {
        debug!(count = args.len(), "joining positional text arguments");
        return Ok(args.join(" "));
    }

    if let Some(path) = file {
        debug!(path = %path.display(), "reading text from file");
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::NullInput.into());
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read piped stdin")?;
    if text.is_empty() {
        return Err(Error::NullInput.into());
    }

    debug!(bytes = text.len(), "read text from piped stdin");
    Ok(text)
}
