//! Command handlers for the chevron CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and rendering lexer errors live here in the module root.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::Path;

use chevron_lexer::{Language, LexError};

mod fmt;
mod lex;

pub use fmt::{format_file, parse_format_args, run_format, FormatArgs, FormatConfig, FormatResult};
pub use lex::lex_file;

/// Read a file from disk, mapping IO failures to a user-facing message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Language of a path, detected from its extension.
pub(crate) fn language_for(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
}

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BLUE: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

fn use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// 1-based line and column of a byte offset. Columns count characters.
pub(crate) fn offset_to_line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

/// The source line containing `offset`, without its terminator.
fn source_line(source: &str, offset: u32) -> Option<&str> {
    let offset = offset as usize;
    if offset > source.len() || !source.is_char_boundary(offset) {
        return None;
    }
    let line_start = source[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |pos| offset + pos);
    Some(source[line_start..line_end].trim_end_matches('\r'))
}

/// Render a lexer error with location and source snippet.
pub(crate) fn render_lex_error(path: &str, source: &str, error: &LexError) -> String {
    render_lex_error_with(path, source, error, use_colors())
}

fn render_lex_error_with(path: &str, source: &str, error: &LexError, color: bool) -> String {
    let (error_style, blue, note, reset) = if color {
        (colors::ERROR, colors::BLUE, colors::NOTE, colors::RESET)
    } else {
        ("", "", "", "")
    };
    let mut output = String::new();
    let (line, col) = offset_to_line_col(source, error.offset());

    let _ = writeln!(output, "{error_style}error{reset}: {error}");
    let _ = writeln!(output, "  {blue}-->{reset} {path}:{line}:{col}");

    if let Some(text) = source_line(source, error.offset()) {
        let line_num = line.to_string();
        let padding = " ".repeat(line_num.len());
        let _ = writeln!(output, "  {padding} {blue}|{reset}");
        let _ = writeln!(output, "  {blue}{line_num} |{reset} {text}");
        let _ = writeln!(
            output,
            "  {padding} {blue}|{reset} {}{error_style}^{reset}",
            " ".repeat(col - 1)
        );
    }
    let _ = writeln!(output, "{note}note{reset}: file left unmodified");
    output
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
