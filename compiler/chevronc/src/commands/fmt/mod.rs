//! The `fmt` command: normalize generic-bracket spacing in source files.
//!
//! Supports single files, directories, and stdin. Directories are walked
//! first, then their files are formatted in parallel.

#![allow(
    clippy::struct_excessive_bools,
    reason = "FormatConfig has standard CLI config bool fields"
)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chevron_fmt::{format_source, ConfigFile, Language};
use rayon::prelude::*;
use tracing::debug;

use super::{language_for, read_file, render_lex_error};

/// Name of the per-directory ignore file.
const IGNORE_FILE: &str = ".chevronignore";

/// Configuration for the format command.
#[derive(Clone, Debug, Default)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// Returns exit code 1 if any files would be modified.
    pub check: bool,
    /// Show diff output instead of modifying files.
    pub diff: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// Ignore .chevronignore files and format everything.
    pub no_ignore: bool,
    /// Forced language; `None` detects it from each file's extension.
    pub language: Option<Language>,
    /// Spacing options loaded from `--config`.
    pub options: ConfigFile,
}

/// Parsed command line of `chevron fmt`.
#[derive(Debug, Default)]
pub struct FormatArgs {
    pub config: FormatConfig,
    pub paths: Vec<String>,
    pub config_path: Option<String>,
    pub help: bool,
}

/// Result of formatting a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum FormatResult {
    /// File was unchanged (already formatted).
    Unchanged,
    /// File was formatted successfully.
    Formatted,
    /// File would be formatted (in check or diff mode).
    WouldFormat,
    /// The tokenizer rejected the file; it was left untouched.
    /// Contains the rendered error message.
    LexError(String),
    /// The file could not be read, written, or assigned a language.
    Failed(String),
}

/// Parse the arguments following `chevron fmt`.
pub fn parse_format_args(args: &[String]) -> Result<FormatArgs, String> {
    let mut parsed = FormatArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => parsed.config.check = true,
            "--diff" => parsed.config.diff = true,
            "--stdin" => parsed.config.stdin = true,
            "--no-ignore" => parsed.config.no_ignore = true,
            "--help" | "-h" => parsed.help = true,
            "--config" => {
                let Some(path) = iter.next() else {
                    return Err("--config requires a file argument".to_string());
                };
                parsed.config_path = Some(path.clone());
            }
            "--lang" => {
                let Some(name) = iter.next() else {
                    return Err("--lang requires a language argument".to_string());
                };
                parsed.config.language = Some(parse_language(name)?);
            }
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    parsed.config_path = Some(path.to_string());
                } else if let Some(name) = other.strip_prefix("--lang=") {
                    parsed.config.language = Some(parse_language(name)?);
                } else if other.starts_with('-') && other != "-" {
                    return Err(format!("Unknown option: {other}"));
                } else {
                    parsed.paths.push(other.to_string());
                }
            }
        }
    }

    if parsed.config.stdin {
        if !parsed.paths.is_empty() {
            return Err("Cannot specify paths with --stdin".to_string());
        }
        if parsed.config.check {
            return Err("Cannot use --check with --stdin".to_string());
        }
        if parsed.config.diff {
            return Err("Cannot use --diff with --stdin".to_string());
        }
    }

    Ok(parsed)
}

fn parse_language(name: &str) -> Result<Language, String> {
    Language::from_name(name)
        .ok_or_else(|| format!("Unknown language: {name} (expected java, cs or cpp)"))
}

/// Format a single source file.
pub fn format_file(path: &str, config: &FormatConfig) -> FormatResult {
    let Some(language) = config.language.or_else(|| language_for(Path::new(path))) else {
        return FormatResult::Failed(format!(
            "cannot detect the language of '{path}'; pass --lang"
        ));
    };
    match read_file(path) {
        Ok(content) => format_content(path, &content, language, config),
        Err(msg) => FormatResult::Failed(msg),
    }
}

/// Format content from stdin and write to stdout.
///
/// Returns true if the content was tokenized, false otherwise. On failure
/// nothing is written to stdout.
fn format_stdin(config: &FormatConfig) -> bool {
    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }

    let options = config.options.options_for(config.language.unwrap_or_default());
    match format_source(&content, &options) {
        Ok(formatted) => {
            print!("{}", formatted.text);
            true
        }
        Err(e) => {
            eprint!("{}", render_lex_error("<stdin>", &content, &e));
            false
        }
    }
}

/// Format content and optionally write it back to `path`.
fn format_content(
    path: &str,
    content: &str,
    language: Language,
    config: &FormatConfig,
) -> FormatResult {
    let options = config.options.options_for(language);
    let formatted = match format_source(content, &options) {
        Ok(formatted) => formatted,
        Err(e) => return FormatResult::LexError(render_lex_error(path, content, &e)),
    };

    if !formatted.abandoned.is_empty() {
        debug!(
            path,
            abandoned = formatted.abandoned.len(),
            "left `<` unresolved as comparisons"
        );
    }

    if !formatted.changed {
        return FormatResult::Unchanged;
    }

    if config.check {
        return FormatResult::WouldFormat;
    }

    if config.diff {
        print!("{}", render_diff(path, content, &formatted.text));
        return FormatResult::WouldFormat;
    }

    if let Err(e) = std::fs::write(path, &formatted.text) {
        return FormatResult::Failed(format!("Error writing '{path}': {e}"));
    }

    FormatResult::Formatted
}

/// Render a unified-style diff between original and formatted content.
///
/// Spacing changes never add or remove lines, so lines are compared
/// pairwise and each changed region gets two lines of context.
fn render_diff(path: &str, original: &str, formatted: &str) -> String {
    let mut out = format!("--- {path}\n+++ {path}\n");

    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    let max_lines = original_lines.len().max(formatted_lines.len());

    let mut i = 0;
    while i < max_lines {
        if original_lines.get(i) == formatted_lines.get(i) {
            i += 1;
            continue;
        }

        let start = i.saturating_sub(2);
        let mut end = (i + 3).min(max_lines);
        // Extend the hunk while changes keep appearing inside its context.
        while end < max_lines
            && (end - 2..end).any(|j| original_lines.get(j) != formatted_lines.get(j))
        {
            end = (end + 1).min(max_lines);
        }

        out.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            start + 1,
            end - start,
            start + 1,
            end - start
        ));
        for j in start..end {
            match (original_lines.get(j), formatted_lines.get(j)) {
                (Some(orig), Some(fmt)) if orig == fmt => {
                    out.push_str(&format!(" {orig}\n"));
                }
                (Some(orig), Some(fmt)) => {
                    out.push_str(&format!("-{orig}\n+{fmt}\n"));
                }
                (Some(orig), None) => out.push_str(&format!("-{orig}\n")),
                (None, Some(fmt)) => out.push_str(&format!("+{fmt}\n")),
                (None, None) => {}
            }
        }
        i = end;
    }
    out
}

/// Totals for a batch of files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    /// Formatted, or would be formatted in check/diff mode.
    pub formatted: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl FormatSummary {
    fn add(&mut self, other: FormatSummary) {
        self.formatted += other.formatted;
        self.unchanged += other.unchanged;
        self.errors += other.errors;
    }
}

/// Print the outcome of one file and return its contribution to the totals.
fn report(path: &str, result: FormatResult, config: &FormatConfig) -> FormatSummary {
    match result {
        FormatResult::Formatted => {
            if !config.check && !config.diff {
                println!("Formatted: {path}");
            }
            FormatSummary {
                formatted: 1,
                ..FormatSummary::default()
            }
        }
        FormatResult::WouldFormat => {
            if config.check {
                println!("Would format: {path}");
            }
            FormatSummary {
                formatted: 1,
                ..FormatSummary::default()
            }
        }
        FormatResult::Unchanged => FormatSummary {
            unchanged: 1,
            ..FormatSummary::default()
        },
        FormatResult::LexError(msg) => {
            eprint!("{msg}");
            FormatSummary {
                errors: 1,
                ..FormatSummary::default()
            }
        }
        FormatResult::Failed(msg) => {
            eprintln!("{msg}");
            FormatSummary {
                errors: 1,
                ..FormatSummary::default()
            }
        }
    }
}

/// Format all supported files in a directory recursively.
///
/// Each file is tokenized and normalized independently on the rayon pool.
pub fn format_directory(path: &str, config: &FormatConfig) -> FormatSummary {
    let root = Path::new(path);
    let ignore_patterns = if config.no_ignore {
        Vec::new()
    } else {
        load_ignore_patterns(root)
    };

    let files = collect_source_files(root, config, &ignore_patterns);
    debug!(path, files = files.len(), "collected source files");

    let formatted = AtomicUsize::new(0);
    let unchanged = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|file_path| {
        let path_str = file_path.display().to_string();
        let summary = report(&path_str, format_file(&path_str, config), config);
        formatted.fetch_add(summary.formatted, Ordering::Relaxed);
        unchanged.fetch_add(summary.unchanged, Ordering::Relaxed);
        errors.fetch_add(summary.errors, Ordering::Relaxed);
    });

    FormatSummary {
        formatted: formatted.load(Ordering::Relaxed),
        unchanged: unchanged.load(Ordering::Relaxed),
        errors: errors.load(Ordering::Relaxed),
    }
}

/// Load ignore patterns from the `.chevronignore` file in `root`.
fn load_ignore_patterns(root: &Path) -> Vec<String> {
    match std::fs::read_to_string(root.join(IGNORE_FILE)) {
        Ok(content) => parse_ignore_patterns(&content),
        Err(_) => Vec::new(),
    }
}

fn parse_ignore_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Check if a path matches any of the ignore patterns.
///
/// `**` spans directories, `*` matches within one path component, and a
/// bare pattern matches a relative path, a directory prefix, or a file name.
fn is_ignored(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");
    let file_name = path.file_name().and_then(|n| n.to_str());

    patterns.iter().any(|pattern| {
        if let Some((prefix, suffix)) = pattern.split_once("**") {
            let prefix = prefix.trim_end_matches('/');
            let suffix = suffix.trim_start_matches('/');
            let matches_prefix = prefix.is_empty() || relative.starts_with(prefix);
            let matches_suffix = suffix.is_empty() || relative.ends_with(suffix);
            matches_prefix && matches_suffix
        } else if let Some((prefix, suffix)) = pattern.split_once('*') {
            relative.len() >= prefix.len() + suffix.len()
                && relative.starts_with(prefix)
                && relative.ends_with(suffix)
                && !relative[prefix.len()..relative.len() - suffix.len()].contains('/')
        } else {
            relative == *pattern
                || relative.starts_with(&format!("{pattern}/"))
                || file_name == Some(pattern.as_str())
        }
    })
}

/// Collect every supported source file under `root`, sorted by path.
fn collect_source_files(
    root: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    visit_source_files(root, root, config, ignore_patterns, &mut files);
    files.sort();
    files
}

fn visit_source_files(
    dir: &Path,
    root: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
    files: &mut Vec<PathBuf>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and common build directories (unless --no-ignore)
        if !config.no_ignore {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') || name == "target" || name == "node_modules" {
                    continue;
                }
            }
            if is_ignored(&path, root, ignore_patterns) {
                continue;
            }
        }

        if path.is_dir() {
            visit_source_files(&path, root, config, ignore_patterns, files);
        } else if language_for(&path).is_some() {
            files.push(path);
        }
    }
}

/// Run the format command and return the process exit code.
pub fn run_format(args: &[String]) -> i32 {
    let mut parsed = match parse_format_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run 'chevron fmt --help' for usage");
            return 1;
        }
    };

    if parsed.help {
        print_fmt_help();
        return 0;
    }

    if let Some(config_path) = &parsed.config_path {
        let text = match read_file(config_path) {
            Ok(text) => text,
            Err(msg) => {
                eprintln!("{msg}");
                return 1;
            }
        };
        match ConfigFile::parse(&text) {
            Ok(options) => parsed.config.options = options,
            Err(e) => {
                eprintln!("error: {config_path}: {e}");
                return 1;
            }
        }
    }

    let config = parsed.config;
    let mut paths = parsed.paths;

    if config.stdin {
        return i32::from(!format_stdin(&config));
    }

    // Default to current directory if no paths specified
    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut total = FormatSummary::default();
    let mut any_dir = false;

    for path in &paths {
        let path_obj = PathBuf::from(path);
        if path_obj.is_file() {
            total.add(report(path, format_file(path, &config), &config));
        } else if path_obj.is_dir() {
            any_dir = true;
            total.add(format_directory(path, &config));
        } else {
            eprintln!("Path not found: {path}");
            total.errors += 1;
        }
    }

    if paths.len() > 1 || any_dir {
        let verb = if config.check || config.diff {
            "would format"
        } else {
            "formatted"
        };
        if total.formatted > 0 || total.unchanged > 0 {
            println!("\n{} {verb}, {} unchanged", total.formatted, total.unchanged);
        }
    }

    if config.check && total.formatted > 0 {
        return 1;
    }
    i32::from(total.errors > 0)
}

fn print_fmt_help() {
    println!("Normalize generic-bracket spacing in Java, C# and C++ sources");
    println!();
    println!("Usage: chevron fmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths            Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check          Check if files are formatted (exit 1 if not)");
    println!("  --diff           Show diff output instead of modifying files");
    println!("  --stdin          Read from stdin, write to stdout");
    println!("  --no-ignore      Ignore .chevronignore files and format everything");
    println!("  --config <file>  Read spacing options (sp_* keys) from a file");
    println!("  --lang <name>    Force the language: java, cs, cpp");
    println!("  --help           Show this help message");
    println!();
    println!("Languages:");
    println!("  Detected from the extension: .java, .cs, .cpp .cc .cxx .hpp .hh .h ...");
    println!("  Other files are skipped when walking directories.");
    println!();
    println!("Ignore files:");
    println!("  Create a .chevronignore file to exclude paths from formatting.");
    println!("  Patterns support * (single directory) and ** (any directories).");
    println!("  Default ignores: hidden files (.*), target/, node_modules/");
    println!();
    println!("Examples:");
    println!("  chevron fmt src/                        # Format all files in src/");
    println!("  chevron fmt --check                     # Check formatting in CI");
    println!("  chevron fmt --config chevron.cfg src/   # Use custom spacing options");
    println!("  cat Main.java | chevron fmt --stdin     # Format stdin to stdout");
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
