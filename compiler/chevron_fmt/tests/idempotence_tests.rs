#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Idempotence verification over every source file in the repository's
//! test corpus.
//!
//! For each Java, C# or C++ file:
//! 1. format(format(code)) == format(code)
//! 2. only spaces and tabs differ between input and output
//! 3. bracket roles are identical before and after formatting

use std::fs;
use std::path::{Path, PathBuf};

use chevron_fmt::{disambiguate, format_source, FormatOptions, Language};
use chevron_lexer::{tokenize, BracketRole, LexOptions, Token};

/// Find all supported source files, skipping hidden entries and build output.
fn find_all_source_files(dir: &Path) -> Vec<(PathBuf, Language)> {
    let mut files = Vec::new();

    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = path.file_name().map(|n| n.to_string_lossy().to_string());

        if let Some(ref n) = name {
            if n.starts_with('.') || n == "target" || n == "node_modules" {
                continue;
            }
        }

        if path.is_dir() {
            files.extend(find_all_source_files(&path));
        } else if let Some(lang) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
        {
            files.push((path, lang));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Get repository root.
fn repo_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn roles(source: &str, lang: Language, options: &FormatOptions) -> Vec<BracketRole> {
    let tokens = tokenize(source, lang, LexOptions::default()).unwrap();
    disambiguate(&tokens, &options.disambiguator)
        .tokens
        .iter()
        .filter_map(Token::role)
        .collect()
}

fn blanks_removed(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ' ' | '\t')).collect()
}

fn check_file(path: &Path, lang: Language) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let options = FormatOptions::for_language(lang);

    let first = format_source(&source, &options).map_err(|e| format!("{}: {e}", path.display()))?;
    let second =
        format_source(&first.text, &options).map_err(|e| format!("{}: {e}", path.display()))?;

    if first.text != second.text {
        return Err(format!(
            "Idempotency failure for {}:\n\n--- First format ---\n{}\n--- Second format ---\n{}\n",
            path.display(),
            first.text,
            second.text
        ));
    }
    if blanks_removed(&source) != blanks_removed(&first.text) {
        return Err(format!("{}: formatting changed more than blanks", path.display()));
    }
    if roles(&source, lang, &options) != roles(&first.text, lang, &options) {
        return Err(format!("{}: bracket roles changed", path.display()));
    }
    Ok(())
}

#[test]
fn all_corpus_files_are_idempotent() {
    let files = find_all_source_files(&repo_root().join("tests"));
    assert!(!files.is_empty(), "no source files found under tests/");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|(path, lang)| check_file(path, *lang).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} idempotence failures:\n\n{}",
        failures.len(),
        failures.join("\n---\n")
    );
}

#[test]
fn crlf_line_endings_are_kept() {
    let source = "Map< K , V > m;\r\nList< T > xs;\r\n";
    let formatted = format_source(source, &FormatOptions::default()).unwrap();
    assert_eq!(formatted.text, "Map<K, V> m;\r\nList<T> xs;\r\n");
}

#[test]
fn byte_order_mark_is_kept() {
    let source = "\u{feff}List< T > xs;";
    let formatted = format_source(source, &FormatOptions::default()).unwrap();
    assert_eq!(formatted.text, "\u{feff}List<T> xs;");
}
