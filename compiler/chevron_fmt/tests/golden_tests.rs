//! Golden tests for the formatter.
//!
//! Each source file under `tests/fmt/<language>/` is formatted and compared
//! against `<file>.expected` when it exists, or against itself otherwise
//! (already-canonical input must come back byte-for-byte). A `chevron.cfg`
//! next to the fixtures supplies their options.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};

use chevron_fmt::{format_source, ConfigFile, Language};

/// Get the path to the tests/fmt directory.
fn golden_tests_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fmt")
}

/// Find source files for `lang` in a directory recursively.
fn find_source_files(dir: &Path, lang: Language) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(find_source_files(&path, lang));
            } else if path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(Language::from_extension)
                == Some(lang)
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

fn load_config(dir: &Path) -> ConfigFile {
    let path = dir.join("chevron.cfg");
    if !path.exists() {
        return ConfigFile::default();
    }
    let text = fs::read_to_string(&path).unwrap();
    ConfigFile::parse(&text).unwrap_or_else(|e| panic!("bad config {}: {e}", path.display()))
}

fn expected_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap().to_os_string();
    name.push(".expected");
    path.with_file_name(name)
}

/// Run a single golden test file, then check the output is a fixed point.
fn run_golden_test(path: &Path, lang: Language, config: &ConfigFile) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let options = config.options_for(lang);

    let formatted = format_source(&source, &options)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    let expected_path = expected_path(path);
    let expected = if expected_path.exists() {
        fs::read_to_string(&expected_path)
            .map_err(|e| format!("Failed to read {}: {}", expected_path.display(), e))?
    } else {
        source.clone()
    };

    if formatted.text != expected {
        return Err(format!(
            "Formatting mismatch for {}:\n\n--- Expected ---\n{}\n--- Got ---\n{}\n",
            path.display(),
            expected,
            formatted.text
        ));
    }

    let again = format_source(&formatted.text, &options)
        .map_err(|e| format!("{} (second pass): {}", path.display(), e))?;
    if again.changed {
        return Err(format!(
            "Idempotency failure for {}:\n\n--- First format ---\n{}\n--- Second format ---\n{}\n",
            path.display(),
            formatted.text,
            again.text
        ));
    }

    Ok(())
}

fn run_language(subdir: &str, lang: Language) {
    let dir = golden_tests_dir().join(subdir);
    let files = find_source_files(&dir, lang);

    assert!(!files.is_empty(), "No test files found in {}", dir.display());

    let config = load_config(&dir);
    let failures: Vec<String> = files
        .iter()
        .filter_map(|file| run_golden_test(file, lang, &config).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} golden test failures:\n\n{}",
        failures.len(),
        failures.join("\n---\n")
    );
}

#[test]
fn golden_tests_java() {
    run_language("java", Language::Java);
}

#[test]
fn golden_tests_csharp() {
    run_language("csharp", Language::CSharp);
}

#[test]
fn golden_tests_cpp() {
    run_language("cpp", Language::Cpp);
}

#[test]
fn javadoc_passes_through_byte_for_byte() {
    let path = golden_tests_dir().join("java").join("generics.java");
    let source = fs::read_to_string(&path).unwrap();
    let options = load_config(path.parent().unwrap()).options_for(Language::Java);
    let formatted = format_source(&source, &options).unwrap();

    let doc = |text: &str| -> String {
        let start = text.find("/**").unwrap();
        let end = text[start..].find("*/").unwrap() + start + 2;
        text[start..end].to_owned()
    };
    assert_eq!(doc(&source), doc(&formatted.text));
}
