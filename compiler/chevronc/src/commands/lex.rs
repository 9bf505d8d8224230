//! The `lex` command: dump tokens with their resolved bracket roles.

use std::path::Path;

use chevron_fmt::{disambiguate, DisambiguatorConfig, LexOptions};
use chevron_lexer::{tokenize, Language, Token};

use super::{language_for, read_file, render_lex_error};

/// Tokenize and disambiguate a file, printing one line per token.
///
/// `lang` overrides extension-based detection. Returns `false` when the
/// file could not be read or tokenized.
pub fn lex_file(path: &str, lang: Option<&str>) -> bool {
    let language = match lang {
        Some(name) => match Language::from_name(name) {
            Some(language) => language,
            None => {
                eprintln!("Unknown language: {name} (expected java, cs or cpp)");
                return false;
            }
        },
        None => match language_for(Path::new(path)) {
            Some(language) => language,
            None => {
                eprintln!("cannot detect the language of '{path}'; pass --lang");
                return false;
            }
        },
    };

    let content = match read_file(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };

    let tokens = match tokenize(&content, language, LexOptions::default()) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprint!("{}", render_lex_error(path, &content, &e));
            return false;
        }
    };
    let resolved = disambiguate(&tokens, &DisambiguatorConfig::for_language(language));

    println!(
        "Tokens for '{}' ({} tokens, {}):",
        path,
        resolved.tokens.len(),
        language
    );
    for token in &resolved.tokens {
        println!("  {}", token_line(token));
    }
    for frame in &resolved.abandoned {
        println!("  abandoned `<` at byte {}: {}", frame.offset, frame.reason);
    }
    true
}

fn token_line(token: &Token<'_>) -> String {
    let role = token.role().map_or("-", |role| role.name());
    format!(
        "{:<11} {:<13} {:<13} {:?}",
        token.span.to_string(),
        token.kind.name(),
        role,
        token.text
    )
}
