//! Generic-bracket spacing for Java, C# and C++.
//!
//! # Pipeline
//!
//! ```text
//! &str ──tokenize──> Vec<Token> ──disambiguate──> Disambiguated ──normalize──> String
//! ```
//!
//! 1. **Tokenize** ([`chevron_lexer`]): lossless classified tokens; every
//!    `<`/`>` starts out unresolved.
//! 2. **Disambiguate** ([`disambiguate`]): decide generic delimiter vs.
//!    relational/shift operator for each bracket.
//! 3. **Normalize** ([`normalize`]): rewrite same-line whitespace next to
//!    generic brackets and around commas in generic lists.
//!
//! Every stage returns a new sequence. The stage functions are public so
//! tests and tools can replay them one at a time.
//!
//! # Modules
//!
//! - [`config`]: spacing options, options files, per-file [`FormatOptions`]
//! - [`spacing`]: declarative spacing rules and their O(1) lookup
//! - [`emitter`]: output abstraction

pub mod config;
pub mod disambiguate;
pub mod emitter;
pub mod normalize;
pub mod spacing;

pub use chevron_lexer::{Language, LexError, LexOptions};
pub use config::{ConfigError, ConfigFile, FormatOptions, SpacingConfig};
pub use disambiguate::{
    disambiguate, AbandonReason, AbandonedFrame, Disambiguated, DisambiguatorConfig, GenericFrame,
};
pub use emitter::{Emitter, StringEmitter};
pub use normalize::{normalize, normalize_into};
pub use spacing::{SpaceAction, SpaceOption};

/// Result of formatting one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Frames that looked generic but were given up.
    pub abandoned: Vec<AbandonedFrame>,
    /// `text` differs from the input.
    pub changed: bool,
}

/// Tokenize, disambiguate and normalize `source`.
///
/// # Example
///
/// ```
/// use chevron_fmt::{format_source, FormatOptions, Language};
///
/// let options = FormatOptions::for_language(Language::Java);
/// let formatted = format_source("Map< String ,List< Long > > m;", &options).unwrap();
/// assert_eq!(formatted.text, "Map<String, List<Long>> m;");
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(language = %options.language, bytes = source.len())
)]
pub fn format_source(source: &str, options: &FormatOptions) -> Result<Formatted, LexError> {
    let tokens = chevron_lexer::tokenize(source, options.language, options.lex)?;
    let Disambiguated { tokens, abandoned } = disambiguate(&tokens, &options.disambiguator);
    let text = normalize(&tokens, &options.spacing);
    let changed = text != source;
    Ok(Formatted {
        text,
        abandoned,
        changed,
    })
}

#[cfg(test)]
mod tests;
