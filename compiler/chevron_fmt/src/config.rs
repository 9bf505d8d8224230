//! Formatter configuration.
//!
//! All configuration is plain immutable data. A [`ConfigFile`] holds what a
//! `key = value` options file sets; [`ConfigFile::options_for`] combines it
//! with per-language defaults into the [`FormatOptions`] a single file is
//! formatted with.
//!
//! ```text
//! # generic spacing
//! sp_inside_angle = remove
//! sp_after_comma  = force
//! disable_processing_cmt = "*INDENT-OFF*"
//! ```

use std::str::FromStr;

use chevron_lexer::{Language, LexOptions};
use thiserror::Error;
use tracing::trace;

use crate::disambiguate::DisambiguatorConfig;
use crate::spacing::{SpaceAction, SpaceOption};

pub const DEFAULT_DISABLE_MARKER: &str = "*INDENT-OFF*";
pub const DEFAULT_ENABLE_MARKER: &str = "*INDENT-ON*";

/// Actions for every spacing option plus the processing toggle markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpacingConfig {
    pub angle_shift: SpaceAction,
    pub inside_angle: SpaceAction,
    pub before_angle: SpaceAction,
    pub angle_paren: SpaceAction,
    pub angle_word: SpaceAction,
    pub after_comma: SpaceAction,
    pub before_comma: SpaceAction,
    /// A comment containing this text suspends rewriting.
    pub disable_processing_cmt: String,
    /// A comment containing this text resumes rewriting.
    pub enable_processing_cmt: String,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        SpacingConfig {
            angle_shift: SpaceAction::Remove,
            inside_angle: SpaceAction::Remove,
            before_angle: SpaceAction::Remove,
            angle_paren: SpaceAction::Ignore,
            angle_word: SpaceAction::Ignore,
            after_comma: SpaceAction::Force,
            before_comma: SpaceAction::Remove,
            disable_processing_cmt: DEFAULT_DISABLE_MARKER.to_owned(),
            enable_processing_cmt: DEFAULT_ENABLE_MARKER.to_owned(),
        }
    }
}

impl SpacingConfig {
    /// Resolve a rule's option to the configured action.
    #[inline]
    pub fn action(&self, option: SpaceOption) -> SpaceAction {
        match option {
            SpaceOption::Fixed(action) => action,
            SpaceOption::AngleShift => self.angle_shift,
            SpaceOption::InsideAngle => self.inside_angle,
            SpaceOption::BeforeAngle => self.before_angle,
            SpaceOption::AngleParen => self.angle_paren,
            SpaceOption::AngleWord => self.angle_word,
            SpaceOption::AfterComma => self.after_comma,
            SpaceOption::BeforeComma => self.before_comma,
        }
    }

    /// Builder-style override of one option.
    #[must_use]
    pub fn with(mut self, option: SpaceOption, action: SpaceAction) -> Self {
        if let Some(slot) = self.slot_mut(option) {
            *slot = action;
        }
        self
    }

    fn slot_mut(&mut self, option: SpaceOption) -> Option<&mut SpaceAction> {
        match option {
            SpaceOption::Fixed(_) => None,
            SpaceOption::AngleShift => Some(&mut self.angle_shift),
            SpaceOption::InsideAngle => Some(&mut self.inside_angle),
            SpaceOption::BeforeAngle => Some(&mut self.before_angle),
            SpaceOption::AngleParen => Some(&mut self.angle_paren),
            SpaceOption::AngleWord => Some(&mut self.angle_word),
            SpaceOption::AfterComma => Some(&mut self.after_comma),
            SpaceOption::BeforeComma => Some(&mut self.before_comma),
        }
    }
}

/// Everything one run of [`format_source`](crate::format_source) needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub language: Language,
    pub lex: LexOptions,
    pub disambiguator: DisambiguatorConfig,
    pub spacing: SpacingConfig,
}

impl FormatOptions {
    /// Defaults for `language`.
    pub fn for_language(language: Language) -> Self {
        FormatOptions {
            language,
            lex: LexOptions::default(),
            disambiguator: DisambiguatorConfig::for_language(language),
            spacing: SpacingConfig::default(),
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

/// Error in an options file. Line numbers are 1-based.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line {line}: expected `key = value`")]
    MalformedLine { line: usize },

    #[error("line {line}: unknown option `{key}`")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: invalid value `{value}` for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

impl ConfigError {
    pub fn line(&self) -> usize {
        match self {
            ConfigError::MalformedLine { line }
            | ConfigError::UnknownKey { line, .. }
            | ConfigError::InvalidValue { line, .. } => *line,
        }
    }
}

/// Settings read from an options file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub spacing: SpacingConfig,
    pub lex: LexOptions,
    /// Overrides the per-language default when set.
    pub capitalized_types: Option<bool>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = ConfigFile::default();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::MalformedLine { line });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::MalformedLine { line });
            }
            let value = parse_value(value).ok_or(ConfigError::MalformedLine { line })?;
            config.set(line, key, value)?;
        }
        Ok(config)
    }

    /// Format options for one language with this file applied.
    pub fn options_for(&self, language: Language) -> FormatOptions {
        let mut disambiguator = DisambiguatorConfig::for_language(language);
        if let Some(capitalized) = self.capitalized_types {
            disambiguator.capitalized_types = capitalized;
        }
        FormatOptions {
            language,
            lex: self.lex,
            disambiguator,
            spacing: self.spacing.clone(),
        }
    }

    fn set(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            line,
            key: key.to_owned(),
            value: value.to_owned(),
        };
        trace!(line, key, value, "config option");

        if let Some(option) = SpaceOption::from_key(key) {
            let action = SpaceAction::from_name(value).ok_or_else(invalid)?;
            if let Some(slot) = self.spacing.slot_mut(option) {
                *slot = action;
            }
            return Ok(());
        }

        match key {
            "disable_processing_cmt" | "enable_processing_cmt" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                let slot = if key == "disable_processing_cmt" {
                    &mut self.spacing.disable_processing_cmt
                } else {
                    &mut self.spacing.enable_processing_cmt
                };
                value.clone_into(slot);
            }
            "validate_escapes" => {
                self.lex.validate_escapes = parse_bool(value).ok_or_else(invalid)?;
            }
            "capitalized_types" => {
                self.capitalized_types = Some(parse_bool(value).ok_or_else(invalid)?);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key.to_owned(),
                });
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigFile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The value part of a line: quoted text, or bare text up to a `#` comment.
/// `None` when a quote is left open.
fn parse_value(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    match raw.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &raw[1..];
            let end = body.find(quote)?;
            let rest = body[end + 1..].trim_start();
            (rest.is_empty() || rest.starts_with('#')).then(|| &body[..end])
        }
        _ => Some(raw.split('#').next().unwrap_or_default().trim_end()),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
