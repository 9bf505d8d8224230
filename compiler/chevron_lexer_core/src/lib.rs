//! Low-level scanner for Java-family source text.
//!
//! This crate turns a source buffer into `(RawTag, len)` pairs. It knows
//! nothing about keywords, bracket roles, or escape validity; those belong
//! to the cooking layer in `chevron_lexer`.
//!
//! # Pipeline
//!
//! ```text
//! &str ──> SourceBuffer ──> Cursor ──> RawScanner ──> RawToken { tag, len }
//! ```
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source
//! - [`Cursor`]: `Copy` byte cursor with `memchr`-accelerated skips
//! - [`RawScanner`]: hand-written dispatch over the current byte
//! - [`Language`]: which lexical dialect (Java, C#, C++) to scan

mod cursor;
mod language;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use language::Language;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
