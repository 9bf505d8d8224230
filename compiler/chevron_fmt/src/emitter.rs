//! Output emitter.
//!
//! The normalizer writes token text and rewritten gaps through an
//! [`Emitter`]; [`StringEmitter`] collects them in memory.

/// Sink for normalized output.
pub trait Emitter {
    /// Emit a text fragment verbatim.
    fn emit(&mut self, text: &str);
}

/// Owns its buffer; used by [`normalize`](crate::normalize).
#[derive(Clone, Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sized for a source of `capacity` bytes; spacing rarely grows it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Consume the emitter and return the output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Appends to an existing buffer, for callers batching several files.
impl Emitter for String {
    fn emit(&mut self, text: &str) {
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests;
