//! Line-indexed view over document text.
//!
//! A document is split on `\n` and rejoined on `\n`, so the round trip
//! reproduces the original text byte for byte (a trailing newline survives as
//! a trailing empty line). No normalization of any kind happens here.

#[derive(Clone)]
/// Ordered sequence of text lines, constructed fresh per write operation.
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    #[must_use]
    /// Split `text` into lines, preserving empty lines and trailing structure.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    #[must_use]
    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Number of lines, counting a trailing empty line if the text ends in `\n`.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// True when the document holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    /// Join lines back into the exact original text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
