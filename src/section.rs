//! Section representation and location within a heading index.
//!
//! A section is the line range owned by a heading, bounded by the next
//! heading at the *same* level. Deeper subheadings nested under the target
//! stay inside the section; only a sibling (or the end of the document)
//! closes it. The heading index itself is an injected read-only snapshot,
//! never recomputed here.

use crate::error::{ClipError, ClipResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading as reported by the heading-index provider.
pub struct HeadingRecord {
    /// Heading text without markup symbols or surrounding whitespace.
    pub text: String,
    /// Nesting depth, 1 through 6.
    pub level: usize,
    /// Line on which the heading itself sits.
    pub start_line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open line range owned by a located heading.
pub struct SectionBounds {
    /// Line immediately after the owning heading.
    pub first_line: usize,
    /// Start line of the next same-level heading, or `None` at end of document.
    pub last_line: Option<usize>,
}

#[must_use]
/// Strip Markdown heading markers and surrounding whitespace.
///
/// Both the index provider and `locate` normalize through this, so a target
/// of `"## Clippings"` and a stored `"Clippings"` compare equal. The match
/// stays case- and inner-whitespace-sensitive.
pub fn normalize_heading(heading: &str) -> &str {
    heading.trim().trim_start_matches('#').trim()
}

/// Compute the line range owned by `(heading, level)` in the supplied index.
///
/// Finds the first record matching both the normalized text and the exact
/// level, then scans forward for the next record at that same level; its
/// start line is the exclusive upper bound.
///
/// # Errors
///
/// Returns [`ClipError::HeadingNotFound`] when no record matches both text
/// and level.
pub fn locate(index: &[HeadingRecord], heading: &str, level: usize) -> ClipResult<SectionBounds> {
    let wanted = normalize_heading(heading);

    let found = index
        .iter()
        .position(|record| normalize_heading(&record.text) == wanted && record.level == level)
        .ok_or(ClipError::HeadingNotFound)?;

    let next_sibling = index[found + 1..]
        .iter()
        .find(|record| record.level == index[found].level)
        .map(|record| record.start_line);

    Ok(SectionBounds {
        first_line: index[found].start_line + 1,
        last_line: next_sibling,
    })
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
