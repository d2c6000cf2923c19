//! Combining existing section lines with a freshly formatted entry.
//!
//! The merger is a pure transform from (old lines, bounds, entry, policy) to
//! new text. Every line strictly outside the target section is carried
//! through byte-identical; inside the section, blank lines are dropped before
//! the splice so repeated insertions never accumulate stray blank-line runs.

use crate::document::LineDocument;
use crate::section::SectionBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where a new entry lands relative to existing section content.
pub enum InsertPolicy {
    /// After existing content, before the next heading.
    Append,
    /// Immediately after the section's own heading, before existing content.
    Prepend,
}

impl InsertPolicy {
    #[must_use]
    /// Parse a configured position name, defaulting to append.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("prepend") {
            Self::Prepend
        } else {
            Self::Append
        }
    }
}

#[must_use]
/// Splice `entry_text` into the section at `bounds` and reassemble the document.
///
/// The heading line itself stays in the "before" portion. The sliced section
/// is filtered of blank lines, the entry lines are placed per `policy`, and
/// everything outside the bounds is rejoined untouched.
pub fn merge(
    doc: &LineDocument,
    bounds: SectionBounds,
    entry_text: &str,
    policy: InsertPolicy,
) -> String {
    let lines = doc.lines();
    let first = bounds.first_line.min(lines.len());
    let upper = bounds.last_line.unwrap_or(lines.len()).min(lines.len());

    let before = &lines[..first];
    let section: Vec<&str> = lines[first..upper]
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .collect();
    let entry_lines: Vec<&str> = entry_text.split('\n').collect();

    let mut merged: Vec<&str> = before.iter().map(String::as_str).collect();
    match policy {
        InsertPolicy::Append => {
            merged.extend(section);
            merged.extend(entry_lines);
        }
        InsertPolicy::Prepend => {
            merged.extend(entry_lines);
            merged.extend(section);
        }
    }
    if let Some(last) = bounds.last_line {
        merged.extend(lines[last.min(lines.len())..].iter().map(String::as_str));
    }

    merged.join("\n")
}

#[must_use]
/// Insert `entry_text` before the given line, leaving everything else intact.
///
/// Used for the "no heading" path, where the target line is the frontmatter
/// boundary.
pub fn insert_at_line(doc: &LineDocument, line: usize, entry_text: &str) -> String {
    let lines = doc.lines();
    let at = line.min(lines.len());

    let mut merged: Vec<&str> = lines[..at].iter().map(String::as_str).collect();
    merged.extend(entry_text.split('\n'));
    merged.extend(lines[at..].iter().map(String::as_str));
    merged.join("\n")
}

#[must_use]
/// Append `entry_text` after the last line of the document.
pub fn append_to_end(doc: &LineDocument, entry_text: &str) -> String {
    let mut merged: Vec<&str> = doc.lines().iter().map(String::as_str).collect();
    merged.extend(entry_text.split('\n'));
    merged.join("\n")
}

#[must_use]
/// Build the synthesized block for a heading that was not found.
///
/// Section creation degrades to "new heading + entry at top of body"; the
/// entry is never dropped.
pub fn create_section_block(heading: &str, level: usize, entry_text: &str) -> String {
    format!("{} {heading}\n\n{entry_text}", "#".repeat(level))
}

#[cfg(test)]
#[path = "tests/merge.rs"]
mod tests;
