//! Rendering a semantic clip entry into Markdown text.
//!
//! The original tool grew several near-duplicate layout variants; they
//! collapse here into one formatter driven by `FormatOptions`. Field order is
//! fixed: title line, description, comments, highlighted content, footnote
//! definition. Empty optional fields render as empty strings so vertical
//! spacing stays predictable.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A captured web clip, immutable once handed to the formatter.
pub struct ClipEntry {
    /// Page title, rendered bold inside the checkbox line.
    pub title: String,
    /// Source URL; target of the title link and the footnote definition.
    pub url: String,
    /// Text highlighted on the page, if any.
    #[serde(default)]
    pub highlighted_content: Option<String>,
    /// Free-text comments supplied at capture time.
    #[serde(default)]
    pub comments: Option<String>,
    /// Page or user-supplied description.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How highlighted page content is wrapped.
pub enum HighlightStyle {
    /// Foldable `> [!quote]-` callout block.
    Callout,
    /// Plain `> ` blockquote.
    Quote,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
/// Formatting switches for [`format_entry`].
pub struct FormatOptions {
    /// Render the description block when present.
    pub include_description: bool,
    /// Render the comments block when present.
    pub include_comments: bool,
    /// Wrap style for highlighted content.
    pub highlight_style: HighlightStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_description: true,
            include_comments: true,
            highlight_style: HighlightStyle::Callout,
        }
    }
}

/// Treat `None` and whitespace-only values alike.
fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|text| !text.trim().is_empty())
}

#[must_use]
/// Render one entry with its footnote index.
///
/// Highlighted content is always quoted line by line when non-empty,
/// regardless of its internal Markdown structure: captured pages can contain
/// their own headings, and quoting keeps them from merging visually with the
/// note's heading hierarchy.
pub fn format_entry(entry: &ClipEntry, footnote_index: usize, options: &FormatOptions) -> String {
    let mut out = format!(
        "- [ ] [**{}**]({}) [^{footnote_index}]",
        entry.title.trim(),
        entry.url.trim()
    );

    if options.include_description {
        if let Some(description) = non_empty(entry.description.as_ref()) {
            out.push('\n');
            out.push_str(description.trim_end());
        }
    }

    if options.include_comments {
        if let Some(comments) = non_empty(entry.comments.as_ref()) {
            out.push('\n');
            out.push_str(comments.trim_end());
        }
    }

    if let Some(highlight) = non_empty(entry.highlighted_content.as_ref()) {
        if options.highlight_style == HighlightStyle::Callout {
            out.push_str("\n> [!quote]- Highlight");
        }
        for line in highlight.trim_end().split('\n') {
            out.push_str("\n> ");
            out.push_str(line);
        }
    }

    out.push_str(&format!("\n\n[^{footnote_index}]: {}", entry.url.trim()));
    out
}

#[cfg(test)]
#[path = "tests/entry.rs"]
mod tests;
