//! Footnote numbering and date/time grouping derived from document text.
//!
//! Numbering is a pure function of existing structure rather than a persisted
//! counter: every insertion re-scans the current text, so the state self-heals
//! after external edits as long as the marker convention (one `###`-level line
//! per timestamped sub-entry) is intact. Two insertions computed from the same
//! stale snapshot will claim the same index; serializing writes per document
//! is the caller's job.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ClipError, ClipResult};

static TIME_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### ").expect("hardcoded pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Grouping decision for one insertion, recomputed from scratch every call.
pub struct FootnoteState {
    /// Footnote index the new entry will use.
    pub next_index: usize,
    /// Whether a new `## <date>` group must be opened.
    pub needs_date_header: bool,
    /// Whether a new `### <time>` group must be opened. Always true: each
    /// insertion gets a fresh timestamped sub-entry rather than silently
    /// joining an existing minute-level group.
    pub needs_time_header: bool,
}

#[derive(Clone, Debug)]
/// Allocation result: the state plus the rendered heading texts.
pub struct Grouping {
    /// Derived footnote and grouping state.
    pub state: FootnoteState,
    /// Rendered date heading text (without the `## ` marker).
    pub date_text: String,
    /// Rendered time heading text (without the `### ` marker).
    pub time_text: String,
    /// Header block to splice immediately before the new entry body.
    pub header: String,
}

impl Grouping {
    #[must_use]
    /// Header carrying only the `### <time>` sub-heading.
    ///
    /// Used when the entry lands inside a located section: a `##` date group
    /// there would terminate the target section, while the deeper time
    /// heading stays inside it.
    pub fn time_header(&self) -> String {
        format!("\n### {}", self.time_text)
    }
}

/// Render `now` with a strftime format, rejecting malformed formats.
fn render(now: &NaiveDateTime, format: &str) -> ClipResult<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ClipError::AmbiguousDateComparison {
            format: format.to_string(),
        });
    }
    Ok(now.format_with_items(items.iter()).to_string())
}

/// Scan `text` for existing markers and decide how the new entry is grouped.
///
/// The next footnote index is the count of existing `### `-prefixed lines
/// plus one. A new date group is opened unless a `## <today>` line already
/// exists. Rendered heading text has `:` replaced by `-` so time-of-day
/// headings stay usable as anchors.
///
/// # Errors
///
/// Returns [`ClipError::AmbiguousDateComparison`] when `date_format` is
/// malformed or does not round-trip into a comparable date, and the same for
/// a malformed `time_format`.
pub fn allocate(
    text: &str,
    now: NaiveDateTime,
    date_format: &str,
    time_format: &str,
) -> ClipResult<Grouping> {
    let date_text = render(&now, date_format)?.replace(':', "-");
    let time_text = render(&now, time_format)?.replace(':', "-");

    // The display format is the comparison domain. A format that cannot be
    // parsed back makes "is the found header older than today" undefined, so
    // it is rejected here instead of being resolved silently.
    if NaiveDate::parse_from_str(&date_text, date_format).is_err() {
        return Err(ClipError::AmbiguousDateComparison {
            format: date_format.to_string(),
        });
    }

    let next_index = TIME_HEADING.find_iter(text).count() + 1;

    let today_heading = format!("## {date_text}");
    let has_today = text
        .lines()
        .any(|line| line.trim_end() == today_heading.as_str());

    let state = FootnoteState {
        next_index,
        needs_date_header: !has_today,
        needs_time_header: true,
    };

    let header = if state.needs_date_header {
        format!("## {date_text}\n\n### {time_text}")
    } else {
        format!("\n### {time_text}")
    };

    Ok(Grouping {
        state,
        date_text,
        time_text,
        header,
    })
}

#[cfg(test)]
#[path = "tests/footnote.rs"]
mod tests;
