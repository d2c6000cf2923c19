//! Markdown structure extraction using tree-sitter-md.
//!
//! This is the default provider behind the injected heading-index and
//! frontmatter capabilities: ATX headings are captured with a tree-sitter
//! query, top-level blocks are classified so the frontmatter boundary can be
//! computed. The core insertion engine only ever sees the resulting records,
//! never the parse tree.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

use crate::frontmatter::{BlockKind, ContentBlock};
use crate::section::{normalize_heading, HeadingRecord};

/// Query capturing ATX-style headings (# syntax).
const HEADING_QUERY: &str = "(atx_heading) @heading";

fn parse(text: &str) -> Option<tree_sitter::Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_md::LANGUAGE.into())
        .ok()?;
    parser.parse(text, None)
}

#[must_use]
/// Extract all ATX headings from `text`, ordered by document position.
///
/// Returns an empty index when the text cannot be parsed; a document without
/// recognizable headings is a normal input, not an error.
pub fn heading_index(text: &str) -> Vec<HeadingRecord> {
    let Some(tree) = parse(text) else {
        return Vec::new();
    };
    let language = tree_sitter_md::LANGUAGE.into();
    let Ok(query) = Query::new(&language, HEADING_QUERY) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), text.as_bytes());
    while let Some(found) = matches.next() {
        for capture in found.captures {
            let node = capture.node;
            let raw = &text[node.byte_range()];
            let level = raw.bytes().take_while(|byte| *byte == b'#').count();
            if (1..=6).contains(&level) {
                records.push(HeadingRecord {
                    text: normalize_heading(raw).to_string(),
                    level,
                    start_line: node.start_position().row,
                });
            }
        }
    }

    records.sort_by_key(|record| record.start_line);
    records
}

#[must_use]
/// Classify the top-level blocks of `text` with their line extents.
///
/// YAML (`---`) and TOML (`+++`) metadata blocks are tagged so
/// [`crate::frontmatter::boundary_line`] can skip them.
pub fn content_blocks(text: &str) -> Vec<ContentBlock> {
    let Some(tree) = parse(text) else {
        return Vec::new();
    };

    let root = tree.root_node();
    let mut walker = root.walk();
    let mut blocks = Vec::new();
    for child in root.children(&mut walker) {
        let kind = match child.kind() {
            "minus_metadata" | "plus_metadata" => BlockKind::Metadata,
            _ => BlockKind::Content,
        };

        // A node ending at column 0 stops at the start of the next line; the
        // block's own last line is the one before it.
        let end = child.end_position();
        let end_line = if end.column == 0 && end.row > child.start_position().row {
            end.row - 1
        } else {
            end.row
        };

        blocks.push(ContentBlock {
            kind,
            start_line: child.start_position().row,
            end_line,
        });
    }
    blocks
}

#[cfg(test)]
#[path = "tests/markdown.rs"]
mod tests;
