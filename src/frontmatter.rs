//! Locating the first body line after any leading metadata block.
//!
//! Section logic never reaches into frontmatter; everything that wants to
//! insert "at the top of the file" goes through `boundary_line` instead of
//! assuming line zero.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Classification of a top-level content block.
pub enum BlockKind {
    /// A leading metadata (frontmatter) block.
    Metadata,
    /// Any other top-level block.
    Content,
}

#[derive(Clone, Copy, Debug)]
/// A top-level block of the document with its line extent.
pub struct ContentBlock {
    /// What kind of block this is.
    pub kind: BlockKind,
    /// First line of the block.
    pub start_line: usize,
    /// Last line of the block (inclusive).
    pub end_line: usize,
}

#[must_use]
/// Line immediately after the metadata block, or 0 when there is none.
///
/// Absence of frontmatter is a normal case, not an error.
pub fn boundary_line(blocks: &[ContentBlock]) -> usize {
    blocks
        .iter()
        .find(|block| block.kind == BlockKind::Metadata)
        .map_or(0, |block| block.end_line + 1)
}

#[cfg(test)]
#[path = "tests/frontmatter.rs"]
mod tests;
