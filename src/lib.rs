//! clipvault: append web clips into structured Markdown notes.
//!
//! The crate is a pure document-transformation engine with injected storage:
//! given a note's current text, a heading index, and a clip entry, it
//! computes where the entry belongs (date/time group, footnote index,
//! section bounds) and reassembles the full document text deterministically.
//! Everything stateful lives behind the [`storage::Vault`] trait.

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod footnote;
pub mod frontmatter;
pub mod markdown;
pub mod merge;
pub mod section;
pub mod slug;
pub mod storage;
pub mod writer;
