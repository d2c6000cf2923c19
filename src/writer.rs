//! Orchestration of one insertion: locate, allocate, format, merge, persist.
//!
//! `NoteWriter` carries the text-level write path: given already-formatted
//! entry text and an optional target heading, it computes where the entry
//! belongs and writes the reassembled document back through the vault.
//! `ClipWriter` sits above it and owns the per-site storage convention: one
//! slugged file per host, date/time grouping, footnote allocation, and the
//! back-reference string handed to callers.
//!
//! Each insertion is one synchronous pass over a fresh snapshot of the
//! document. Callers must serialize insertions per path; nothing here locks.

use chrono::{Local, NaiveDateTime};

use crate::config::Config;
use crate::document::LineDocument;
use crate::entry::{self, ClipEntry};
use crate::error::{ClipError, ClipResult};
use crate::footnote;
use crate::frontmatter;
use crate::merge::{self, InsertPolicy};
use crate::section;
use crate::slug;
use crate::storage::Vault;

/// Writes formatted entry text into a note at a logical target location.
pub struct NoteWriter<'a, V: Vault> {
    vault: &'a mut V,
}

impl<'a, V: Vault> NoteWriter<'a, V> {
    /// Wrap a vault for one or more writes.
    pub fn new(vault: &'a mut V) -> Self {
        Self { vault }
    }

    /// Insert `entry_text` into the note at `path`.
    ///
    /// With no heading, the entry goes at the frontmatter boundary (prepend)
    /// or after the last line (append). With a heading, the owning section is
    /// located and merged per `policy`; a heading absent from the index is
    /// synthesized at the top of the body rather than failing the write. A
    /// missing note is created, along with its parent folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the vault cannot read,
    /// create, or write the target.
    pub fn write(
        &mut self,
        path: &str,
        entry_text: &str,
        heading: Option<&str>,
        level: usize,
        policy: InsertPolicy,
    ) -> ClipResult<()> {
        if !self.vault.path_exists(path) {
            return self.create_note(path, entry_text, heading, level);
        }

        let text = self.vault.read_text(path)?;
        let doc = LineDocument::new(&text);
        // Inside a section the leading blank line of the entry block is the
        // separator; at a boundary or end of file the surrounding lines
        // already provide it.
        let flush = entry_text.trim_start_matches('\n');

        let new_text = if let Some(heading) = heading {
            let index = self.vault.heading_index(path)?;
            match section::locate(&index, heading, level) {
                Ok(bounds) => merge::merge(&doc, bounds, entry_text, policy),
                Err(ClipError::HeadingNotFound) => {
                    log::debug!("heading {heading:?} not in {path}, creating section");
                    let block = merge::create_section_block(heading, level, flush);
                    let boundary = frontmatter::boundary_line(&self.vault.content_blocks(path)?);
                    merge::insert_at_line(&doc, boundary, &block)
                }
                Err(other) => return Err(other),
            }
        } else {
            match policy {
                InsertPolicy::Prepend => {
                    let boundary = frontmatter::boundary_line(&self.vault.content_blocks(path)?);
                    merge::insert_at_line(&doc, boundary, flush)
                }
                InsertPolicy::Append => merge::append_to_end(&doc, flush),
            }
        };

        // Written files end with exactly one newline.
        self.vault
            .write_text(path, &format!("{}\n", new_text.trim_end_matches('\n')))
    }

    fn create_note(
        &mut self,
        path: &str,
        entry_text: &str,
        heading: Option<&str>,
        level: usize,
    ) -> ClipResult<()> {
        if let Some((folder, _)) = path.rsplit_once('/') {
            if !self.vault.path_exists(folder) {
                self.vault.create_folder(folder)?;
            }
        }

        let body = entry_text.trim_start_matches('\n');
        let initial = match heading {
            Some(heading) => merge::create_section_block(heading, level, body),
            None => body.to_string(),
        };
        self.vault
            .create_file(path, &format!("{}\n", initial.trim_end_matches('\n')))
    }
}

/// Per-site clip storage plus topic-note entry points.
pub struct ClipWriter<'a, V: Vault> {
    vault: &'a mut V,
    config: &'a Config,
}

impl<'a, V: Vault> ClipWriter<'a, V> {
    /// Bind a vault and configuration for one or more clips.
    pub fn new(vault: &'a mut V, config: &'a Config) -> Self {
        Self { vault, config }
    }

    /// Store `entry` in the per-site file for `host`, stamped with the
    /// current local time, and return the back-reference string.
    ///
    /// # Errors
    ///
    /// See [`ClipWriter::clip_at`].
    pub fn clip(&mut self, host: &str, entry: &ClipEntry) -> ClipResult<String> {
        self.clip_at(host, entry, Local::now().naive_local())
    }

    /// Store `entry` under the per-site file for `host` as of `now`.
    ///
    /// The file lives at `<storage_folder>/<stem>.md` where `stem` is the
    /// host slug with dots replaced by dashes. A fresh file opens with a
    /// `# <slug>` title heading; later entries append at the end of the
    /// document so date groups stay chronological, newest last. The returned
    /// back-reference has the form `![[<path>#<anchor>|<label>]]` with the
    /// just-written time heading as anchor and `<stem>-<index>` as label.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::AmbiguousDateComparison`] for a malformed date or
    /// time format and [`ClipError::StorageUnavailable`] when the storage
    /// folder or file cannot be created, read, or written.
    pub fn clip_at(
        &mut self,
        host: &str,
        entry: &ClipEntry,
        now: NaiveDateTime,
    ) -> ClipResult<String> {
        let site = slug::host_slug(host);
        let stem = slug::file_stem(host);
        let folder = &self.config.storage_folder;
        let path = format!("{folder}/{stem}.md");

        let existing = if self.vault.path_exists(&path) {
            self.vault.read_text(&path)?
        } else {
            String::new()
        };

        let grouping = footnote::allocate(
            &existing,
            now,
            &self.config.date_format,
            &self.config.time_format,
        )?;
        let body = entry::format_entry(
            entry,
            grouping.state.next_index,
            &self.config.format_options(),
        );
        let entry_text = format!("{}\n{body}", grouping.header);

        if existing.is_empty() && !self.vault.path_exists(&path) {
            if !self.vault.path_exists(folder) {
                self.vault.create_folder(folder)?;
            }
            let initial = format!("# {site}\n\n{}\n", entry_text.trim_start_matches('\n'));
            self.vault.create_file(&path, &initial)?;
        } else {
            NoteWriter::new(&mut *self.vault).write(
                &path,
                &entry_text,
                None,
                0,
                InsertPolicy::Append,
            )?;
        }

        log::info!(
            "clipped {host} into {path} as footnote {}",
            grouping.state.next_index
        );
        Ok(format!(
            "![[{folder}/{stem}#{}|{stem}-{}]]",
            grouping.time_text, grouping.state.next_index
        ))
    }

    /// Write a formatted entry into a topic note, stamped with the current
    /// local time.
    ///
    /// # Errors
    ///
    /// See [`ClipWriter::clip_to_note_at`].
    pub fn clip_to_note(
        &mut self,
        path: &str,
        entry: &ClipEntry,
        heading: Option<&str>,
    ) -> ClipResult<()> {
        self.clip_to_note_at(path, entry, heading, Local::now().naive_local())
    }

    /// Write a formatted entry into the note at `path` as of `now`.
    ///
    /// Footnote numbering and date/time grouping are computed against that
    /// note's own text, then the entry is placed under `heading` (or at the
    /// configured no-heading position) using the configured insert policy.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::AmbiguousDateComparison`] for a malformed date or
    /// time format and [`ClipError::StorageUnavailable`] on storage failure.
    pub fn clip_to_note_at(
        &mut self,
        path: &str,
        entry: &ClipEntry,
        heading: Option<&str>,
        now: NaiveDateTime,
    ) -> ClipResult<()> {
        let existing = if self.vault.path_exists(path) {
            self.vault.read_text(path)?
        } else {
            String::new()
        };

        let grouping = footnote::allocate(
            &existing,
            now,
            &self.config.date_format,
            &self.config.time_format,
        )?;
        let body = entry::format_entry(
            entry,
            grouping.state.next_index,
            &self.config.format_options(),
        );
        // A `##` date group inside a located section would end that section
        // at the next locate; under a heading only the deeper time group is
        // opened.
        let header = if heading.is_some() {
            grouping.time_header()
        } else {
            grouping.header.clone()
        };
        let entry_text = format!("{header}\n{body}");

        NoteWriter::new(&mut *self.vault).write(
            path,
            &entry_text,
            heading,
            self.config.heading_level,
            self.config.policy(),
        )
    }
}

#[cfg(test)]
#[path = "tests/writer.rs"]
mod tests;
