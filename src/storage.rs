//! Injected storage capabilities: the engine never touches disk directly.
//!
//! Everything the insertion engine needs from the outside world goes through
//! the `Vault` trait. Writes are defined to be immediately visible to
//! subsequent reads, so callers never need to wait or re-poll after creating
//! a file. `FsVault` backs the trait with a real directory; `MemoryVault` is
//! the in-process double the engine tests run against.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{ClipError, ClipResult};
use crate::frontmatter::{BlockKind, ContentBlock};
use crate::markdown;
use crate::section::HeadingRecord;

/// Storage and index capabilities consumed by the insertion engine.
///
/// Paths are vault-relative, `/`-separated strings. The heading index and
/// frontmatter views are read-only snapshots of the file as it is at call
/// time.
pub trait Vault {
    /// Read the full text of a file.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be read.
    fn read_text(&self, path: &str) -> ClipResult<String>;

    /// Replace the full text of an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be written.
    fn write_text(&mut self, path: &str, text: &str) -> ClipResult<()>;

    /// Whether a file or folder exists at `path`.
    fn path_exists(&self, path: &str) -> bool;

    /// Create a folder (and any missing parents).
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the folder cannot be created.
    fn create_folder(&mut self, path: &str) -> ClipResult<()>;

    /// Create a new file with initial text; fails if it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be created.
    fn create_file(&mut self, path: &str, initial_text: &str) -> ClipResult<()>;

    /// Ordered heading index for a file, as the index provider reports it.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be read.
    fn heading_index(&self, path: &str) -> ClipResult<Vec<HeadingRecord>> {
        Ok(markdown::heading_index(&self.read_text(path)?))
    }

    /// Top-level content blocks of a file with their line extents.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be read.
    fn content_blocks(&self, path: &str) -> ClipResult<Vec<ContentBlock>> {
        Ok(markdown::content_blocks(&self.read_text(path)?))
    }

    /// The leading metadata block of a file, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::StorageUnavailable`] when the file cannot be read.
    fn frontmatter_block(&self, path: &str) -> ClipResult<Option<ContentBlock>> {
        Ok(self
            .content_blocks(path)?
            .into_iter()
            .find(|block| block.kind == BlockKind::Metadata))
    }
}

/// A vault rooted at a directory on disk.
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    #[must_use]
    /// Open a vault rooted at `root`. The directory itself is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        for part in path.split('/').filter(|part| !part.is_empty()) {
            resolved.push(part);
        }
        resolved
    }
}

impl Vault for FsVault {
    fn read_text(&self, path: &str) -> ClipResult<String> {
        fs::read_to_string(self.resolve(path)).map_err(|err| ClipError::storage(path, err))
    }

    fn write_text(&mut self, path: &str, text: &str) -> ClipResult<()> {
        fs::write(self.resolve(path), text).map_err(|err| ClipError::storage(path, err))
    }

    fn path_exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn create_folder(&mut self, path: &str) -> ClipResult<()> {
        fs::create_dir_all(self.resolve(path)).map_err(|err| ClipError::storage(path, err))
    }

    fn create_file(&mut self, path: &str, initial_text: &str) -> ClipResult<()> {
        let resolved = self.resolve(path);
        if resolved.exists() {
            return Err(ClipError::storage(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "file already exists"),
            ));
        }
        fs::write(&resolved, initial_text).map_err(|err| ClipError::storage(path, err))
    }
}

#[derive(Default)]
/// In-memory vault for tests and embedding.
pub struct MemoryVault {
    files: HashMap<String, String>,
    folders: HashSet<String>,
}

impl MemoryVault {
    #[must_use]
    /// An empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without going through the capability surface.
    pub fn seed(&mut self, path: &str, text: &str) {
        if let Some((folder, _)) = path.rsplit_once('/') {
            self.folders.insert(folder.to_string());
        }
        self.files.insert(path.to_string(), text.to_string());
    }

    #[must_use]
    /// Current text of a file, if present.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl Vault for MemoryVault {
    fn read_text(&self, path: &str) -> ClipResult<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            ClipError::storage(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })
    }

    fn write_text(&mut self, path: &str, text: &str) -> ClipResult<()> {
        match self.files.get_mut(path) {
            Some(existing) => {
                *existing = text.to_string();
                Ok(())
            }
            None => Err(ClipError::storage(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }

    fn path_exists(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.folders.contains(path)
    }

    fn create_folder(&mut self, path: &str) -> ClipResult<()> {
        self.folders.insert(path.to_string());
        Ok(())
    }

    fn create_file(&mut self, path: &str, initial_text: &str) -> ClipResult<()> {
        if self.files.contains_key(path) {
            return Err(ClipError::storage(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "file already exists"),
            ));
        }
        if let Some((folder, _)) = path.rsplit_once('/') {
            if !self.folders.contains(folder) {
                return Err(ClipError::storage(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "parent folder missing"),
                ));
            }
        }
        self.files.insert(path.to_string(), initial_text.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/storage.rs"]
mod tests;
