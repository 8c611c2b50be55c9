use super::BookStore;
use crate::book::{AddressBook, BookSnapshot};
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<Option<BookSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let snapshot = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(Some(snapshot))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> AddressBook {
        match self.read_snapshot() {
            Ok(Some(snapshot)) => {
                let book = AddressBook::from_snapshot(snapshot);
                log::debug!(
                    "Loaded {} contacts from {}",
                    book.len(),
                    self.path.display()
                );
                book
            }
            Ok(None) => {
                log::debug!("No address book at {}, starting empty", self.path.display());
                AddressBook::new()
            }
            Err(e) => {
                log::warn!(
                    "Could not load address book from {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                AddressBook::new()
            }
        }
    }

    fn save(&mut self, book: &mut AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let snapshot = book.snapshot();
        let written = serde_json::to_string_pretty(&snapshot)
            .map_err(BookError::Serialization)
            .and_then(|content| fs::write(&self.path, content).map_err(BookError::Io));
        if let Err(e) = written {
            book.mark_dirty();
            return Err(e);
        }
        log::debug!(
            "Saved {} contacts to {}",
            snapshot.contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}
