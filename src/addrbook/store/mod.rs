//! # Persistence Gateway
//!
//! The [`BookStore`] trait loads and saves the whole address book as one unit.
//! Nothing outside this module knows how or where a book is kept.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding a [`BookSnapshot`]
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json    # BookSnapshot: { "version": 1, "contacts": [...] }
//! └── config.json         # BookConfig
//! ```
//!
//! Loading never fails: a missing, unreadable or malformed snapshot yields an
//! empty book and a logged warning.
//!
//! [`BookSnapshot`]: crate::book::BookSnapshot

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the saved book, or an empty one if there is nothing usable.
    fn load(&self) -> AddressBook;

    /// Save the whole book, replacing any previous snapshot.
    ///
    /// Takes the book mutably because snapshotting clears its dirty flag.
    fn save(&mut self, book: &mut AddressBook) -> Result<()>;
}
