use super::BookStore;
use crate::book::{AddressBook, BookSnapshot};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<BookSnapshot>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that loads `book` on start.
    pub fn with_book(mut book: AddressBook) -> Self {
        Self {
            snapshot: Some(book.snapshot()),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&BookSnapshot> {
        self.snapshot.as_ref()
    }

    /// How many times the book has been saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> AddressBook {
        self.snapshot
            .clone()
            .map(AddressBook::from_snapshot)
            .unwrap_or_default()
    }

    fn save(&mut self, book: &mut AddressBook) -> Result<()> {
        self.snapshot = Some(book.snapshot());
        self.saves += 1;
        Ok(())
    }
}
