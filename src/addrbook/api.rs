//! # API Facade
//!
//! [`AddressBookApi`] is the single entry point for every UI. It owns the
//! [`AddressBook`] and the [`BookStore`] it came from, and for each line of
//! input it:
//!
//! 1. dispatches the line through the command layer, producing a [`Reply`];
//! 2. saves the book if the command left it dirty, whether the command
//!    succeeded or not.
//!
//! A failed save is logged; the reply is returned unchanged. Nothing crosses
//! this boundary as an error.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS, MAX_BIRTHDAY_WINDOW_DAYS};
use crate::commands::{self, Context, Reply};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

/// One prior turn of a conversation.
///
/// Accepted by [`AddressBookApi::transform`] for chat-style callers; the
/// address book does not read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

pub struct AddressBookApi<S: BookStore> {
    book: AddressBook,
    store: S,
    birthday_window_days: i64,
}

impl<S: BookStore> AddressBookApi<S> {
    /// Loads the book from `store`.
    pub fn new(store: S) -> Self {
        let book = store.load();
        Self {
            book,
            store,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Clamped to `0..=MAX_BIRTHDAY_WINDOW_DAYS`.
    pub fn with_birthday_window(mut self, days: i64) -> Self {
        self.birthday_window_days = days.clamp(0, MAX_BIRTHDAY_WINDOW_DAYS);
        self
    }

    /// Chat-turn entry point: one line in, one response out.
    pub fn transform(&mut self, input: &str, _history: &[ChatMessage]) -> String {
        self.dispatch(input).text
    }

    pub fn dispatch(&mut self, input: &str) -> Reply {
        let today = Local::now().date_naive();
        self.dispatch_on(input, today)
    }

    /// Like [`dispatch`](Self::dispatch), with `today` supplied by the caller.
    pub fn dispatch_on(&mut self, input: &str, today: NaiveDate) -> Reply {
        let mut ctx = Context {
            book: &mut self.book,
            today,
            birthday_window_days: self.birthday_window_days,
        };
        let reply = commands::dispatch(&mut ctx, input);
        self.flush();
        reply
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn flush(&mut self) {
        if !self.book.is_dirty() {
            return;
        }
        if let Err(e) = self.store.save(&mut self.book) {
            log::error!("Failed to save address book: {}", e);
        }
    }
}
