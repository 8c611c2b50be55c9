//! # The Address Book
//!
//! [`AddressBook`] maps each [`PersonName`] to exactly one [`Record`], in the
//! order contacts were first written.
//!
//! ## Upsert vs. strict operations
//!
//! Adding a phone or a birthday for an unknown name creates the contact on the
//! spot. Editing, and every display query, requires the contact to exist and
//! fails with [`BookError::ContactNotFound`] otherwise.
//!
//! ## Dirty tracking
//!
//! Every successful mutation marks the book dirty. The flag is cleared only by
//! [`AddressBook::snapshot`], which is the single way to obtain a serializable
//! form of the book, so a saved book is always a clean book.

use crate::error::{BookError, Result};
use crate::model::{Birthday, PersonName, PhoneNumber, Record};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;
pub const MAX_BIRTHDAY_WINDOW_DAYS: i64 = 366;

const NOT_ENTERED: &str = "not entered yet";

#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<PersonName, Record>,
    dirty: bool,
}

/// A contact due for congratulations, and the day to congratulate them on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congratulation {
    pub name: PersonName,
    pub date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &PersonName) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn add_birthday(&mut self, name: PersonName, birthday: Birthday) {
        self.records
            .entry(name.clone())
            .or_insert_with(|| Record::new(name))
            .add_birthday(birthday);
        self.dirty = true;
    }

    pub fn add_phone(&mut self, name: PersonName, phone: PhoneNumber) -> Result<()> {
        match self.records.get_mut(&name) {
            Some(record) => record.add_phone(phone)?,
            None => {
                let mut record = Record::new(name.clone());
                record.add_phone(phone)?;
                self.records.insert(name, record);
            }
        }
        self.dirty = true;
        Ok(())
    }

    pub fn edit_phone(
        &mut self,
        name: &PersonName,
        old: &PhoneNumber,
        new: PhoneNumber,
    ) -> Result<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        self.dirty = true;
        Ok(())
    }

    pub fn show_birthday(&self, name: &PersonName) -> Result<String> {
        let record = self.record(name)?;
        let birthday = record
            .birthday()
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_ENTERED.to_string());
        Ok(format!("Contact: {}\n\nBirthday: {}", record.name(), birthday))
    }

    pub fn show_phones(&self, name: &PersonName) -> Result<String> {
        let record = self.record(name)?;
        let mut report = format!("Contact: {}\n\n", record.name());
        if record.phones().is_empty() {
            report.push_str(&format!("Phones: {}\n\n", NOT_ENTERED));
        }
        for phone in record.phones() {
            report.push_str(&format!("Phone: {}\n\n", phone));
        }
        Ok(report)
    }

    pub fn show_all_phones(&self) -> Result<String> {
        if self.is_empty() {
            return Err(BookError::EmptyBook);
        }
        let mut report = String::from("All phones in address book:\n\n");
        for name in self.records.keys() {
            report.push_str(&self.show_phones(name)?);
        }
        Ok(report)
    }

    /// Contacts whose birthday falls within `[today, today + window_days]`.
    ///
    /// Birthdays are projected onto `today`'s year only, so a window that runs
    /// past 31 December does not pick up early January birthdays. Greetings
    /// that land on a weekend move to the following Monday. The window is
    /// clamped to `0..=MAX_BIRTHDAY_WINDOW_DAYS`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<Congratulation> {
        let window = Duration::days(window_days.clamp(0, MAX_BIRTHDAY_WINDOW_DAYS));
        let end = today.checked_add_signed(window).unwrap_or(NaiveDate::MAX);
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let projected = birthday.anniversary_in(today.year());
                if projected < today || projected > end {
                    return None;
                }
                Some(Congratulation {
                    name: record.name().clone(),
                    date: shift_off_weekend(projected),
                })
            })
            .collect()
    }

    pub fn show_birthdays(&self, today: NaiveDate, window_days: i64) -> Result<String> {
        if self.is_empty() {
            return Err(BookError::EmptyBook);
        }
        let upcoming = self.upcoming_birthdays(today, window_days);
        let mut report = String::from("Congratulations next week:\n\n");
        if upcoming.is_empty() {
            report.push_str("There are no congratulations next week.\n\n");
        }
        for c in &upcoming {
            report.push_str(&format!(
                "Contact: {}, Congratulation: {}\n\n",
                c.name,
                Birthday::from(c.date)
            ));
        }
        Ok(report)
    }

    /// Produces the persistable form of the book and clears the dirty flag.
    pub fn snapshot(&mut self) -> BookSnapshot {
        self.dirty = false;
        BookSnapshot {
            version: SNAPSHOT_VERSION,
            contacts: self.records.values().map(ContactSnapshot::from).collect(),
        }
    }

    /// Rebuilds a clean book from a snapshot.
    ///
    /// Duplicate contacts are merged and duplicate phones dropped, so a
    /// hand-edited file can never break the book's invariants.
    pub fn from_snapshot(snapshot: BookSnapshot) -> Self {
        let mut book = Self::new();
        for contact in snapshot.contacts {
            let record = book
                .records
                .entry(contact.name.clone())
                .or_insert_with(|| Record::new(contact.name));
            if let Some(birthday) = contact.birthday {
                record.add_birthday(birthday);
            }
            for phone in contact.phones {
                if let Err(e) = record.add_phone(phone) {
                    log::warn!("Skipping stored phone: {}", e);
                }
            }
        }
        book
    }

    /// Flags the book as unsaved again, e.g. after a snapshot failed to reach disk.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn record(&self, name: &PersonName) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound { name: name.clone() })
    }

    fn record_mut(&mut self, name: &PersonName) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound { name: name.clone() })
    }
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The on-disk schema of a whole address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<ContactSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    pub name: PersonName,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl From<&Record> for ContactSnapshot {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds pre-populated books. The resulting book is clean.
    #[derive(Default)]
    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_phone(mut self, name: &str, phone: &str) -> Self {
            self.book
                .add_phone(name.parse().unwrap(), phone.parse().unwrap())
                .unwrap();
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.book
                .add_birthday(name.parse().unwrap(), birthday.parse().unwrap());
            self
        }

        pub fn build(mut self) -> AddressBook {
            self.book.snapshot();
            self.book
        }
    }
}
