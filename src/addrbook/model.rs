//! Core data types: the validated value types and the contact [`Record`].
//!
//! Every value type is parsed, never assumed. Constructors reject malformed
//! input with a [`ValidationError`] whose message names the expected format,
//! so a value that exists is a value that is valid.

use crate::error::{BookError, Result, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 20;
const PHONE_LEN: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const NAME_HINT: &str = "Name must consist of 2 to 20 letters A-Z, a-z.";
const PHONE_HINT: &str = "Phone number must consist of 10 digits, example: 0971122333";
const BIRTHDAY_HINT: &str = "Birthday must be in format: dd.mm.yyyy, example: 31.12.2024";

/// A contact's name. Also the contact's identity inside the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    pub fn new(raw: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let raw = raw.into();
        let len_ok = (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&raw.len());
        if len_ok && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::new(NAME_HINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A ten digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.len() == PHONE_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::new(PHONE_HINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birth date, written and read as `dd.mm.yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> std::result::Result<Self, ValidationError> {
        if !has_birthday_shape(raw) {
            return Err(ValidationError::new(BIRTHDAY_HINT));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::new(BIRTHDAY_HINT))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day in `year`.
    ///
    /// A 29 February birthday falls on 28 February in common years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, self.0.month(), 28).unwrap_or(self.0)
        })
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// `dd.mm.yyyy`: two digit day, two digit month, four digit year.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

macro_rules! text_value {
    ($ty:ident, $parse:expr) => {
        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }
    };
}

text_value!(PersonName, PersonName::new);
text_value!(PhoneNumber, PhoneNumber::new);
text_value!(Birthday, Birthday::new);

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Everything tracked for one contact.
///
/// Phones keep insertion order and never contain the same number twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: PersonName,
    birthday: Option<Birthday>,
    phones: Vec<PhoneNumber>,
}

impl Record {
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            birthday: None,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) -> Result<()> {
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone {
                name: self.name.clone(),
                phone,
            });
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> Result<()> {
        let pos = self.position_of(phone)?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replaces `old` with `new`, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<()> {
        let pos = self.position_of(old)?;
        if *old != new && self.phones.contains(&new) {
            return Err(BookError::DuplicatePhone {
                name: self.name.clone(),
                phone: new,
            });
        }
        self.phones[pos] = new;
        Ok(())
    }

    fn position_of(&self, phone: &PhoneNumber) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PersonName {
        s.parse().unwrap()
    }

    fn phone(s: &str) -> PhoneNumber {
        s.parse().unwrap()
    }

    #[test]
    fn name_accepts_letters_within_bounds() {
        for raw in ["Al", "Mark", "abcdefghijklmnopqrst", "McDonald"] {
            assert_eq!(name(raw).as_str(), raw);
        }
    }

    #[test]
    fn name_rejects_bad_input() {
        for raw in ["", "A", "abcdefghijklmnopqrstu", "Mark1", "Anne-Marie", "Jo_", "Zoë"] {
            let err = PersonName::new(raw).unwrap_err();
            assert_eq!(err.message(), NAME_HINT, "input {raw:?}");
        }
    }

    #[test]
    fn names_compare_by_value() {
        use std::collections::HashSet;
        let set: HashSet<PersonName> = [name("Ann"), name("Ann"), name("Bob")].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn phone_requires_ten_digits() {
        assert_eq!(phone("0971122333").as_str(), "0971122333");
        for raw in ["", "097112233", "09711223334", "097112233a", "+380971122", "097 112 23"] {
            assert!(PhoneNumber::new(raw).is_err(), "input {raw:?}");
        }
    }

    #[test]
    fn birthday_round_trips_through_text() {
        let b: Birthday = "31.12.2024".parse().unwrap();
        assert_eq!(b.to_string(), "31.12.2024");
        assert_eq!(b.to_string().parse::<Birthday>().unwrap(), b);
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("29.02.2024").is_ok());
    }

    #[test]
    fn birthday_format_is_strict() {
        for raw in ["1.1.2000", "01/01/2000", "2000.01.01", "01.01.00", "01.01.2000 ", "aa.bb.cccc"] {
            let err = Birthday::new(raw).unwrap_err();
            assert_eq!(err.message(), BIRTHDAY_HINT, "input {raw:?}");
        }
    }

    #[test]
    fn leap_day_anniversary_falls_back_to_feb_28() {
        let b = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            b.anniversary_in(2025),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(
            b.anniversary_in(2028),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
    }

    #[test]
    fn serde_uses_text_form_and_validates() {
        let json = serde_json::to_string(&phone("0971122333")).unwrap();
        assert_eq!(json, "\"0971122333\"");
        assert!(serde_json::from_str::<PhoneNumber>("\"123\"").is_err());
        assert!(serde_json::from_str::<PersonName>("\"M4rk\"").is_err());
    }

    #[test]
    fn add_phone_rejects_duplicates() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0971122333")).unwrap();
        let err = record.add_phone(phone("0971122333")).unwrap_err();
        assert!(matches!(err, BookError::DuplicatePhone { .. }));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn phones_keep_insertion_order() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0000000002")).unwrap();
        record.add_phone(phone("0000000001")).unwrap();
        assert_eq!(record.phones(), &[phone("0000000002"), phone("0000000001")]);
    }

    #[test]
    fn remove_phone() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0971122333")).unwrap();
        record.remove_phone(&phone("0971122333")).unwrap();
        assert!(record.phones().is_empty());

        let err = record.remove_phone(&phone("0971122333")).unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound { .. }));
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0000000001")).unwrap();
        record.add_phone(phone("0000000002")).unwrap();
        record.add_phone(phone("0000000003")).unwrap();

        record
            .edit_phone(&phone("0000000002"), phone("0000000009"))
            .unwrap();
        assert_eq!(
            record.phones(),
            &[phone("0000000001"), phone("0000000009"), phone("0000000003")]
        );
    }

    #[test]
    fn edit_missing_phone_leaves_record_untouched() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0000000001")).unwrap();
        let before = record.clone();

        let err = record
            .edit_phone(&phone("0000000002"), phone("0000000003"))
            .unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound { .. }));
        assert_eq!(record, before);
    }

    #[test]
    fn edit_phone_onto_existing_number_is_a_duplicate() {
        let mut record = Record::new(name("Mark"));
        record.add_phone(phone("0000000001")).unwrap();
        record.add_phone(phone("0000000002")).unwrap();
        let before = record.clone();

        let err = record
            .edit_phone(&phone("0000000001"), phone("0000000002"))
            .unwrap_err();
        assert!(matches!(err, BookError::DuplicatePhone { .. }));
        assert_eq!(record, before);

        // Editing a number onto itself is a no-op, not a conflict.
        record
            .edit_phone(&phone("0000000001"), phone("0000000001"))
            .unwrap();
    }

    #[test]
    fn birthday_is_overwritten() {
        let mut record = Record::new(name("Ann"));
        record.add_birthday(Birthday::new("01.01.2000").unwrap());
        record.add_birthday(Birthday::new("02.02.2000").unwrap());
        assert_eq!(record.birthday(), Some(&Birthday::new("02.02.2000").unwrap()));
    }
}
