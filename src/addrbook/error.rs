use crate::model::{PersonName, PhoneNumber};
use thiserror::Error;

/// A raw value did not match the format its value type expects.
///
/// The message names the expected format and is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    pub(crate) fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{command}: accepts {expected} input {}, but {received} were provided.", plural_arguments(.expected))]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        received: usize,
    },

    #[error("Phone {phone} is already present in contact {name} and can not be added twice.")]
    DuplicatePhone { name: PersonName, phone: PhoneNumber },

    #[error("Phone {phone} is absent in contact {name}.")]
    PhoneNotFound { name: PersonName, phone: PhoneNumber },

    #[error("Contact {name} is absent in address book.")]
    ContactNotFound { name: PersonName },

    #[error("There are no contacts in address book yet.")]
    EmptyBook,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn plural_arguments(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
