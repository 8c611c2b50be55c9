//! # Command Layer
//!
//! Turns one line of text into an operation on the [`AddressBook`] and a
//! [`Reply`].
//!
//! A line is split on whitespace. The first token, lower-cased, selects a
//! command from [`COMMANDS`]; the remaining tokens are its arguments. Unknown
//! keywords and empty lines get the help listing.
//!
//! Each command declares how many arguments it takes. The count is checked
//! before the handler runs, so handlers never see the wrong number of tokens.
//! Whatever a handler fails with is rendered into the reply text; nothing
//! escapes [`dispatch`] as an error.

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod birthdays;
pub mod phones;
pub mod session;

/// What a command operates on.
pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub birthday_window_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// The response to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub level: MessageLevel,
    pub text: String,
    /// The user asked to end the session.
    pub exit: bool,
}

impl Reply {
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            exit: false,
        }
    }
}

pub type Handler = fn(&mut Context<'_>, &[String]) -> Result<Reply>;

pub struct CommandSpec {
    /// The first keyword is the command's name; the rest are aliases.
    pub keywords: &'static [&'static str],
    pub usage: &'static str,
    /// Exact number of arguments, or `None` to accept anything.
    pub arity: Option<usize>,
    pub handler: Handler,
}

impl CommandSpec {
    pub fn name(&self) -> &'static str {
        self.keywords[0]
    }
}

/// Every command, in the order the help listing shows them.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        keywords: &["hello", "hi"],
        usage: "hello",
        arity: None,
        handler: session::hello,
    },
    CommandSpec {
        keywords: &["add"],
        usage: "add [name] [phone]",
        arity: Some(2),
        handler: phones::add,
    },
    CommandSpec {
        keywords: &["change"],
        usage: "change [name] [phone] [new_phone]",
        arity: Some(3),
        handler: phones::change,
    },
    CommandSpec {
        keywords: &["phone"],
        usage: "phone [name]",
        arity: Some(1),
        handler: phones::phone,
    },
    CommandSpec {
        keywords: &["all"],
        usage: "all",
        arity: Some(0),
        handler: phones::all,
    },
    CommandSpec {
        keywords: &["add-birthday"],
        usage: "add-birthday [name] [date]",
        arity: Some(2),
        handler: birthdays::add_birthday,
    },
    CommandSpec {
        keywords: &["show-birthday"],
        usage: "show-birthday [name]",
        arity: Some(1),
        handler: birthdays::show_birthday,
    },
    CommandSpec {
        keywords: &["birthdays"],
        usage: "birthdays",
        arity: Some(0),
        handler: birthdays::birthdays,
    },
    CommandSpec {
        keywords: &["help"],
        usage: "help",
        arity: None,
        handler: session::help,
    },
    CommandSpec {
        keywords: &["close", "exit"],
        usage: "close",
        arity: None,
        handler: session::close,
    },
];

static REGISTRY: Lazy<HashMap<&'static str, &'static CommandSpec>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for spec in COMMANDS {
        for keyword in spec.keywords {
            let previous = registry.insert(*keyword, spec);
            assert!(previous.is_none(), "duplicate command keyword: {}", keyword);
        }
    }
    registry
});

pub fn lookup(keyword: &str) -> Option<&'static CommandSpec> {
    REGISTRY.get(keyword).copied()
}

/// Splits a line into a lower-cased keyword and its arguments.
///
/// Returns `None` for a line with no tokens.
pub fn parse_input(input: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = input.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some((keyword, tokens.map(str::to_string).collect()))
}

pub fn dispatch(ctx: &mut Context<'_>, input: &str) -> Reply {
    let Some((keyword, args)) = parse_input(input) else {
        return session::help_reply();
    };

    match lookup(&keyword) {
        Some(spec) => {
            log::debug!("Dispatching {} with {} argument(s)", spec.name(), args.len());
            run(spec, ctx, &args).unwrap_or_else(error_reply)
        }
        None => {
            log::debug!("Unknown command {:?}, showing help", keyword);
            session::help_reply()
        }
    }
}

/// Nothing to show is a warning; everything else is an error.
fn error_reply(err: BookError) -> Reply {
    match err {
        BookError::EmptyBook => Reply::warning(err.to_string()),
        _ => Reply::error(err.to_string()),
    }
}

fn run(spec: &CommandSpec, ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    if let Some(expected) = spec.arity {
        if args.len() != expected {
            return Err(BookError::ArgumentCount {
                command: spec.name(),
                expected,
                received: args.len(),
            });
        }
    }
    (spec.handler)(ctx, args)
}
