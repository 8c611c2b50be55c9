//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic address book library**. The terminal client in
//! `main.rs` is one caller; a chat widget calling [`api::AddressBookApi::transform`]
//! is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, runs the REPL, colors replies          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the book and the store                              │
//! │  - Dispatches a line, then saves if the book is dirty       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Keyword table, argument counts, errors rendered as text  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model.rs)                                 │
//! │  - Validated values, records, reports, dirty tracking       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and the `transform` entry point
//! - [`commands`]: Parsing and routing of text commands
//! - [`book`]: The address book, its reports and its snapshot schema
//! - [`model`]: `PersonName`, `PhoneNumber`, `Birthday`, `Record`
//! - [`store`]: Persistence gateway
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
