//! Rolodex - a line-oriented contact book for the terminal.
//!
//! Commands arrive one per line on stdin, replies leave one per line on
//! stdout, and diagnostics go to stderr. The whole program is a
//! validation-and-dispatch layer over an in-memory name-to-record mapping;
//! nothing is persisted.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for phone numbers and birthdays
//! - **models**: the contact record
//! - **book**: the ordered name-to-record store with paginated iteration
//! - **error**: custom error types whose Display texts are the replies
//! - **config**: configuration management from environment variables
//! - **observability**: session command counters
//! - **repl**: the dispatcher and the read-dispatch-print loop

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repl;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
pub use observability::CommandMetrics;
pub use repl::{dispatch, Context, FAREWELL, GREETING, UNKNOWN_COMMAND};
