//! Error types for the rolodex command layer.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Display texts double as the user-facing replies: the
//! dispatcher renders any handler error with `to_string()` and nothing
//! propagates past the loop for bad user input.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone or birthday field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact is not in the book
    #[error("No user with given name")]
    UnknownContact(String),

    /// A required positional argument was missing from the command line
    #[error("Enter user name")]
    MissingArgument(&'static str),

    /// The record holds no phone equal to the one given
    #[error("Phone number {0} not found for this contact")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
