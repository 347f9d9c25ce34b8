//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The Display texts are part of the command-line contract: the dispatcher
/// echoes them verbatim as the reply for a rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number contains something other than digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `dd-mm-yyyy` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input text.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must contain only digits"),
            Self::InvalidBirthday(_) => {
                write!(f, "Birthday must be in the format 'dd-mm-yyyy'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
