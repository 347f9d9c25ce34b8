//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted by [`Birthday::new`] and produced by its Display.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Shape check run before the calendar parse. chrono alone would accept
/// unpadded fields like `1-1-2020`, which the command contract rejects.
static FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("birthday regex is valid"));

/// A contact's birthday, parsed from strict `dd-mm-yyyy` text.
///
/// Construction requires two-digit day, two-digit month, four-digit year,
/// and a real calendar date: `31-02-2000` and `1-1-2020` are both rejected.
/// The stored value is the parsed date; Display renders the same
/// `dd-mm-yyyy` text back, so accepted input round-trips.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("24-08-1991").unwrap();
/// assert_eq!(birthday.to_string(), "24-08-1991");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating format and calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not
    /// match `dd-mm-yyyy` exactly or names an impossible date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !FORMAT_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the dd-mm-yyyy string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
