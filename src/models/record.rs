//! Record model representing one contact in the book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact: a name, the phones in the order they were added, and an
/// optional birthday.
///
/// Phones may repeat; nothing dedups them. The name is fixed at
/// construction — renaming a contact means adding a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no stored phone equals it.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> CommandResult<()> {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound(phone.as_str().to_string())),
        }
    }

    /// Replace the first occurrence of `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if `old` is not present.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> CommandResult<()> {
        match self.phones.iter().position(|p| p == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound(old.as_str().to_string())),
        }
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days until the next birthday, counting today as day one.
    ///
    /// Returns `None` when no birthday is set. The count is inclusive: a
    /// birthday falling today yields 1, tomorrow yields 2. Downstream users
    /// of the original system depend on that offset, so it is kept as is.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Deterministic variant of [`Record::days_to_birthday`] for a fixed
    /// `today`.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let (month, day) = (birthday.date().month(), birthday.date().day());

        // The candidate in the current year wins unless it already passed.
        // 29 February only exists in leap years; advance until it does.
        let mut year = today.year();
        let next = loop {
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(candidate) if candidate >= today => break candidate,
                _ => year += 1,
            }
        };

        Some((next - today).num_days() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(value: &str) -> PhoneNumber {
        PhoneNumber::new(value).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("alice");
        assert_eq!(record.name(), "alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_duplicates_and_order() {
        let mut record = Record::new("alice");
        record.add_phone(phone("111"));
        record.add_phone(phone("222"));
        record.add_phone(phone("111"));

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["111", "222", "111"]);
    }

    #[test]
    fn test_remove_phone_takes_first_match_only() {
        let mut record = Record::new("alice");
        record.add_phone(phone("111"));
        record.add_phone(phone("222"));
        record.add_phone(phone("111"));

        record.remove_phone(&phone("111")).unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["222", "111"]);
    }

    #[test]
    fn test_remove_phone_missing_fails() {
        let mut record = Record::new("alice");
        record.add_phone(phone("111"));

        let err = record.remove_phone(&phone("999")).unwrap_err();
        assert!(matches!(err, CommandError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_replaces_first_occurrence() {
        let mut record = Record::new("alice");
        record.add_phone(phone("111"));
        record.add_phone(phone("111"));

        record.edit_phone(&phone("111"), phone("333")).unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["333", "111"]);
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut record = Record::new("alice");
        let err = record.edit_phone(&phone("111"), phone("222")).unwrap_err();
        assert!(matches!(err, CommandError::PhoneNotFound(_)));
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("alice");
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 6)), None);
    }

    #[test]
    fn test_days_to_birthday_counts_today_as_one() {
        let mut record = Record::new("alice");
        record.set_birthday(Birthday::new("06-08-1990").unwrap());
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 6)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_tomorrow_is_two() {
        let mut record = Record::new("alice");
        record.set_birthday(Birthday::new("07-08-1990").unwrap());
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 6)), Some(2));
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        let mut record = Record::new("alice");
        record.set_birthday(Birthday::new("05-08-1990").unwrap());
        // 05-08-2026 already passed on 06-08-2026; next is 05-08-2027.
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 6)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_leap_day_skips_to_leap_year() {
        let mut record = Record::new("alice");
        record.set_birthday(Birthday::new("29-02-2000").unwrap());
        // Next 29 February after 01-03-2026 is in 2028.
        let days = record.days_to_birthday_on(date(2026, 3, 1)).unwrap();
        assert_eq!(days, (date(2028, 2, 29) - date(2026, 3, 1)).num_days() + 1);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::new("bob");
        record.add_phone(phone("1111111111"));
        record.set_birthday(Birthday::new("01-01-2000").unwrap());

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
