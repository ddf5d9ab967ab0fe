//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat; only their format is checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns a format error if `name` is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// The list is untouched when validation fails.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    /// - a format error if `new` is not a valid phone; `old` is kept
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Return the first stored phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> BookResult<&str> {
        self.position_of(value).map(|index| self.phones[index].as_str())
    }

    /// Remove the first stored phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<()> {
        let index = self.position_of(value)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Parse `raw` as `DD.MM.YYYY` and set it as the birthday, replacing any
    /// previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Days until the next occurrence of the birthday, counting from the
    /// local calendar date. `Some(0)` means the birthday is today.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.anniversary_in(today.year())?;
        if next < today {
            next = birthday.anniversary_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    fn position_of(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_new_record_rejects_empty_name() {
        assert_eq!(
            Record::new(""),
            Err(BookError::Validation(ValidationError::EmptyName))
        );
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1234567890", "5555555555", "1234567890"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut record = record_with_phones(&["1234567890"]);
        let err = record.add_phone("12345").unwrap_err();
        assert!(err.is_format());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = record_with_phones(&["1234567890", "5555555555", "1234567890"]);
        record.edit_phone("1234567890", "1112223333").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1112223333", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_edit_phone_missing_old_value() {
        let mut record = record_with_phones(&["1234567890"]);
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();

        assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(record.find_phone("1234567890").unwrap(), "1234567890");
        assert!(record.find_phone("1112223333").is_err());
    }

    #[test]
    fn test_edit_phone_invalid_new_value_keeps_old() {
        let mut record = record_with_phones(&["1234567890"]);
        let err = record.edit_phone("1234567890", "abc").unwrap_err();

        assert!(err.is_format());
        assert_eq!(record.find_phone("1234567890").unwrap(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(record.find_phone("5555555555").unwrap(), "5555555555");
        assert!(record.find_phone("9999999999").unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record_with_phones(&["1234567890", "5555555555", "1234567890"]);
        record.remove_phone("1234567890").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["5555555555", "1234567890"]);

        assert_eq!(
            record.remove_phone("0000000000"),
            Err(BookError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("25.12.1990").unwrap();
        record.add_birthday("01.01.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1991");
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("25.12.1990").unwrap();

        let err = record.add_birthday("1990-12-25").unwrap_err();
        assert!(err.is_format());
        assert_eq!(record.birthday().unwrap().to_string(), "25.12.1990");
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.days_to_birthday(), None);
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 1)), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 15)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("25.12.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 12, 20)), Some(5));
    }

    #[test]
    fn test_days_to_birthday_rolls_over_year() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 12, 31)), Some(1));

        record.add_birthday("14.06.1990").unwrap();
        // 2025 is not a leap year
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 15)), Some(364));
        assert_eq!(record.days_to_birthday_from(date(2023, 6, 15)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_leap_day() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("29.02.2000").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2023, 2, 28)), Some(0));
        assert_eq!(record.days_to_birthday_from(date(2024, 2, 28)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_uses_local_today() {
        let today = Local::now().date_naive();
        let mut record = Record::new("John").unwrap();
        record
            .add_birthday(&today.format("%d.%m.%Y").to_string())
            .unwrap();
        // Guard against the clock crossing midnight between the two calls
        let days = record.days_to_birthday().unwrap();
        assert!(days == 0 || days >= 364);
    }

    #[test]
    fn test_display() {
        let mut record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );

        record.add_birthday("25.12.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 25.12.1990"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_serialization() {
        let mut record = record_with_phones(&["1234567890"]);
        record.add_birthday("25.12.1990").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John",
                "phones": ["1234567890"],
                "birthday": "25.12.1990"
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["12345"]}"#);
        assert!(result.is_err());
    }
}
