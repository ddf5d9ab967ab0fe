//! The address book: records keyed by their unique name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// A collection of records with at most one record per name.
///
/// Iteration is in ascending name order, which makes listings and the
/// upcoming-birthday query deterministic for a given book.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced, not merged.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!("Replaced record '{}'", name);
        } else {
            debug!("Added record '{}'", name);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Look up a record by exact name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        if self.records.remove(name).is_none() {
            return Err(BookError::ContactNotFound(name.to_string()));
        }
        debug!("Deleted record '{}'", name);
        Ok(())
    }

    /// Records whose next birthday is between today and `days` days from now,
    /// both ends included.
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<&Record> {
        self.get_upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Same as [`get_upcoming_birthdays`](Self::get_upcoming_birthdays), counting from `today`.
    pub fn get_upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let horizon = 0..=i64::from(days);
        self.records
            .values()
            .filter(|record| {
                record
                    .days_to_birthday_from(today)
                    .is_some_and(|distance| horizon.contains(&distance))
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterate over all records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
