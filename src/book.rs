//! The address book: an ordered name-to-record mapping.
//!
//! Records keep the order in which their names first appeared; re-adding a
//! name replaces the record without moving it. Pagination works over a
//! snapshot, so a listing in progress is unaffected by later mutation.

use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Ordered mapping from contact name to [`Record`].
///
/// Backed by a vector with linear name lookup. The book is interactive in
/// scale, and insertion order is what the listing commands promise, so a
/// hash map buys nothing here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// An existing record with the same name is replaced in place: last
    /// write wins, original position kept.
    pub fn add_record(&mut self, record: Record) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.name() == record.name())
        {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Look up a record by exact name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Paginate a snapshot of the book.
    ///
    /// Yields pages of up to `page_size` records in insertion order; the
    /// last page may be shorter. The snapshot is taken here, so mutating
    /// the book while a [`Pages`] value is alive does not change what it
    /// yields. A zero `page_size` is clamped to one.
    pub fn pages(&self, page_size: usize) -> Pages {
        Pages {
            records: self.records.clone(),
            page_size: page_size.max(1),
            cursor: 0,
        }
    }
}

/// Lazy, finite, non-restartable page iterator over a book snapshot.
#[derive(Debug, Clone)]
pub struct Pages {
    records: Vec<Record>,
    page_size: usize,
    cursor: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }
}
