//! RecordCollection implementation
//!
//! Vec-backed ordered collection with append-only mutation.

use super::Record;
use crate::error::{Result, TopRankError};

/// An ordered, growable collection of records.
///
/// Insertion order is preserved; records are only ever added, never removed.
/// Positional access goes through [`get`](RecordCollection::get), which
/// surfaces an error for out-of-range indices instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create an empty collection with storage pre-allocated for `hint`
    /// records.
    ///
    /// The hint affects allocation only: the count starts at 0 and appending
    /// past the hint grows storage transparently.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            records: Vec::with_capacity(hint),
        }
    }

    /// Create a collection holding exactly the given records, in order
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Add a record at the end
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the record at `index`
    ///
    /// Returns [`TopRankError::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(TopRankError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current capacity of the backing storage (always >= `len()`)
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Iterate over the records in insertion order
    ///
    /// Each call yields a fresh traversal from the start.
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            records: &self.records,
            pos: 0,
        }
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a collection in insertion order
pub struct RecordIter<'a> {
    records: &'a [Record],
    pos: usize,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.records.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for RecordIter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_new_collection_is_empty() {
        let list = RecordCollection::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_capacity_hint_does_not_change_count() {
        let list = RecordCollection::with_capacity(10);
        assert_eq!(list.len(), 0);
        assert!(list.capacity() >= 10);
    }

    #[test]
    fn test_append_past_capacity_hint_grows() {
        let mut list = RecordCollection::with_capacity(2);
        for i in 0..5 {
            list.append(Record::new(format!("r{}", i), i));
        }
        assert_eq!(list.len(), 5);
        assert_eq!(list.get(4).unwrap(), &Record::new("r4", 4));
    }

    #[test]
    fn test_from_records_preserves_order() {
        let list = RecordCollection::from_records(vec![
            Record::new("a", 1),
            Record::new("b", 2),
            Record::new("c", 3),
        ]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap().name(), "a");
        assert_eq!(list.get(2).unwrap().name(), "c");
    }

    #[test]
    fn test_get_at_len_is_out_of_range() {
        let mut list = RecordCollection::new();
        list.append(Record::new("only", 1));

        let err = list.get(1).unwrap_err();
        assert!(matches!(
            err,
            TopRankError::IndexOutOfRange { index: 1, count: 1 }
        ));
    }

    #[test]
    fn test_get_on_empty_collection() {
        let list = RecordCollection::new();
        assert!(list.get(0).is_err());
    }

    #[test]
    fn test_iter_is_restartable() {
        let list = RecordCollection::from_records(vec![
            Record::new("a", 1),
            Record::new("b", 2),
        ]);

        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let list = RecordCollection::from_records(vec![
            Record::new("a", 1),
            Record::new("b", 2),
        ]);

        let mut names = Vec::new();
        for record in &list {
            names.push(record.name().to_string());
        }
        assert_eq!(names, vec!["a", "b"]);
    }

    #[quickcheck]
    fn count_equals_number_of_appends(names: Vec<String>, hint: u8) -> bool {
        let mut list = RecordCollection::with_capacity(hint as usize);
        for (i, name) in names.iter().enumerate() {
            list.append(Record::new(name.clone(), i as i64));
        }
        list.len() == names.len()
    }

    #[quickcheck]
    fn get_returns_record_appended_at_position(values: Vec<i64>) -> bool {
        let mut list = RecordCollection::new();
        for (i, value) in values.iter().enumerate() {
            list.append(Record::new(format!("r{}", i), *value));
        }
        values
            .iter()
            .enumerate()
            .all(|(i, value)| list.get(i).map_or(false, |r| r.value() == *value))
    }

    #[quickcheck]
    fn iteration_matches_indexed_access(values: Vec<i64>) -> bool {
        let list: RecordCollection = values
            .iter()
            .enumerate()
            .map(|(i, v)| Record::new(format!("r{}", i), *v))
            .collect();
        list.iter()
            .enumerate()
            .all(|(i, record)| list.get(i).map(|r| r == record).unwrap_or(false))
    }
}
