//! Ownership and release of alignment records
//!
//! An [`AlignmentList`] owns its records outright, so dropping it releases
//! every record exactly once, head to tail. [`free`] and [`free_list`]
//! release the value held in a caller's slot and leave the slot empty.

use std::collections::{vec_deque, VecDeque};

use log::trace;

use crate::record::AlignmentRecord;

/// Releases a single record and clears the caller's slot
///
/// Does nothing when the slot is already empty. Other records are untouched.
pub fn free(slot: &mut Option<AlignmentRecord>) {
    if let Some(record) = slot.take() {
        trace!("Releasing mrnaAli {}", record.id());
        drop(record);
    }
}

/// Releases every record of a list and clears the caller's slot
///
/// Records are released head to tail. Does nothing when the slot is already
/// empty.
pub fn free_list(slot: &mut Option<AlignmentList>) {
    if let Some(mut list) = slot.take() {
        trace!("Releasing {} mrnaAli records", list.len());
        list.clear();
    }
}

/// Ordered collection of alignment records
///
/// Index 0 is the head of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentList {
    records: VecDeque<AlignmentRecord>,
}
impl AlignmentList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a record at the tail
    pub fn push(&mut self, record: AlignmentRecord) {
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn head(&self) -> Option<&AlignmentRecord> {
        self.records.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AlignmentRecord> {
        self.records.get(index)
    }

    /// Unlinks the head and hands it back, leaving the rest of the list intact
    pub fn pop_head(&mut self) -> Option<AlignmentRecord> {
        self.records.pop_front()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, AlignmentRecord> {
        self.records.iter()
    }

    /// Reverses the order of the list in place
    pub fn reverse(&mut self) {
        self.records.make_contiguous().reverse();
    }

    /// Releases every record, head to tail
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<AlignmentRecord> {
        self.records.into()
    }
}

impl From<Vec<AlignmentRecord>> for AlignmentList {
    fn from(records: Vec<AlignmentRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl FromIterator<AlignmentRecord> for AlignmentList {
    fn from_iter<I: IntoIterator<Item = AlignmentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<AlignmentRecord> for AlignmentList {
    fn extend<I: IntoIterator<Item = AlignmentRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for AlignmentList {
    type Item = AlignmentRecord;
    type IntoIter = vec_deque::IntoIter<AlignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a AlignmentList {
    type Item = &'a AlignmentRecord;
    type IntoIter = vec_deque::Iter<'a, AlignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{AlignmentWriter, OutputFormat};
    use anyhow::Result;

    fn record(id: u32) -> AlignmentRecord {
        let id = id.to_string();
        let row = [
            id.as_str(), "1", "1", "0", "1", "10", "BC000001", "7", "300", "0", "300", "1", "0",
            "1", "300", "1", "300", "0", "1", "0", "0", "0",
        ];
        AlignmentRecord::load(&row).unwrap()
    }

    fn ids(list: &AlignmentList) -> Vec<u32> {
        list.iter().map(AlignmentRecord::id).collect()
    }

    #[test]
    fn test_free_single() {
        let mut slot = Some(record(1));
        free(&mut slot);
        assert!(slot.is_none());

        // already empty
        free(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn test_free_list() {
        let mut slot: Option<AlignmentList> = Some((0..100).map(record).collect());
        assert_eq!(slot.as_ref().map(AlignmentList::len), Some(100));
        free_list(&mut slot);
        assert!(slot.is_none());

        free_list(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn test_pop_head_keeps_tail() {
        let mut list: AlignmentList = (1..=3).map(record).collect();
        let mut head = list.pop_head();
        assert_eq!(head.as_ref().map(AlignmentRecord::id), Some(1));
        free(&mut head);
        assert_eq!(ids(&list), [2, 3]);
        assert_eq!(list.head().map(AlignmentRecord::id), Some(2));
    }

    #[test]
    fn test_order_and_reverse() {
        let mut list = AlignmentList::with_capacity(4);
        assert!(list.is_empty());
        list.push(record(1));
        list.extend([record(2), record(3)]);
        assert_eq!(ids(&list), [1, 2, 3]);
        assert_eq!(list.get(2).map(AlignmentRecord::id), Some(3));

        list.reverse();
        assert_eq!(ids(&list), [3, 2, 1]);
        let owned: Vec<u32> = list.into_iter().map(|r| r.id()).collect();
        assert_eq!(owned, [3, 2, 1]);
    }

    #[test]
    fn test_clear_and_into_vec() {
        let mut list = AlignmentList::from(vec![record(4), record(5)]);
        assert_eq!(list.clone().into_vec().len(), 2);
        list.clear();
        assert!(list.is_empty());
        assert!(list.head().is_none());
    }

    #[test]
    fn test_written_head_to_tail() -> Result<()> {
        let list: AlignmentList = (1..=2).map(record).collect();
        let mut writer = AlignmentWriter::new(Vec::new(), OutputFormat::TabRecord);
        writer.write_list(&list)?;
        let text = String::from_utf8(writer.into_inner()?)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1\t"));
        assert!(lines[1].starts_with("2\t"));
        assert!(lines[1].ends_with("\t300,\t0,\t1,\t0,\t0,\t0,"));
        Ok(())
    }
}
