use crate::record::{Record, SampleId};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered list of records, newest first once records have been added.
///
/// Duplicated identifiers coming from seed or persisted data are tolerated;
/// uniqueness is only checked when new records are inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Record>);

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.0.iter().any(|r| r.sample_id().as_str() == id)
    }

    /// First record carrying `id`
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.0.iter().find(|r| r.sample_id().as_str() == id)
    }

    /// Insert at the head of the collection
    pub fn prepend(&mut self, record: Record) {
        self.0.insert(0, record);
    }

    /// Drop the head record; undoes a `prepend` whose persistence failed
    pub fn remove_first(&mut self) -> Option<Record> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &SampleId> {
        self.0.iter().map(Record::sample_id)
    }
}

impl Deref for RecordCollection {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.0
    }
}

impl From<Vec<Record>> for RecordCollection {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
