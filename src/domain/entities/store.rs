use std::collections::BTreeMap;

use crate::domain::entities::record::{BookRecord, RowId};

/// The original snapshot and the working copy, keyed by row id.
///
/// Ids are assigned sequentially at ingestion, so iterating either map in key
/// order reproduces file order.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    original: BTreeMap<RowId, BookRecord>,
    working: BTreeMap<RowId, BookRecord>,
}

impl RowStore {
    pub fn from_records(records: Vec<BookRecord>) -> Self {
        let original: BTreeMap<RowId, BookRecord> = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        let working = original.clone();
        Self { original, working }
    }

    pub fn original(&self, id: RowId) -> Option<&BookRecord> {
        self.original.get(&id)
    }

    pub fn working(&self, id: RowId) -> Option<&BookRecord> {
        self.working.get(&id)
    }

    pub fn working_mut(&mut self, id: RowId) -> Option<&mut BookRecord> {
        self.working.get_mut(&id)
    }

    /// Working rows in ingestion order.
    pub fn working_rows(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.working.values()
    }

    #[cfg(test)]
    pub fn original_rows(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.original.values()
    }

    /// Replaces the working copy with a fresh clone of the original snapshot.
    pub fn reset_working(&mut self) {
        self.working = self.original.clone();
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}
