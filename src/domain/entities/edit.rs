use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::entities::record::{BookField, BookRecord, RowId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("row {0} is not loaded")]
    UnknownRow(RowId),
    #[error("unknown column: {0}")]
    UnknownField(String),
}

/// Result of applying a single cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The row now differs from its original values.
    Modified,
    /// The row matches its original values again after having differed.
    Reverted,
    /// Membership in the modified set did not change and the row is clean.
    Unchanged,
}

/// Whether any of the five fields differs between the original and the working row.
///
/// Comparison is exact; no trimming or case folding.
pub fn row_differs(original: &BookRecord, working: &BookRecord) -> bool {
    BookField::ALL
        .into_iter()
        .any(|field| original.get(field) != working.get(field))
}

/// Ids of rows whose working values differ from the original snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifiedSet {
    ids: BTreeSet<RowId>,
}

impl ModifiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the comparison result for `id` and reports how membership moved.
    pub fn track(&mut self, id: RowId, differs: bool) -> EditOutcome {
        if differs {
            self.ids.insert(id);
            EditOutcome::Modified
        } else if self.ids.remove(&id) {
            EditOutcome::Reverted
        } else {
            EditOutcome::Unchanged
        }
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.ids.iter().copied()
    }
}
