use chrono::{DateTime, Local};

use crate::domain::entities::record::{BookField, BookRecord};

pub const PAGE_SIZE_CHOICES: [usize; 4] = [25, 50, 100, 250];
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Where the current dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    File(String),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetMeta {
    pub origin: DatasetOrigin,
    pub row_count: usize,
    pub loaded_at: DateTime<Local>,
}

impl DatasetMeta {
    pub fn label(&self) -> String {
        match &self.origin {
            DatasetOrigin::File(name) => name.clone(),
            DatasetOrigin::Sample => "sample data".to_string(),
        }
    }
}

/// Records as ingested, in file order, with ids `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub meta: DatasetMeta,
    pub records: Vec<BookRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: BookField,
    pub direction: SortDirection,
}

/// Active sort, cycled by repeatedly selecting a column header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    spec: Option<SortSpec>,
}

impl SortState {
    pub fn spec(&self) -> Option<SortSpec> {
        self.spec
    }

    /// Direction shown for `field`, if it is the active sort key.
    pub fn direction_for(&self, field: BookField) -> Option<SortDirection> {
        self.spec
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    }

    /// Same key cycles asc -> desc -> none; a different key starts at asc.
    pub fn toggle(&mut self, field: BookField) {
        self.spec = match self.spec {
            Some(SortSpec {
                field: current,
                direction: SortDirection::Asc,
            }) if current == field => Some(SortSpec {
                field,
                direction: SortDirection::Desc,
            }),
            Some(SortSpec {
                field: current,
                direction: SortDirection::Desc,
            }) if current == field => None,
            _ => Some(SortSpec {
                field,
                direction: SortDirection::Asc,
            }),
        };
    }
}

/// Filter, sort and page parameters that derive the visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub global_filter: String,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<BookRecord>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl PageResult {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

pub fn is_page_size_choice(size: usize) -> bool {
    PAGE_SIZE_CHOICES.contains(&size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_toggle_cycles_asc_desc_none() {
        let mut sort = SortState::default();

        sort.toggle(BookField::Title);
        assert_eq!(sort.direction_for(BookField::Title), Some(SortDirection::Asc));
        sort.toggle(BookField::Title);
        assert_eq!(sort.direction_for(BookField::Title), Some(SortDirection::Desc));
        sort.toggle(BookField::Title);
        assert_eq!(sort.spec(), None);
        sort.toggle(BookField::Title);
        assert_eq!(sort.direction_for(BookField::Title), Some(SortDirection::Asc));
    }

    #[test]
    fn different_key_starts_ascending() {
        let mut sort = SortState::default();
        sort.toggle(BookField::Title);
        sort.toggle(BookField::Title);

        sort.toggle(BookField::Author);

        assert_eq!(
            sort.spec(),
            Some(SortSpec {
                field: BookField::Author,
                direction: SortDirection::Asc,
            })
        );
        assert_eq!(sort.direction_for(BookField::Title), None);
    }

    #[test]
    fn page_result_bounds() {
        let result = PageResult {
            rows: Vec::new(),
            page: 1,
            page_count: 1,
            total_rows: 0,
        };
        assert!(!result.has_previous());
        assert!(!result.has_next());
    }
}
