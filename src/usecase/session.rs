use crate::config::EditorConfig;
use crate::domain::entities::dataset::{
    is_page_size_choice, Dataset, DatasetMeta, PageQuery, PageResult, SortState,
};
use crate::domain::entities::edit::{EditError, EditOutcome, ModifiedSet};
use crate::domain::entities::record::{BookField, RowId};
use crate::domain::entities::store::RowStore;
use crate::usecase::ports::source::{ExportError, IngestError, RecordSource};
use crate::usecase::services::{edit_service, export_service, import_service, query_service};

/// All state of one editing session: the dataset baseline, the working copy,
/// the modified set and the view parameters.
#[derive(Debug, Clone)]
pub struct EditorSession {
    meta: Option<DatasetMeta>,
    store: RowStore,
    modified: ModifiedSet,
    global_filter: String,
    sort: SortState,
    page: usize,
    page_size: usize,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            meta: None,
            store: RowStore::default(),
            modified: ModifiedSet::new(),
            global_filter: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size: config.page_size,
        }
    }

    /// Replaces the dataset wholesale. Filter, sort and page size carry over.
    pub fn load(&mut self, dataset: Dataset) {
        let Dataset { meta, records } = dataset;
        tracing::info!(rows = meta.row_count, source = %meta.label(), "dataset loaded");
        self.store = RowStore::from_records(records);
        self.modified.clear();
        self.meta = Some(meta);
        self.page = 1;
    }

    /// Reads `source` and loads it; on failure the session is left as it was.
    pub fn ingest(
        &mut self,
        source: &mut dyn RecordSource,
        on_progress: impl FnMut(usize),
    ) -> Result<(), IngestError> {
        let dataset = import_service::ingest(source, on_progress)?;
        self.load(dataset);
        Ok(())
    }

    pub fn apply_edit(
        &mut self,
        row_id: RowId,
        field: BookField,
        value: String,
    ) -> Result<EditOutcome, EditError> {
        edit_service::apply_edit(&mut self.store, &mut self.modified, row_id, field, value)
            .inspect_err(|err| tracing::error!("edit rejected: {err}"))
    }

    #[cfg(test)]
    pub fn apply_named_edit(
        &mut self,
        row_id: RowId,
        field_name: &str,
        value: String,
    ) -> Result<EditOutcome, EditError> {
        edit_service::apply_named_edit(&mut self.store, &mut self.modified, row_id, field_name, value)
            .inspect_err(|err| tracing::error!("edit rejected: {err}"))
    }

    pub fn reset(&mut self) {
        edit_service::reset(&mut self.store, &mut self.modified);
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.global_filter = filter.into();
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, field: BookField) {
        self.sort.toggle(field);
        tracing::debug!(sort = ?self.sort.spec(), "sort changed");
    }

    /// Accepts only the fixed page size choices; returns whether the size changed.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !is_page_size_choice(page_size) {
            tracing::warn!(page_size, "rejected page size outside the fixed choices");
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    /// Sets the page as given; the navigation helpers below clamp.
    #[cfg(test)]
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.page_count());
    }

    pub fn last_page(&mut self) {
        self.page = self.page_count();
    }

    pub fn query(&self) -> PageQuery {
        PageQuery {
            global_filter: self.global_filter.clone(),
            sort: self.sort.spec(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn current_page(&self) -> PageResult {
        query_service::query_page(&self.store, &self.query())
    }

    pub fn page_count(&self) -> usize {
        let filtered = query_service::filter_rows(self.store.working_rows().collect(), &self.global_filter);
        query_service::page_count(filtered.len(), self.page_size)
    }

    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        export_service::export_csv(&self.store)
    }

    pub fn meta(&self) -> Option<&DatasetMeta> {
        self.meta.as_ref()
    }

    #[cfg(test)]
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn modified(&self) -> &ModifiedSet {
        &self.modified
    }

    pub fn is_modified(&self, row_id: RowId) -> bool {
        self.modified.contains(row_id)
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    #[cfg(test)]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
