use std::path::Path;

use chrono::Local;

use crate::domain::entities::dataset::{Dataset, DatasetMeta};
use crate::domain::entities::record::{BookRecord, RowId};
use crate::infra::import::csv::CsvFileSource;
use crate::infra::sample::SampleSource;
use crate::usecase::ports::source::{IngestError, RecordSource};

pub struct ImportService {
    sample_rows: usize,
}

impl ImportService {
    pub fn new(sample_rows: usize) -> Self {
        Self { sample_rows }
    }

    pub fn import_csv(
        &self,
        path: &Path,
        on_progress: impl FnMut(usize),
    ) -> Result<Dataset, IngestError> {
        ingest(&mut CsvFileSource::new(path), on_progress)
    }

    pub fn load_sample(&self, on_progress: impl FnMut(usize)) -> Result<Dataset, IngestError> {
        ingest(&mut SampleSource::new(self.sample_rows), on_progress)
    }
}

/// Reads every row from `source`, numbering them from 1 in source order.
///
/// `on_progress` receives the running row count after each row. Nothing is
/// returned unless the whole source reads cleanly.
pub fn ingest(
    source: &mut dyn RecordSource,
    mut on_progress: impl FnMut(usize),
) -> Result<Dataset, IngestError> {
    let origin = source.origin();
    let mut records = Vec::new();

    let result = source.read_rows(&mut |values| {
        let id = RowId(records.len() as u64 + 1);
        records.push(BookRecord::new(id, values));
        on_progress(records.len());
    });

    if let Err(err) = result {
        tracing::warn!(rows_read = records.len(), "ingestion failed: {err}");
        return Err(err);
    }

    tracing::info!(rows = records.len(), ?origin, "ingestion complete");
    Ok(Dataset {
        meta: DatasetMeta {
            origin,
            row_count: records.len(),
            loaded_at: Local::now(),
        },
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::DatasetOrigin;
    use crate::domain::entities::record::BookField;
    use crate::infra::import::csv::CsvReaderSource;

    #[test]
    fn assigns_sequential_ids_in_file_order() {
        let text = "Title,Author,Genre,PublishedYear,ISBN\nA,X,Rock,2000,111\nB,Y,Jazz,1990,222\nC,Z,Folk,1980,333\n";
        let mut source = CsvReaderSource::new(text.as_bytes(), DatasetOrigin::Sample);

        let dataset = ingest(&mut source, |_| {}).expect("ingest should succeed");

        let ids: Vec<_> = dataset.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RowId(1), RowId(2), RowId(3)]);
        assert_eq!(dataset.records[1].get(BookField::Title), "B");
        assert_eq!(dataset.meta.row_count, 3);
    }

    #[test]
    fn progress_is_strictly_increasing() {
        let mut seen = Vec::new();
        let dataset = ingest(&mut SampleSource::seeded(25, 3), |count| seen.push(count))
            .expect("sample ingest should succeed");

        assert_eq!(seen, (1..=25).collect::<Vec<_>>());
        assert_eq!(dataset.meta.origin, DatasetOrigin::Sample);
    }

    #[test]
    fn malformed_input_returns_error() {
        let text = "Title,Author,Genre,PublishedYear,ISBN\nA,X,Rock,2000,111\nB,Y\n";
        let mut source = CsvReaderSource::new(text.as_bytes(), DatasetOrigin::Sample);
        let mut last_progress = 0;

        let err = ingest(&mut source, |count| last_progress = count).expect_err("ragged row");

        assert!(matches!(err, IngestError::Malformed { .. }));
        assert_eq!(last_progress, 1, "rows before the bad one are still reported");
    }

    #[test]
    fn import_service_reads_csv_file() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let csv_path = temp_dir.path().join("books.csv");
        std::fs::write(&csv_path, "Title,Author,Genre,PublishedYear,ISBN\nA,X,Rock,2000,111\n")
            .expect("should write csv fixture");

        let dataset = ImportService::new(10)
            .import_csv(&csv_path, |_| {})
            .expect("import should succeed");

        assert_eq!(dataset.meta.origin, DatasetOrigin::File("books.csv".to_string()));
        assert_eq!(dataset.records.len(), 1);
    }
}
