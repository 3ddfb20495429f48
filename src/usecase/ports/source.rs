use thiserror::Error;

use crate::domain::entities::dataset::DatasetOrigin;

/// Field values of one ingested row, in `BookField::ALL` order.
pub type RawRow = [String; 5];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("csv header is missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("malformed csv{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Malformed { line: Option<u64>, message: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Write(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Something that yields book rows for ingestion.
pub trait RecordSource {
    fn origin(&self) -> DatasetOrigin;

    /// Pushes every row to `on_row` in source order. Stops at the first malformed row.
    fn read_rows(&mut self, on_row: &mut dyn FnMut(RawRow)) -> Result<(), IngestError>;
}

/// Something that accepts the five-column schema for export.
pub trait RecordSink {
    fn write_header(&mut self, headers: &[&str; 5]) -> Result<(), ExportError>;
    fn write_row(&mut self, values: &[String; 5]) -> Result<(), ExportError>;
    fn finish(&mut self) -> Result<(), ExportError>;
}
