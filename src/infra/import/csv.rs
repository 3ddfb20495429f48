use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::StringRecord;

use crate::domain::entities::dataset::DatasetOrigin;
use crate::domain::entities::record::BookField;
use crate::usecase::ports::source::{IngestError, RawRow, RecordSource};

/// Reads book rows from any CSV byte stream with a header row.
pub struct CsvReaderSource<R> {
    reader: Option<R>,
    origin: DatasetOrigin,
}

impl<R: Read> CsvReaderSource<R> {
    pub fn new(reader: R, origin: DatasetOrigin) -> Self {
        Self {
            reader: Some(reader),
            origin,
        }
    }
}

impl<R: Read> RecordSource for CsvReaderSource<R> {
    fn origin(&self) -> DatasetOrigin {
        self.origin.clone()
    }

    fn read_rows(&mut self, on_row: &mut dyn FnMut(RawRow)) -> Result<(), IngestError> {
        let Some(reader) = self.reader.take() else {
            return Ok(());
        };
        read_book_rows(reader, on_row)
    }
}

/// Reads book rows from a CSV file on disk.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvFileSource {
    fn origin(&self) -> DatasetOrigin {
        let name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("dataset.csv")
            .to_string();
        DatasetOrigin::File(name)
    }

    fn read_rows(&mut self, on_row: &mut dyn FnMut(RawRow)) -> Result<(), IngestError> {
        let file = File::open(&self.path).map_err(|source| IngestError::Open {
            path: self.path.display().to_string(),
            source,
        })?;
        read_book_rows(file, on_row)
    }
}

fn read_book_rows<R: Read>(reader: R, on_row: &mut dyn FnMut(RawRow)) -> Result<(), IngestError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers().map_err(malformed)?.clone();
    let positions = column_positions(&headers)?;

    for record in reader.records() {
        let record = record.map_err(malformed)?;
        on_row(positions.map(|idx| record.get(idx).unwrap_or("").to_string()));
    }

    Ok(())
}

/// Index of each schema column within the header. Extra columns are ignored.
fn column_positions(headers: &StringRecord) -> Result<[usize; 5], IngestError> {
    let mut positions = [0_usize; 5];
    for (slot, field) in positions.iter_mut().zip(BookField::ALL) {
        *slot = headers
            .iter()
            .position(|name| name.trim() == field.header())
            .ok_or(IngestError::MissingColumn(field.header()))?;
    }
    Ok(positions)
}

fn malformed(err: csv::Error) -> IngestError {
    IngestError::Malformed {
        line: err.position().map(|pos| pos.line()),
        message: err.to_string(),
    }
}
