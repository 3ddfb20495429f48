use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::usecase::ports::source::{ExportError, RecordSink};

/// Writes the book schema as CSV with standard quoting.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(inner);
        Self { writer }
    }

    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer
            .into_inner()
            .map_err(|err| ExportError::Write(err.to_string()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_header(&mut self, headers: &[&str; 5]) -> Result<(), ExportError> {
        self.writer
            .write_record(headers)
            .map_err(|err| ExportError::Write(err.to_string()))
    }

    fn write_row(&mut self, values: &[String; 5]) -> Result<(), ExportError> {
        self.writer
            .write_record(values)
            .map_err(|err| ExportError::Write(err.to_string()))
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Saves exported CSV bytes, creating the parent directory if needed.
pub fn write_export_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export dir: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write csv: {}", path.display()))
}
