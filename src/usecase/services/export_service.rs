use crate::domain::entities::record::{BookField, BookRecord};
use crate::domain::entities::store::RowStore;
use crate::infra::export::csv::CsvSink;
use crate::usecase::ports::source::{ExportError, RecordSink};

/// Writes the header and one line per record. Row ids are not exported.
pub fn export_records<'a>(
    rows: impl IntoIterator<Item = &'a BookRecord>,
    sink: &mut dyn RecordSink,
) -> Result<usize, ExportError> {
    sink.write_header(&BookField::ALL.map(BookField::header))?;
    let mut written = 0;
    for row in rows {
        sink.write_row(row.values())?;
        written += 1;
    }
    sink.finish()?;
    Ok(written)
}

/// Serializes the working copy to CSV bytes.
pub fn export_csv(store: &RowStore) -> Result<Vec<u8>, ExportError> {
    let mut sink = CsvSink::new(Vec::new());
    let written = export_records(store.working_rows(), &mut sink)?;
    let bytes = sink.into_inner()?;
    tracing::info!(rows = written, bytes = bytes.len(), "working copy exported");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::RowId;

    #[test]
    fn exports_working_values_without_ids() {
        let mut store = RowStore::from_records(vec![
            BookRecord::from_fields(RowId(1), "A", "X", "Rock", "2000", "111"),
            BookRecord::from_fields(RowId(2), "B, the sequel", "Y", "Jazz", "1990", "222"),
        ]);
        store
            .working_mut(RowId(1))
            .expect("row 1 should exist")
            .set(BookField::Title, "Z".to_string());

        let text = String::from_utf8(export_csv(&store).expect("export should succeed"))
            .expect("csv should be utf8");

        assert_eq!(
            text,
            "Title,Author,Genre,PublishedYear,ISBN\nZ,X,Rock,2000,111\n\"B, the sequel\",Y,Jazz,1990,222\n"
        );
    }

    #[test]
    fn empty_store_exports_header_only() {
        let text = String::from_utf8(export_csv(&RowStore::default()).expect("export should succeed"))
            .expect("csv should be utf8");

        assert_eq!(text, "Title,Author,Genre,PublishedYear,ISBN\n");
    }
}
