use crate::domain::entities::edit::{row_differs, EditError, EditOutcome, ModifiedSet};
use crate::domain::entities::record::{BookField, RowId};
use crate::domain::entities::store::RowStore;

/// Writes `value` into the working copy and re-evaluates the row against its original.
pub fn apply_edit(
    store: &mut RowStore,
    modified: &mut ModifiedSet,
    row_id: RowId,
    field: BookField,
    value: String,
) -> Result<EditOutcome, EditError> {
    store
        .working_mut(row_id)
        .ok_or(EditError::UnknownRow(row_id))?
        .set(field, value);

    let differs = match (store.original(row_id), store.working(row_id)) {
        (Some(original), Some(working)) => row_differs(original, working),
        _ => return Err(EditError::UnknownRow(row_id)),
    };
    let outcome = modified.track(row_id, differs);

    tracing::debug!(%row_id, %field, ?outcome, "cell edited");
    Ok(outcome)
}

/// Same as [`apply_edit`] but takes the column by header name.
#[cfg(test)]
pub fn apply_named_edit(
    store: &mut RowStore,
    modified: &mut ModifiedSet,
    row_id: RowId,
    field_name: &str,
    value: String,
) -> Result<EditOutcome, EditError> {
    let field = field_name.parse::<BookField>()?;
    apply_edit(store, modified, row_id, field, value)
}

/// Discards every edit.
pub fn reset(store: &mut RowStore, modified: &mut ModifiedSet) {
    let discarded = modified.len();
    store.reset_working();
    modified.clear();
    tracing::info!(discarded, "edits reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::BookRecord;

    fn fixture() -> (RowStore, ModifiedSet) {
        let store = RowStore::from_records(vec![
            BookRecord::from_fields(RowId(1), "A", "X", "Rock", "2000", "111"),
            BookRecord::from_fields(RowId(2), "B", "Y", "Jazz", "1990", "222"),
        ]);
        (store, ModifiedSet::new())
    }

    #[test]
    fn editing_to_same_text_keeps_row_clean() {
        let (mut store, mut modified) = fixture();

        let outcome = apply_edit(&mut store, &mut modified, RowId(1), BookField::Title, "A".into())
            .expect("row exists");

        assert_eq!(outcome, EditOutcome::Unchanged);
        assert!(modified.is_empty());
    }

    #[test]
    fn editing_back_to_original_removes_row_from_modified_set() {
        let (mut store, mut modified) = fixture();

        apply_edit(&mut store, &mut modified, RowId(1), BookField::Title, "Z".into())
            .expect("row exists");
        assert!(modified.contains(RowId(1)));

        let outcome = apply_edit(&mut store, &mut modified, RowId(1), BookField::Title, "A".into())
            .expect("row exists");
        assert_eq!(outcome, EditOutcome::Reverted);
        assert!(modified.is_empty());
    }

    #[test]
    fn row_stays_modified_while_any_field_differs() {
        let (mut store, mut modified) = fixture();

        apply_edit(&mut store, &mut modified, RowId(2), BookField::Genre, "Blues".into())
            .expect("row exists");
        apply_edit(&mut store, &mut modified, RowId(2), BookField::Isbn, "999".into())
            .expect("row exists");
        let outcome = apply_edit(&mut store, &mut modified, RowId(2), BookField::Genre, "Jazz".into())
            .expect("row exists");

        assert_eq!(outcome, EditOutcome::Modified);
        assert!(modified.contains(RowId(2)));
    }

    #[test]
    fn unknown_row_is_rejected_without_side_effects() {
        let (mut store, mut modified) = fixture();

        let err = apply_edit(&mut store, &mut modified, RowId(9), BookField::Title, "Q".into())
            .expect_err("row 9 is not loaded");

        assert_eq!(err, EditError::UnknownRow(RowId(9)));
        assert!(modified.is_empty());
    }

    #[test]
    fn unknown_field_name_leaves_working_copy_untouched() {
        let (mut store, mut modified) = fixture();

        let err = apply_named_edit(&mut store, &mut modified, RowId(1), "Publisher", "Q".into())
            .expect_err("not a schema column");

        assert_eq!(err, EditError::UnknownField("Publisher".to_string()));
        assert_eq!(store.working(RowId(1)), store.original(RowId(1)));
    }

    #[test]
    fn reset_clears_edits_and_modified_set() {
        let (mut store, mut modified) = fixture();
        apply_named_edit(&mut store, &mut modified, RowId(1), "Author", "W".into())
            .expect("row exists");

        reset(&mut store, &mut modified);

        assert!(modified.is_empty());
        assert_eq!(store.working(RowId(1)), store.original(RowId(1)));
    }
}
