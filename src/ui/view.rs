use crate::domain::entities::dataset::{PageResult, SortDirection};
use crate::usecase::session::EditorSession;

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "",
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; font-family: sans-serif; margin: 0 12px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1 1 auto; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f4f4f4; border: 1px solid #bbb; padding: 6px; cursor: pointer; user-select: none; text-align: left;"
}

pub fn row_style(modified: bool) -> &'static str {
    if modified {
        "background: #fff6d6;"
    } else {
        ""
    }
}

pub fn cell_style(modified: bool) -> &'static str {
    if modified {
        "border: 1px solid #e0b400; padding: 2px;"
    } else {
        "border: 1px solid #bbb; padding: 2px;"
    }
}

/// Numbers shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub rows_loaded: usize,
    pub filtered_rows: usize,
    pub page: usize,
    pub page_count: usize,
    pub modified_rows: usize,
    pub loaded_label: Option<String>,
}

impl StatusSummary {
    pub fn new(session: &EditorSession, page: &PageResult) -> Self {
        Self {
            rows_loaded: session.row_count(),
            filtered_rows: page.total_rows,
            page: page.page,
            page_count: page.page_count,
            modified_rows: session.modified().len(),
            loaded_label: session.meta().map(|meta| {
                format!(
                    "{} at {}",
                    meta.label(),
                    meta.loaded_at.format("%Y-%m-%d %H:%M:%S")
                )
            }),
        }
    }

    pub fn page_label(&self) -> String {
        format!("{}/{}", self.page, self.page_count)
    }
}

pub fn progress_label(rows: usize) -> String {
    format!("Parsing CSV... processed {rows} rows")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::{BookField, RowId};
    use crate::infra::sample::SampleSource;

    #[test]
    fn sort_indicator_matches_direction() {
        assert_eq!(sort_indicator(Some(SortDirection::Asc)), "▲");
        assert_eq!(sort_indicator(Some(SortDirection::Desc)), "▼");
        assert_eq!(sort_indicator(None), "");
    }

    #[test]
    fn sticky_header_styles_include_positioning() {
        let style = table_header_cell_style();
        assert!(style.contains("position: sticky"));
        assert!(style.contains("top: 0"));
    }

    #[test]
    fn table_container_style_allows_scroll() {
        assert!(table_container_style().contains("overflow: auto"));
        assert!(root_container_style().contains("height: 100vh"));
    }

    #[test]
    fn modified_rows_are_highlighted() {
        assert!(row_style(true).contains("background"));
        assert!(row_style(false).is_empty());
        assert_ne!(cell_style(true), cell_style(false));
    }

    #[test]
    fn status_summary_counts_session_state() {
        let mut session = EditorSession::default();
        session
            .ingest(&mut SampleSource::seeded(230, 8), |_| {})
            .expect("sample ingest");
        session
            .apply_edit(RowId(3), BookField::Title, "edited".to_string())
            .expect("row exists");

        let page = session.current_page();
        let summary = StatusSummary::new(&session, &page);

        assert_eq!(summary.rows_loaded, 230);
        assert_eq!(summary.filtered_rows, 230);
        assert_eq!(summary.page_label(), "1/3");
        assert_eq!(summary.modified_rows, 1);
        assert!(summary
            .loaded_label
            .as_deref()
            .is_some_and(|label| label.starts_with("sample data at ")));
    }

    #[test]
    fn progress_label_shows_count() {
        assert_eq!(progress_label(42), "Parsing CSV... processed 42 rows");
    }
}
