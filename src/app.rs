use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::{default_export_dir, EditorConfig};
use crate::domain::entities::dataset::PAGE_SIZE_CHOICES;
use crate::domain::entities::record::BookField;
use crate::infra::export::csv::write_export_file;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::ui::view::{
    cell_style, progress_label, root_container_style, row_style, sort_indicator,
    table_container_style, table_header_cell_style, StatusSummary,
};
use crate::usecase::services::import_service::ImportService;

#[derive(Debug, Clone)]
enum ImportJob {
    File(PathBuf),
    Sample,
}

impl ImportJob {
    fn describe(&self) -> String {
        match self {
            ImportJob::File(path) => format!("Importing {}", path.display()),
            ImportJob::Sample => "Generating sample data".to_string(),
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(EditorConfig::from_env);
    let AppState {
        mut session,
        mut busy,
        mut progress_rows,
        mut status,
    } = AppState::new(&config);

    let sample_rows = config.sample_rows;
    let mut start_import = move |job: ImportJob| {
        if busy() {
            return;
        }
        busy.set(true);
        progress_rows.set(0);
        status.set(job.describe());

        spawn(async move {
            let processed = Arc::new(AtomicUsize::new(0));
            let counter = processed.clone();
            let watched = processed.clone();

            let result = run_blocking(
                move || {
                    let service = ImportService::new(sample_rows);
                    let on_progress = |rows: usize| counter.store(rows, Ordering::Relaxed);
                    match job {
                        ImportJob::File(path) => service.import_csv(&path, on_progress),
                        ImportJob::Sample => service.load_sample(on_progress),
                    }
                },
                move || progress_rows.set(watched.load(Ordering::Relaxed)),
            )
            .await;

            match result {
                Ok(Ok(dataset)) => {
                    let rows = dataset.records.len();
                    session.write().load(dataset);
                    status.set(format!("Loaded {rows} rows"));
                }
                Ok(Err(err)) => {
                    tracing::warn!("csv import failed: {err}");
                    status.set(format!("Failed to parse CSV: {err}"));
                }
                Err(err) => {
                    tracing::error!("import task failed: {err:#}");
                    status.set(format!("Import failed: {err:#}"));
                }
            }
            progress_rows.set(processed.load(Ordering::Relaxed));
            busy.set(false);
        });
    };

    let export_file_name = config.export_file_name.clone();
    let handle_export = move |_: MouseEvent| {
        let bytes = match session.read().export_csv() {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!("export failed: {err}");
                status.set(format!("Export failed: {err}"));
                return;
            }
        };

        let mut dialog = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(&export_file_name);
        if let Some(dir) = default_export_dir() {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            status.set("Export cancelled".to_string());
            return;
        };

        match write_export_file(&path, &bytes) {
            Ok(()) => status.set(format!("Saved {}", path.display())),
            Err(err) => {
                tracing::error!("export failed: {err:#}");
                status.set(format!("Export failed: {err:#}"));
            }
        }
    };

    let (page, summary, sort, filter, page_size, has_rows, has_edits, modified_flags) = {
        let snapshot = session.read();
        let page = snapshot.current_page();
        let summary = StatusSummary::new(&snapshot, &page);
        let modified_flags: Vec<bool> = page
            .rows
            .iter()
            .map(|row| snapshot.is_modified(row.id))
            .collect();
        (
            page,
            summary,
            snapshot.sort(),
            snapshot.global_filter().to_string(),
            snapshot.page_size(),
            !snapshot.is_empty(),
            !snapshot.modified().is_empty(),
            modified_flags,
        )
    };
    let has_previous = page.has_previous();
    let has_next = page.has_next();
    let page_label = summary.page_label();
    let progress = progress_label(progress_rows());

    rsx! {
        div { style: root_container_style(),
            header {
                h1 { "CSV Book Editor" }

                div { style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(path) = FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .pick_file() else {
                                status.set("Import cancelled".to_string());
                                return;
                            };
                            start_import(ImportJob::File(path));
                        },
                        "Upload CSV"
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| start_import(ImportJob::Sample),
                        "Load Sample Data"
                    }
                    button {
                        disabled: busy() || !has_edits,
                        onclick: move |_| {
                            session.write().reset();
                            status.set("All edits reset".to_string());
                        },
                        "Reset All Edits"
                    }
                    button {
                        disabled: busy() || !has_rows,
                        onclick: handle_export,
                        "Download CSV"
                    }
                    span { "{status}" }
                }

                div { style: "display: flex; gap: 16px; padding: 8px 0;",
                    div { "Rows loaded: " strong { "{summary.rows_loaded}" } }
                    div { "Filtered rows: " strong { "{summary.filtered_rows}" } }
                    div { "Page: " strong { "{page_label}" } }
                    div { "Modified rows: " strong { "{summary.modified_rows}" } }
                    if let Some(label) = summary.loaded_label.clone() {
                        div { "Source: {label}" }
                    }
                }

                div { style: "display: flex; gap: 16px; align-items: center; padding-bottom: 8px;",
                    input {
                        placeholder: "Global filter",
                        value: "{filter}",
                        oninput: move |event| session.write().set_filter(event.value()),
                    }
                    label {
                        "Page size: "
                        select {
                            value: "{page_size}",
                            onchange: move |event| {
                                if let Ok(size) = event.value().parse::<usize>() {
                                    session.write().set_page_size(size);
                                }
                            },
                            for size in PAGE_SIZE_CHOICES {
                                option { value: "{size}", selected: size == page_size, "{size}" }
                            }
                        }
                    }
                }

                if busy() {
                    div { "{progress}" }
                }
            }

            div { style: table_container_style(),
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for field in BookField::ALL {
                                {
                                    let heading = format!("{} {}", field.label(), sort_indicator(sort.direction_for(field)));
                                    rsx!(
                                        th {
                                            key: "{field}",
                                            style: table_header_cell_style(),
                                            onclick: move |_| session.write().toggle_sort(field),
                                            "{heading}"
                                        }
                                    )
                                }
                            }
                        }
                    }
                    tbody {
                        {page.rows.iter().zip(modified_flags).map(|(row, modified)| {
                            let row = row.clone();
                            let row_id = row.id;
                            rsx!(
                                tr { key: "{row_id}", style: row_style(modified),
                                    {BookField::ALL.into_iter().map(|field| {
                                        let value = row.get(field).to_string();
                                        rsx!(
                                            td { key: "{field}", style: cell_style(modified),
                                                input {
                                                    style: "width: 100%; box-sizing: border-box; border: none; background: transparent;",
                                                    value: value,
                                                    oninput: move |event| {
                                                        if let Err(err) = session.write().apply_edit(row_id, field, event.value()) {
                                                            status.set(format!("Edit rejected: {err}"));
                                                        }
                                                    },
                                                }
                                            }
                                        )
                                    })}
                                }
                            )
                        })}
                    }
                }
            }

            footer { style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
                button {
                    disabled: !has_previous,
                    onclick: move |_| session.write().first_page(),
                    "First"
                }
                button {
                    disabled: !has_previous,
                    onclick: move |_| session.write().previous_page(),
                    "Prev"
                }
                span { "Page {page_label}" }
                button {
                    disabled: !has_next,
                    onclick: move |_| session.write().next_page(),
                    "Next"
                }
                button {
                    disabled: !has_next,
                    onclick: move |_| session.write().last_page(),
                    "Last"
                }
            }
        }
    }
}
