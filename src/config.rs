use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::dataset::{is_page_size_choice, DEFAULT_PAGE_SIZE};
use crate::infra::sample::DEFAULT_SAMPLE_ROWS;

pub const DEFAULT_EXPORT_NAME: &str = "books-edited.csv";

const PAGE_SIZE_ENV: &str = "BOOK_EDITOR_PAGE_SIZE";
const SAMPLE_ROWS_ENV: &str = "BOOK_EDITOR_SAMPLE_ROWS";
const EXPORT_NAME_ENV: &str = "BOOK_EDITOR_EXPORT_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub page_size: usize,
    pub sample_rows: usize,
    pub export_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            export_file_name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`; bad values are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if is_page_size_choice(size) => config.page_size = size,
                _ => tracing::warn!("ignoring {PAGE_SIZE_ENV}={raw}: not one of the page size choices"),
            }
        }

        if let Some(raw) = lookup(SAMPLE_ROWS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(rows) => config.sample_rows = rows,
                Err(err) => tracing::warn!("ignoring {SAMPLE_ROWS_ENV}={raw}: {err}"),
            }
        }

        if let Some(raw) = lookup(EXPORT_NAME_ENV) {
            let name = raw.trim();
            if name.is_empty() {
                tracing::warn!("ignoring empty {EXPORT_NAME_ENV}");
            } else {
                config.export_file_name = name.to_string();
            }
        }

        config
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "book-editor")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

/// Directory the save dialog opens in: the user's documents, else the data dir.
pub fn default_export_dir() -> Option<PathBuf> {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .or_else(|| project_dirs().ok().map(|dirs| dirs.data_local_dir().to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = EditorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.page_size, 100);
        assert_eq!(config.sample_rows, 10_000);
        assert_eq!(config.export_file_name, "books-edited.csv");
    }

    #[test]
    fn valid_overrides_apply() {
        let config = EditorConfig::from_lookup(lookup(&[
            (PAGE_SIZE_ENV, "250"),
            (SAMPLE_ROWS_ENV, " 500 "),
            (EXPORT_NAME_ENV, "out.csv"),
        ]));
        assert_eq!(config.page_size, 250);
        assert_eq!(config.sample_rows, 500);
        assert_eq!(config.export_file_name, "out.csv");
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        let config = EditorConfig::from_lookup(lookup(&[
            (PAGE_SIZE_ENV, "30"),
            (SAMPLE_ROWS_ENV, "many"),
            (EXPORT_NAME_ENV, "  "),
        ]));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn ensure_webview_data_dir_creates_webview2_subdir() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");

        let webview_dir =
            ensure_webview_data_dir(temp_dir.path()).expect("webview data dir should be created");

        assert_eq!(webview_dir, temp_dir.path().join("webview2"));
        assert!(webview_dir.is_dir(), "webview2 directory should exist");
    }
}
