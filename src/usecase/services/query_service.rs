use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::dataset::{PageQuery, PageResult, SortDirection, SortSpec};
use crate::domain::entities::record::{BookField, BookRecord};
use crate::domain::entities::store::RowStore;

/// Keeps rows where the lowercased filter occurs in any field.
///
/// A blank (or whitespace-only) filter keeps everything. The filter text is
/// matched as typed, surrounding spaces included.
pub fn filter_rows<'a>(rows: Vec<&'a BookRecord>, filter: &str) -> Vec<&'a BookRecord> {
    if filter.trim().is_empty() {
        return rows;
    }
    let needle = filter.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            BookField::ALL
                .into_iter()
                .any(|field| row.get(field).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort; tied rows keep their incoming order in both directions.
pub fn sort_rows(rows: &mut [&BookRecord], sort: SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = compare_field(sort.field, a.get(sort.field), b.get(sort.field));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

pub fn compare_field(field: BookField, a: &str, b: &str) -> Ordering {
    match field {
        BookField::PublishedYear => parse_year(a).cmp(&parse_year(b)),
        _ => collate(a, b),
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; the rest is ignored.
///
/// Digit runs too long for `i64` saturate. `None` sorts below every year.
pub fn parse_year(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let saturated = if sign < 0 { i64::MIN } else { i64::MAX };
    Some(
        rest[..digits_len]
            .parse::<i64>()
            .map_or(saturated, |n| n * sign),
    )
}

/// Dictionary ordering in four passes: base letters ignoring case and
/// accents, then accents, then lowercase before uppercase, then code point.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Filter then sort the working copy.
pub fn build_view<'a>(store: &'a RowStore, filter: &str, sort: Option<SortSpec>) -> Vec<&'a BookRecord> {
    let mut rows = filter_rows(store.working_rows().collect(), filter);
    if let Some(sort) = sort {
        sort_rows(&mut rows, sort);
    }
    rows
}

/// Number of pages for `total` rows, never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Rows of 1-based `page`; out-of-range pages give an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|idx| idx.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

pub fn query_page(store: &RowStore, query: &PageQuery) -> PageResult {
    let view = build_view(store, &query.global_filter, query.sort);
    let total_rows = view.len();
    let rows = page_slice(&view, query.page, query.page_size)
        .iter()
        .map(|row| (*row).clone())
        .collect();

    PageResult {
        rows,
        page: query.page,
        page_count: page_count(total_rows, query.page_size),
        total_rows,
    }
}
