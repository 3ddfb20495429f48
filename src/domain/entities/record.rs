use std::fmt;
use std::str::FromStr;

use crate::domain::entities::edit::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed five-column book schema, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Title,
    Author,
    Genre,
    PublishedYear,
    Isbn,
}

impl BookField {
    pub const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Genre,
        BookField::PublishedYear,
        BookField::Isbn,
    ];

    /// Column name as it appears in a CSV header.
    pub fn header(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Genre => "Genre",
            BookField::PublishedYear => "PublishedYear",
            BookField::Isbn => "ISBN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookField::PublishedYear => "Published Year",
            other => other.header(),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for BookField {
    type Err = EditError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BookField::ALL
            .into_iter()
            .find(|field| field.header() == name)
            .ok_or_else(|| EditError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One book row: a stable identity plus the five text fields.
///
/// `PublishedYear` is kept as text like every other field; numeric meaning is
/// only applied when sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: RowId,
    values: [String; 5],
}

impl BookRecord {
    pub fn new(id: RowId, values: [String; 5]) -> Self {
        Self { id, values }
    }

    #[cfg(test)]
    pub fn from_fields(
        id: RowId,
        title: &str,
        author: &str,
        genre: &str,
        published_year: &str,
        isbn: &str,
    ) -> Self {
        Self::new(
            id,
            [
                title.to_string(),
                author.to_string(),
                genre.to_string(),
                published_year.to_string(),
                isbn.to_string(),
            ],
        )
    }

    pub fn get(&self, field: BookField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: BookField, value: String) {
        self.values[field.index()] = value;
    }

    pub fn values(&self) -> &[String; 5] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_round_trip_through_from_str() {
        for field in BookField::ALL {
            assert_eq!(field.header().parse::<BookField>().ok(), Some(field));
        }
    }

    #[test]
    fn unknown_header_is_rejected() {
        let err = "isbn".parse::<BookField>().expect_err("lowercase isbn is not a column");
        assert_eq!(err, EditError::UnknownField("isbn".to_string()));
    }

    #[test]
    fn published_year_has_spaced_label() {
        assert_eq!(BookField::PublishedYear.label(), "Published Year");
        assert_eq!(BookField::Isbn.label(), "ISBN");
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut record = BookRecord::from_fields(RowId(1), "A", "X", "Rock", "2000", "111");
        record.set(BookField::Genre, "Jazz".to_string());

        assert_eq!(record.get(BookField::Genre), "Jazz");
        assert_eq!(record.get(BookField::Title), "A");
        assert_eq!(record.get(BookField::Isbn), "111");
    }
}
