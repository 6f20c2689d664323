//! Book cards: a record with every display default applied.

use crate::model::BookRecord;

/// Cover shown when a record has no thumbnail or its thumbnail fails to load.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150x200?text=No+Cover";

/// Link target for records without an info link. Activating it does nothing.
pub const NO_LINK: &str = "#";

/// Title shown when the record has none.
pub const UNTITLED: &str = "Untitled Book";
/// Shown for missing authors, publisher or date.
pub const UNKNOWN: &str = "Unknown";

/// Cover image source of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverImage {
    /// The record's own thumbnail.
    Remote(String),
    /// The fixed placeholder image.
    Placeholder,
}

impl CoverImage {
    /// Use the thumbnail if it could ever load; otherwise the placeholder.
    ///
    /// Only absolute http(s) URLs are loadable.
    pub fn from_thumbnail(thumbnail: Option<&str>) -> Self {
        let loadable = non_empty(thumbnail).filter(|raw| {
            reqwest::Url::parse(raw)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false)
        });
        match loadable {
            Some(url) => CoverImage::Remote(url.to_string()),
            None => CoverImage::Placeholder,
        }
    }

    /// URL to display for the cover.
    pub fn url(&self) -> &str {
        match self {
            CoverImage::Remote(url) => url,
            CoverImage::Placeholder => PLACEHOLDER_COVER_URL,
        }
    }
}

/// Everything a card displays for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    /// Info link, or `#` when there is none.
    pub link: String,
    /// Cover image.
    pub cover: CoverImage,
    /// Title line.
    pub title: String,
    /// Authors joined with `", "`.
    pub authors: String,
    /// Publisher.
    pub publisher: String,
    /// Publication date.
    pub published_date: String,
}

impl BookCard {
    /// Build a card, substituting defaults for missing or empty fields.
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            link: non_empty(record.info_link()).unwrap_or(NO_LINK).to_string(),
            cover: CoverImage::from_thumbnail(record.thumbnail()),
            title: non_empty(record.title()).unwrap_or(UNTITLED).to_string(),
            authors: non_empty(Some(record.joined_authors().as_str()))
                .unwrap_or(UNKNOWN)
                .to_string(),
            publisher: non_empty(record.publisher()).unwrap_or(UNKNOWN).to_string(),
            published_date: non_empty(record.published_date())
                .unwrap_or(UNKNOWN)
                .to_string(),
        }
    }

    /// Whether activating the card leads anywhere.
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK
    }

    /// Detail lines in display order, with their labels.
    pub fn detail_lines(&self) -> [String; 3] {
        [
            format!("By: {}", self.authors),
            format!("Publisher: {}", self.publisher),
            format!("Published: {}", self.published_date),
        ]
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImageLinks, VolumeInfo};

    fn full_record() -> BookRecord {
        BookRecord::new(VolumeInfo {
            title: Some("The Hobbit".to_string()),
            authors: Some(vec!["J.R.R. Tolkien".to_string()]),
            publisher: Some("Allen & Unwin".to_string()),
            published_date: Some("1937".to_string()),
            info_link: Some("https://books.example/hobbit".to_string()),
            image_links: Some(ImageLinks {
                thumbnail: Some("https://img.example/hobbit.jpg".to_string()),
            }),
        })
    }

    #[test]
    fn card_uses_record_fields() {
        let card = BookCard::from_record(&full_record());
        assert_eq!(card.title, "The Hobbit");
        assert_eq!(card.authors, "J.R.R. Tolkien");
        assert_eq!(card.publisher, "Allen & Unwin");
        assert_eq!(card.published_date, "1937");
        assert_eq!(card.link, "https://books.example/hobbit");
        assert_eq!(card.cover.url(), "https://img.example/hobbit.jpg");
        assert!(card.has_link());
    }

    #[test]
    fn card_defaults_for_empty_record() {
        let card = BookCard::from_record(&BookRecord::default());
        assert_eq!(card.title, "Untitled Book");
        assert_eq!(card.authors, "Unknown");
        assert_eq!(card.publisher, "Unknown");
        assert_eq!(card.published_date, "Unknown");
        assert_eq!(card.link, "#");
        assert_eq!(card.cover, CoverImage::Placeholder);
        assert_eq!(card.cover.url(), PLACEHOLDER_COVER_URL);
        assert!(!card.has_link());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let record = BookRecord::new(VolumeInfo {
            title: Some(String::new()),
            authors: Some(vec![]),
            info_link: Some(String::new()),
            ..VolumeInfo::default()
        });
        let card = BookCard::from_record(&record);
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.authors, UNKNOWN);
        assert_eq!(card.link, NO_LINK);
    }

    #[test]
    fn unloadable_thumbnail_falls_back_to_placeholder() {
        for raw in ["not a url", "/relative/cover.jpg", "ftp://img.example/a.jpg"] {
            assert_eq!(
                CoverImage::from_thumbnail(Some(raw)),
                CoverImage::Placeholder,
                "{raw}"
            );
        }
        assert_eq!(
            CoverImage::from_thumbnail(Some("http://img.example/a.jpg")).url(),
            "http://img.example/a.jpg"
        );
    }

    #[test]
    fn detail_lines_are_labelled() {
        let card = BookCard::from_record(&full_record());
        assert_eq!(
            card.detail_lines(),
            [
                "By: J.R.R. Tolkien".to_string(),
                "Publisher: Allen & Unwin".to_string(),
                "Published: 1937".to_string(),
            ]
        );
    }
}
