//! Book records as returned by the remote catalog.
//!
//! The catalog wraps every field in a `volumeInfo` object and any of them may be
//! missing. Records keep that optionality; defaults are applied at the render
//! boundary (see [`crate::render::BookCard`]).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A single book as delivered by the catalog API.
///
/// Immutable once fetched. Owned by the pagination state for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "volumeInfo", default, deserialize_with = "lenient")]
    volume_info: Option<VolumeInfo>,
}

/// Bibliographic fields of a catalog record.
///
/// Each field is read on its own: a value of the wrong type becomes `None`
/// without affecting its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    /// Book title.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Author names in catalog order. Non-string entries are skipped.
    #[serde(default, deserialize_with = "lenient_authors")]
    pub authors: Option<Vec<String>>,
    /// Publisher name.
    #[serde(default, deserialize_with = "lenient")]
    pub publisher: Option<String>,
    /// Publication date as sent by the catalog (free-form).
    #[serde(default, deserialize_with = "lenient")]
    pub published_date: Option<String>,
    /// External page for the book.
    #[serde(default, deserialize_with = "lenient")]
    pub info_link: Option<String>,
    /// Cover images.
    #[serde(default, deserialize_with = "lenient")]
    pub image_links: Option<ImageLinks>,
}

/// Cover image links. Only the thumbnail is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageLinks {
    /// Small cover image URL.
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

/// Deserialize `T`, or `None` when the value has some other shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Author list keeping only its string entries; `None` if it is not a list.
fn lenient_authors<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }))
}

impl BookRecord {
    /// Build a record from already-extracted volume info.
    pub fn new(volume_info: VolumeInfo) -> Self {
        Self {
            volume_info: Some(volume_info),
        }
    }

    /// Build a record from a raw JSON element of the catalog's result array.
    ///
    /// Elements that are not objects become an empty record instead of failing
    /// the whole page. Inside an object every field defaults on its own.
    pub fn from_json(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Title, if the catalog sent one.
    pub fn title(&self) -> Option<&str> {
        self.info().and_then(|v| v.title.as_deref())
    }

    /// Author names in catalog order. Empty if absent.
    pub fn authors(&self) -> &[String] {
        self.info()
            .and_then(|v| v.authors.as_deref())
            .unwrap_or(&[])
    }

    /// First listed author, used as the author sort key.
    pub fn first_author(&self) -> Option<&str> {
        self.authors().first().map(String::as_str)
    }

    /// Authors joined with `", "`. Empty string when there are none.
    pub fn joined_authors(&self) -> String {
        self.authors().join(", ")
    }

    /// Publisher, if present.
    pub fn publisher(&self) -> Option<&str> {
        self.info().and_then(|v| v.publisher.as_deref())
    }

    /// Publication date, if present.
    pub fn published_date(&self) -> Option<&str> {
        self.info().and_then(|v| v.published_date.as_deref())
    }

    /// External info link, if present.
    pub fn info_link(&self) -> Option<&str> {
        self.info().and_then(|v| v.info_link.as_deref())
    }

    /// Cover thumbnail URL, if present.
    pub fn thumbnail(&self) -> Option<&str> {
        self.info()
            .and_then(|v| v.image_links.as_ref())
            .and_then(|links| links.thumbnail.as_deref())
    }

    fn info(&self) -> Option<&VolumeInfo> {
        self.volume_info.as_ref()
    }
}

/// Convenience constructor for tests and benchmarks.
///
/// Builds a record with the given title and authors and no other fields.
pub fn book(title: Option<&str>, authors: &[&str]) -> BookRecord {
    BookRecord::new(VolumeInfo {
        title: title.map(str::to_string),
        authors: if authors.is_empty() {
            None
        } else {
            Some(authors.iter().map(|a| a.to_string()).collect())
        },
        ..VolumeInfo::default()
    })
}
