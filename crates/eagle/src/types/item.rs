//! Item-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A local file to import into Eagle.
///
/// Used directly as one entry of a batch import, and as the field set of a
/// single import via [`ItemActions::add_from_path()`](crate::actions::ItemActions::add_from_path).
/// In a batch, fields that are not set are left out of the entry.
///
/// # Example
///
/// ```
/// use eagle::PathItem;
///
/// let item = PathItem::new("/Users/me/Desktop/shot.png", "shot")
///     .website("https://example.com")
///     .tags(["screenshot", "ui"])
///     .annotation("login page");
/// assert_eq!(item.tags.as_deref(), Some(&["screenshot".to_string(), "ui".to_string()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Local path of the file.
    pub path: String,
    /// Name to give the item.
    pub name: String,
    /// Source web page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Tags for the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl PathItem {
    /// Create an item with only the required fields.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            website: None,
            tags: None,
            annotation: None,
        }
    }

    /// Set the source web page.
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Set the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the annotation.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// A remote image to download into Eagle.
///
/// Used directly as one entry of a batch import, and as the field set of a
/// single import via [`ItemActions::add_from_url()`](crate::actions::ItemActions::add_from_url).
/// In a batch, fields that are not set are left out of the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItem {
    /// URL of the image. `http`, `https` and `data:` URLs are accepted by Eagle.
    pub url: String,
    /// Name to give the item.
    pub name: String,
    /// Source web page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Tags for the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Creation time to record, in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<i64>,
    /// Extra HTTP headers Eagle should send when downloading, e.g. `referer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl UrlItem {
    /// Create an item with only the required fields.
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            website: None,
            tags: None,
            modification_time: None,
            headers: None,
        }
    }

    /// Set the source web page.
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Set the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the recorded creation time (milliseconds since the epoch).
    pub fn modification_time(mut self, millis: i64) -> Self {
        self.modification_time = Some(millis);
        self
    }

    /// Add a download header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// A partial update of an item's properties.
///
/// Fields left as `None` are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
    /// Replacement annotation.
    pub annotation: Option<String>,
    /// Replacement source URL.
    pub url: Option<String>,
    /// Rating, 0 to 5.
    pub star: Option<u8>,
}

impl ItemUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the annotation.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Replace the source URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the rating.
    pub fn star(mut self, star: u8) -> Self {
        self.star = Some(star);
        self
    }
}
