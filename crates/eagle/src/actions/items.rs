//! Item-related Eagle actions.
//!
//! This module provides operations for importing files and images into
//! Eagle, reading item details, and editing or trashing items.
//!
//! # Example
//!
//! ```no_run
//! use eagle::{EagleClient, ItemFilter, ItemUpdate, UrlItem};
//!
//! # async fn example() -> eagle::Result<()> {
//! let client = EagleClient::new();
//!
//! // Import an image from the web
//! let item = UrlItem::new("https://example.com/cat.jpg", "cat").tags(["animals"]);
//! client.items().add_from_url(&item).await?;
//!
//! // Find recent PNGs tagged "ui"
//! let filter = ItemFilter::new().order_by("-CREATEDATE").ext("png").tag("ui");
//! let items = client.items().list(&filter).await?;
//!
//! // Rate the first one
//! if let Some(id) = items["data"][0]["id"].as_str() {
//!     client.items().update(id, &ItemUpdate::new().star(5)).await?;
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::client::EagleClient;
use crate::error::Result;
use crate::query::ItemFilter;
use crate::request::endpoint;
use crate::types::{ItemUpdate, PathItem, UrlItem};

/// Provides access to item operations.
///
/// Obtained via [`EagleClient::items()`].
#[derive(Debug)]
pub struct ItemActions<'a> {
    pub(crate) client: &'a EagleClient,
}

// Single-item bodies always carry every key; unset ones go out as null.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddFromPathParams<'a> {
    path: &'a str,
    name: &'a str,
    website: Option<&'a str>,
    tags: Option<&'a [String]>,
    annotation: Option<&'a str>,
    folder_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddFromUrlParams<'a> {
    url: &'a str,
    name: &'a str,
    website: Option<&'a str>,
    tags: Option<&'a [String]>,
    modification_time: Option<i64>,
    headers: Option<&'a HashMap<String, String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddBatchParams<'a, T> {
    items: &'a [T],
    folder_id: Option<&'a str>,
}

#[derive(Serialize)]
struct AddBookmarkParams<'a> {
    url: &'a str,
    name: &'a str,
    tags: Option<&'a [String]>,
    base64: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveToTrashParams<'a> {
    item_ids: &'a [&'a str],
}

#[derive(Serialize)]
struct IdParams<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateItemParams<'a> {
    id: &'a str,
    #[serde(flatten)]
    changes: &'a ItemUpdate,
}

impl<'a> AddFromPathParams<'a> {
    fn new(item: &'a PathItem, folder_id: Option<&'a str>) -> Self {
        Self {
            path: &item.path,
            name: &item.name,
            website: item.website.as_deref(),
            tags: item.tags.as_deref(),
            annotation: item.annotation.as_deref(),
            folder_id,
        }
    }
}

impl<'a> From<&'a UrlItem> for AddFromUrlParams<'a> {
    fn from(item: &'a UrlItem) -> Self {
        Self {
            url: &item.url,
            name: &item.name,
            website: item.website.as_deref(),
            tags: item.tags.as_deref(),
            modification_time: item.modification_time,
            headers: item.headers.as_ref(),
        }
    }
}

impl<'a> ItemActions<'a> {
    /// Import a local file.
    ///
    /// Every field is sent; unset ones, including `folder_id`, go out as
    /// `null`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eagle::{EagleClient, PathItem};
    ///
    /// # async fn example() -> eagle::Result<()> {
    /// let client = EagleClient::new();
    /// let item = PathItem::new("/Users/me/Desktop/shot.png", "shot").annotation("draft");
    /// client.items().add_from_path(&item, Some("KBJJSMMVF9WYL")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_from_path(&self, item: &PathItem, folder_id: Option<&str>) -> Result<Value> {
        self.client
            .post(
                endpoint::ITEM_ADD_FROM_PATH,
                &AddFromPathParams::new(item, folder_id),
            )
            .await
    }

    /// Import an image from a URL.
    ///
    /// Every field is sent; unset ones go out as `null`.
    pub async fn add_from_url(&self, item: &UrlItem) -> Result<Value> {
        self.client
            .post(endpoint::ITEM_ADD_FROM_URL, &AddFromUrlParams::from(item))
            .await
    }

    /// Import several local files at once, in order.
    ///
    /// Each entry only carries the fields that are set.
    pub async fn add_from_paths(
        &self,
        items: &[PathItem],
        folder_id: Option<&str>,
    ) -> Result<Value> {
        self.client
            .post(
                endpoint::ITEM_ADD_FROM_PATHS,
                &AddBatchParams { items, folder_id },
            )
            .await
    }

    /// Import several images from URLs at once, in order.
    ///
    /// Each entry only carries the fields that are set.
    pub async fn add_from_urls(&self, items: &[UrlItem], folder_id: Option<&str>) -> Result<Value> {
        self.client
            .post(
                endpoint::ITEM_ADD_FROM_URLS,
                &AddBatchParams { items, folder_id },
            )
            .await
    }

    /// Save a bookmark.
    ///
    /// `base64` is the thumbnail image, inline as base64 data.
    pub async fn add_bookmark(
        &self,
        url: &str,
        name: &str,
        tags: Option<&[String]>,
        base64: &str,
    ) -> Result<Value> {
        self.client
            .post(
                endpoint::ITEM_ADD_BOOKMARK,
                &AddBookmarkParams {
                    url,
                    name,
                    tags,
                    base64,
                },
            )
            .await
    }

    /// Get the properties of an item.
    pub async fn info(&self, id: &str) -> Result<Value> {
        self.client
            .get_with_query(endpoint::ITEM_INFO, &IdParams { id })
            .await
    }

    /// Get the local path of an item's thumbnail.
    pub async fn thumbnail(&self, id: &str) -> Result<Value> {
        self.client
            .get_with_query(endpoint::ITEM_THUMBNAIL, &IdParams { id })
            .await
    }

    /// List items matching a filter.
    ///
    /// See [`ItemFilter`] for how filters map onto the query string.
    pub async fn list(&self, filter: &ItemFilter) -> Result<Value> {
        self.client
            .get_with_query(endpoint::ITEM_LIST, &filter.to_query())
            .await
    }

    /// Move items to the trash.
    pub async fn move_to_trash(&self, item_ids: &[&str]) -> Result<Value> {
        self.client
            .post(
                endpoint::ITEM_MOVE_TO_TRASH,
                &MoveToTrashParams { item_ids },
            )
            .await
    }

    /// Recompute an item's colour palette, e.g. after the file was edited
    /// outside Eagle.
    pub async fn refresh_palette(&self, id: &str) -> Result<Value> {
        self.client
            .post(endpoint::ITEM_REFRESH_PALETTE, &IdParams { id })
            .await
    }

    /// Regenerate an item's thumbnail, e.g. after the file was edited
    /// outside Eagle.
    pub async fn refresh_thumbnail(&self, id: &str) -> Result<Value> {
        self.client
            .post(endpoint::ITEM_REFRESH_THUMBNAIL, &IdParams { id })
            .await
    }

    /// Update an item's tags, annotation, source URL or rating.
    ///
    /// Fields left unset in `changes` are sent as `null`.
    pub async fn update(&self, id: &str, changes: &ItemUpdate) -> Result<Value> {
        self.client
            .post(endpoint::ITEM_UPDATE, &UpdateItemParams { id, changes })
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn add_from_url_sends_explicit_nulls() {
        let item = UrlItem::new("u", "n");
        assert_eq!(
            serde_json::to_value(AddFromUrlParams::from(&item)).unwrap(),
            json!({
                "url": "u",
                "name": "n",
                "website": null,
                "tags": null,
                "modificationTime": null,
                "headers": null
            })
        );
    }

    #[test]
    fn add_from_path_sends_explicit_nulls() {
        let item = PathItem::new("path/to/image.jpg", "image");
        assert_eq!(
            serde_json::to_value(AddFromPathParams::new(&item, None)).unwrap(),
            json!({
                "path": "path/to/image.jpg",
                "name": "image",
                "website": null,
                "tags": null,
                "annotation": null,
                "folderId": null
            })
        );
    }

    #[test]
    fn update_flattens_changes_with_nulls() {
        let changes = ItemUpdate::new().annotation("note");
        let params = UpdateItemParams {
            id: "item_id",
            changes: &changes,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "id": "item_id",
                "tags": null,
                "annotation": "note",
                "url": null,
                "star": null
            })
        );
    }

    #[test]
    fn batch_preserves_order() {
        let items = vec![UrlItem::new("b", "2"), UrlItem::new("a", "1")];
        let params = AddBatchParams {
            items: &items,
            folder_id: Some("F1"),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "items": [{"url": "b", "name": "2"}, {"url": "a", "name": "1"}],
                "folderId": "F1"
            })
        );
    }
}
