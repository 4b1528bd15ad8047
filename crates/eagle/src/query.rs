//! Filter builder for listing items.
//!
//! [`ItemFilter`] collects the optional filters accepted by
//! `GET /api/item/list` and turns them into query pairs.
//!
//! # Example
//!
//! ```
//! use eagle::ItemFilter;
//!
//! let filter = ItemFilter::new()
//!     .order_by("-CREATEDATE")
//!     .limit(20)
//!     .ext("png")
//!     .tag("design")
//!     .tag("inspiration");
//!
//! let pairs = filter.to_query();
//! assert!(pairs.contains(&("tags", "design,inspiration".to_string())));
//! ```
//!
//! # Tags
//!
//! The `tags` key is always sent. Tags are joined with `,`; an empty list
//! produces an empty value rather than dropping the key.

/// Filters for [`ItemActions::list()`](crate::actions::ItemActions::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Sort key, e.g. `CREATEDATE`, `FILESIZE`, `NAME`, `RESOLUTION`.
    /// Prefix with `-` for descending order.
    pub order_by: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// File extension filter, e.g. `jpg`.
    pub ext: Option<String>,
    /// Keyword filter on the item name.
    pub name: Option<String>,
    /// Folder IDs to restrict the listing to.
    pub folders: Vec<String>,
    /// Tags an item must carry.
    pub tags: Vec<String>,
}

impl ItemFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort key.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by file extension.
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Filter by name keyword.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a folder ID.
    pub fn folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folders.push(folder_id.into());
        self
    }

    /// Add several folder IDs.
    pub fn folders<I, S>(mut self, folder_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders.extend(folder_ids.into_iter().map(Into::into));
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add several tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The tags as sent on the wire: joined with `,`.
    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }

    /// Build the query pairs in wire order.
    ///
    /// Unset scalar filters are left out, each folder becomes its own
    /// `folders` pair, and `tags` is always the last pair.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy", order_by.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ext) = &self.ext {
            pairs.push(("ext", ext.clone()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        for folder in &self.folders {
            pairs.push(("folders", folder.clone()));
        }
        pairs.push(("tags", self.joined_tags()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_still_sends_tags() {
        let pairs = ItemFilter::new().to_query();
        assert_eq!(pairs, vec![("tags", String::new())]);
    }

    #[test]
    fn tags_are_comma_joined() {
        let filter = ItemFilter::new().tags(["a", "b"]);
        assert_eq!(filter.joined_tags(), "a,b");

        let single = ItemFilter::new().tag("tag1");
        assert_eq!(single.joined_tags(), "tag1");
    }

    #[test]
    fn full_filter_order() {
        let filter = ItemFilter::new()
            .order_by("CREATEDATE")
            .limit(10)
            .ext("jpg")
            .name("name")
            .folders(["folder1", "folder2"])
            .tag("tag1");

        assert_eq!(
            filter.to_query(),
            vec![
                ("orderBy", "CREATEDATE".to_string()),
                ("limit", "10".to_string()),
                ("ext", "jpg".to_string()),
                ("name", "name".to_string()),
                ("folders", "folder1".to_string()),
                ("folders", "folder2".to_string()),
                ("tags", "tag1".to_string()),
            ]
        );
    }

    #[test]
    fn tags_are_not_trimmed_or_deduplicated() {
        let filter = ItemFilter::new().tags([" a", "a", ""]);
        assert_eq!(filter.joined_tags(), " a,a,");
    }
}
