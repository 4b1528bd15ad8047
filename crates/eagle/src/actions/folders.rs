//! Folder-related Eagle actions.
//!
//! # Example
//!
//! ```no_run
//! use eagle::{EagleClient, FolderColor};
//!
//! # async fn example() -> eagle::Result<()> {
//! let client = EagleClient::new();
//!
//! let created = client.folders().create("References", None).await?;
//! let id = created["data"]["id"].as_str().unwrap_or_default();
//!
//! client
//!     .folders()
//!     .update(id, "References", "Mood boards", FolderColor::Aqua)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::client::EagleClient;
use crate::error::Result;
use crate::request::endpoint;
use crate::types::FolderColor;

/// Provides access to folder operations.
///
/// Obtained via [`EagleClient::folders()`].
#[derive(Debug)]
pub struct FolderActions<'a> {
    pub(crate) client: &'a EagleClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFolderParams<'a> {
    folder_name: &'a str,
    parent: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameFolderParams<'a> {
    folder_id: &'a str,
    new_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFolderParams<'a> {
    folder_id: &'a str,
    new_name: &'a str,
    new_description: &'a str,
    new_color: FolderColor,
}

impl<'a> FolderActions<'a> {
    /// Create a folder.
    ///
    /// Pass a `parent` folder ID to create a subfolder; without one the
    /// folder is created at the top level and `parent` is sent as `null`.
    pub async fn create(&self, name: &str, parent: Option<&str>) -> Result<Value> {
        self.client
            .post(
                endpoint::FOLDER_CREATE,
                &CreateFolderParams {
                    folder_name: name,
                    parent,
                },
            )
            .await
    }

    /// Rename a folder.
    pub async fn rename(&self, folder_id: &str, new_name: &str) -> Result<Value> {
        self.client
            .post(
                endpoint::FOLDER_RENAME,
                &RenameFolderParams {
                    folder_id,
                    new_name,
                },
            )
            .await
    }

    /// Update a folder's name, description and colour.
    pub async fn update(
        &self,
        folder_id: &str,
        new_name: &str,
        new_description: &str,
        new_color: FolderColor,
    ) -> Result<Value> {
        self.client
            .post(
                endpoint::FOLDER_UPDATE,
                &UpdateFolderParams {
                    folder_id,
                    new_name,
                    new_description,
                    new_color,
                },
            )
            .await
    }

    /// List all folders.
    pub async fn list(&self) -> Result<Value> {
        self.client.get(endpoint::FOLDER_LIST).await
    }

    /// List recently used folders.
    pub async fn list_recent(&self) -> Result<Value> {
        self.client.get(endpoint::FOLDER_LIST_RECENT).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_without_parent_sends_null() {
        let params = CreateFolderParams {
            folder_name: "New Folder",
            parent: None,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"folderName": "New Folder", "parent": null})
        );
    }

    #[test]
    fn update_uses_external_key_names() {
        let params = UpdateFolderParams {
            folder_id: "folder_id",
            new_name: "Updated Folder",
            new_description: "New Description",
            new_color: FolderColor::Blue,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "folderId": "folder_id",
                "newName": "Updated Folder",
                "newDescription": "New Description",
                "newColor": "blue"
            })
        );
    }
}
