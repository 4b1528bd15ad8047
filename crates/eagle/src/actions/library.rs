//! Library-related Eagle actions.
//!
//! Eagle keeps one library open at a time; these operations inspect the
//! open library, list recently opened ones, and switch between them.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::EagleClient;
use crate::error::Result;
use crate::request::{encode_query_value, endpoint};

/// Provides access to library operations.
///
/// Obtained via [`EagleClient::library()`].
#[derive(Debug)]
pub struct LibraryActions<'a> {
    pub(crate) client: &'a EagleClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchLibraryParams<'a> {
    library_path: &'a str,
}

impl<'a> LibraryActions<'a> {
    /// Get details about the open library: folders, smart folders, tag
    /// groups and so on.
    pub async fn info(&self) -> Result<Value> {
        self.client.get(endpoint::LIBRARY_INFO).await
    }

    /// Get the paths of recently opened libraries.
    pub async fn history(&self) -> Result<Value> {
        self.client.get(endpoint::LIBRARY_HISTORY).await
    }

    /// Like [`history()`](Self::history), but any failure is logged and
    /// turned into `None`.
    ///
    /// Handy for best-effort UI such as a "recent libraries" menu.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eagle::EagleClient;
    ///
    /// # async fn example() {
    /// let client = EagleClient::new();
    /// match client.library().history_or_none().await {
    ///     Some(history) => println!("{}", history),
    ///     None => println!("no history available"),
    /// }
    /// # }
    /// ```
    pub async fn history_or_none(&self) -> Option<Value> {
        match self.history().await {
            Ok(history) => Some(history),
            Err(e) => {
                warn!(error = %e, "Failed to fetch library history");
                None
            }
        }
    }

    /// Make Eagle open another library.
    pub async fn switch(&self, library_path: &str) -> Result<Value> {
        self.client
            .post(
                endpoint::LIBRARY_SWITCH,
                &SwitchLibraryParams { library_path },
            )
            .await
    }

    /// URL of a library's icon.
    ///
    /// Only builds the URL; nothing is requested. The path is form-encoded
    /// into the `libraryPath` query value.
    ///
    /// # Example
    ///
    /// ```
    /// use eagle::EagleClient;
    ///
    /// let client = EagleClient::builder().url("http://localhost:41595").build();
    /// assert_eq!(
    ///     client.library().icon_url("/Users/me/Art.library"),
    ///     "http://localhost:41595/api/library/icon?libraryPath=%2FUsers%2Fme%2FArt.library"
    /// );
    /// ```
    pub fn icon_url(&self, library_path: &str) -> String {
        format!(
            "{}?libraryPath={}",
            self.client.url(endpoint::LIBRARY_ICON),
            encode_query_value(library_path)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_plain_path() {
        let client = EagleClient::builder().url("http://localhost:41595").build();
        assert_eq!(
            client.library().icon_url("p"),
            "http://localhost:41595/api/library/icon?libraryPath=p"
        );
    }

    #[test]
    fn icon_url_encodes_spaces_and_separators() {
        let client = EagleClient::builder().url("http://localhost:41595").build();
        assert_eq!(
            client.library().icon_url("C:\\My Library.library"),
            "http://localhost:41595/api/library/icon?libraryPath=C%3A%5CMy+Library.library"
        );
    }
}
