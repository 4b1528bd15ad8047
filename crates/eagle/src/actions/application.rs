//! Application-level Eagle actions.

use serde_json::Value;

use crate::client::EagleClient;
use crate::error::Result;
use crate::request::endpoint;

/// Provides access to application operations.
///
/// Obtained via [`EagleClient::application()`].
#[derive(Debug)]
pub struct ApplicationActions<'a> {
    pub(crate) client: &'a EagleClient,
}

impl<'a> ApplicationActions<'a> {
    /// Get details about the running Eagle app.
    ///
    /// Useful for checking that Eagle is reachable and which version and
    /// platform it runs on before calling version-specific endpoints.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eagle::EagleClient;
    ///
    /// # async fn example() -> eagle::Result<()> {
    /// let client = EagleClient::new();
    /// let info = client.application().info().await?;
    /// println!("{}", info["data"]["version"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn info(&self) -> Result<Value> {
        self.client.get(endpoint::APPLICATION_INFO).await
    }
}
