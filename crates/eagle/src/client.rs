//! The Eagle client and builder.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::actions::{ApplicationActions, FolderActions, ItemActions, LibraryActions};
use crate::error::{Error, Result};
use crate::request::join_url;

/// Default URL of the Eagle API server.
const DEFAULT_URL: &str = "http://localhost:41595";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with the Eagle API.
///
/// The client holds the base address and a pooled HTTP connection; the
/// action groups borrow it, so it is configured once and shared.
///
/// # Example
///
/// ```no_run
/// use eagle::EagleClient;
///
/// # async fn example() -> eagle::Result<()> {
/// // Create a client with default settings
/// let client = EagleClient::new();
///
/// // Ask Eagle which version is running
/// let info = client.application().info().await?;
/// println!("Eagle: {}", info["data"]["version"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EagleClient {
    http_client: Client,
    base_url: String,
}

impl EagleClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://localhost:41595` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base address every request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access application operations.
    pub fn application(&self) -> ApplicationActions<'_> {
        ApplicationActions { client: self }
    }

    /// Access folder operations.
    pub fn folders(&self) -> FolderActions<'_> {
        FolderActions { client: self }
    }

    /// Access item operations.
    pub fn items(&self) -> ItemActions<'_> {
        ItemActions { client: self }
    }

    /// Access library operations.
    pub fn library(&self) -> LibraryActions<'_> {
        LibraryActions { client: self }
    }

    /// Full URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Issue a GET request without a query string.
    pub(crate) async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(method = "GET", path, "Eagle request");
        self.send(self.http_client.get(self.url(path))).await
    }

    /// Issue a GET request with query parameters.
    pub(crate) async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(method = "GET", path, "Eagle request");
        self.send(self.http_client.get(self.url(path)).query(query))
            .await
    }

    /// Issue a POST request with a JSON body.
    pub(crate) async fn post<P, R>(&self, path: &str, body: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(method = "POST", path, "Eagle request");
        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(body = %serde_json::to_string(body)?, "request body");
        }
        self.send(self.http_client.post(self.url(path)).json(body))
            .await
    }

    /// Send a prepared request and decode the JSON reply.
    async fn send<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for EagleClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`EagleClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use eagle::EagleClient;
///
/// let client = EagleClient::builder()
///     .url("http://localhost:41595")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the Eagle API address.
    ///
    /// Defaults to `http://localhost:41595`. A trailing `/` is ignored.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client, checking that the address is a usable HTTP URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the address does not parse or is not
    /// `http`/`https`, and [`Error::Http`] if the HTTP client cannot be
    /// initialised.
    pub fn try_build(self) -> Result<EagleClient> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid URL '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported scheme '{}' in '{}'",
                parsed.scheme(),
                self.base_url
            )));
        }

        let http_client = Client::builder().timeout(self.timeout).build()?;
        Ok(EagleClient {
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the client.
    ///
    /// The address is not validated here; a malformed one surfaces as an
    /// [`Error::Http`] on the first request. Use [`try_build`](Self::try_build)
    /// to check it up front.
    pub fn build(self) -> EagleClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        EagleClient {
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let client = EagleClient::new();
        assert_eq!(client.base_url(), "http://localhost:41595");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = EagleClient::builder().url("http://127.0.0.1:41595/").build();
        assert_eq!(client.base_url(), "http://127.0.0.1:41595");
        assert_eq!(
            client.url("/api/folder/list"),
            "http://127.0.0.1:41595/api/folder/list"
        );
    }

    #[test]
    fn try_build_rejects_bad_urls() {
        let err = EagleClient::builder().url("not a url").try_build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = EagleClient::builder()
            .url("ftp://localhost:41595")
            .try_build()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn try_build_accepts_http() {
        let client = EagleClient::builder()
            .url("http://localhost:9999")
            .timeout(Duration::from_secs(5))
            .try_build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
