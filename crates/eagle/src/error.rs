//! Error types for the eagle crate.
//!
//! Every network operation returns [`Result`], so failures look the same no
//! matter which action group raised them.
//!
//! # Error Handling
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::ConnectionRefused`]: Eagle is not running, or listens on another port
//! - [`Error::Status`]: Eagle answered with a non-success HTTP status
//! - [`Error::Json`]: the reply body was not JSON
//!
//! # Example
//!
//! ```no_run
//! use eagle::{EagleClient, Error};
//!
//! # async fn example() {
//! let client = EagleClient::new();
//!
//! match client.folders().list().await {
//!     Ok(folders) => println!("{}", folders),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Eagle first");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for Eagle API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// For connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Eagle replied with a non-success status code.
    ///
    /// The raw reply body is kept for diagnostics.
    #[error("Eagle returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The reply body, as text.
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Eagle is likely not running.
    ///
    /// This error occurs when:
    /// - Eagle is not running
    /// - The API server is listening on a different port
    #[error("Could not connect to Eagle. Is the Eagle app running?")]
    ConnectionRefused,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A specialized Result type for Eagle API operations.
pub type Result<T> = std::result::Result<T, Error>;
