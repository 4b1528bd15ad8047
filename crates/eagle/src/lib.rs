//! An async Rust client for the [Eagle](https://eagle.cool) app's local HTTP API.
//!
//! Each method maps onto exactly one endpoint and returns Eagle's JSON reply
//! unchanged, as a [`serde_json::Value`].
//!
//! # Quick Start
//!
//! ```no_run
//! use eagle::EagleClient;
//!
//! # async fn example() -> eagle::Result<()> {
//! // Create a client with default settings (localhost:41595)
//! let client = EagleClient::new();
//!
//! // Check that Eagle is running
//! let info = client.application().info().await?;
//! println!("Eagle {}", info["data"]["version"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use eagle::EagleClient;
//!
//! let client = EagleClient::builder()
//!     .url("http://localhost:41595")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`EagleClient::application()`] - Information about the running app
//! - [`EagleClient::folders()`] - Create, rename, update, and list folders
//! - [`EagleClient::items()`] - Import, inspect, list, edit, and trash items
//! - [`EagleClient::library()`] - Inspect and switch libraries
//!
//! # Requirements
//!
//! - Eagle must be running; its API server listens on `http://localhost:41595`
//!   by default

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use client::{ClientBuilder, EagleClient};
pub use error::{Error, Result};
pub use query::ItemFilter;
pub use types::{FolderColor, ItemUpdate, PathItem, UrlItem};
