//! Parameter types for the Eagle API.
//!
//! Eagle owns every folder, item and library; these types only describe
//! what is sent to it.

mod folder;
mod item;

pub use folder::FolderColor;
pub use item::{ItemUpdate, PathItem, UrlItem};
