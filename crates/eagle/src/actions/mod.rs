//! Action modules for Eagle API operations.
//!
//! Each module wraps one group of endpoints.

mod application;
mod folders;
mod items;
mod library;

pub use application::ApplicationActions;
pub use folders::FolderActions;
pub use items::ItemActions;
pub use library::LibraryActions;
