//! Internal request plumbing: endpoint paths and URL construction.

/// Paths of the Eagle API endpoints, relative to the base address.
pub(crate) mod endpoint {
    pub const APPLICATION_INFO: &str = "/api/application/info";

    pub const FOLDER_CREATE: &str = "/api/folder/create";
    pub const FOLDER_RENAME: &str = "/api/folder/rename";
    pub const FOLDER_UPDATE: &str = "/api/folder/update";
    pub const FOLDER_LIST: &str = "/api/folder/list";
    pub const FOLDER_LIST_RECENT: &str = "/api/folder/listRecent";

    pub const ITEM_ADD_FROM_PATH: &str = "/api/item/addFromPath";
    pub const ITEM_ADD_FROM_URL: &str = "/api/item/addFromURL";
    pub const ITEM_ADD_FROM_PATHS: &str = "/api/item/addFromPaths";
    pub const ITEM_ADD_FROM_URLS: &str = "/api/item/addFromURLs";
    pub const ITEM_ADD_BOOKMARK: &str = "/api/item/addBookmark";
    pub const ITEM_INFO: &str = "/api/item/info";
    pub const ITEM_THUMBNAIL: &str = "/api/item/thumbnail";
    pub const ITEM_LIST: &str = "/api/item/list";
    pub const ITEM_MOVE_TO_TRASH: &str = "/api/item/moveToTrash";
    pub const ITEM_REFRESH_PALETTE: &str = "/api/item/refreshPalette";
    pub const ITEM_REFRESH_THUMBNAIL: &str = "/api/item/refreshThumbnail";
    pub const ITEM_UPDATE: &str = "/api/item/update";

    pub const LIBRARY_INFO: &str = "/api/library/info";
    pub const LIBRARY_SWITCH: &str = "/api/library/switch";
    pub const LIBRARY_HISTORY: &str = "/api/library/history";
    pub const LIBRARY_ICON: &str = "/api/library/icon";
}

/// Join a base address and an absolute API path.
///
/// `base` is expected without a trailing slash; one is tolerated anyway.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Form-encode a single query value (`application/x-www-form-urlencoded`).
pub(crate) fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
