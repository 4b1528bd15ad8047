//! Subcommands and their dispatch onto the client.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use eagle::{EagleClient, FolderColor, ItemFilter, ItemUpdate, PathItem, UrlItem};
use serde_json::Value;
use tracing::debug;

/// Top-level command groups, mirroring the client's action groups.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Application information
    #[command(subcommand)]
    App(AppCommand),
    /// Folder operations
    #[command(subcommand)]
    Folder(FolderCommand),
    /// Item operations
    #[command(subcommand)]
    Item(ItemCommand),
    /// Library operations
    #[command(subcommand)]
    Library(LibraryCommand),
}

#[derive(Debug, Subcommand)]
pub enum AppCommand {
    /// Show details about the running Eagle app
    Info,
}

#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a folder
    Create {
        /// Folder name
        name: String,
        /// Parent folder ID
        #[arg(long)]
        parent: Option<String>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: String,
        /// New name
        name: String,
    },
    /// Update a folder's name, description and colour
    Update {
        /// Folder ID
        id: String,
        /// New name
        #[arg(long)]
        name: String,
        /// New description
        #[arg(long)]
        description: String,
        /// New colour: red, orange, green, yellow, aqua, blue, purple or pink
        #[arg(long)]
        color: FolderColor,
    },
    /// List all folders
    List,
    /// List recently used folders
    Recent,
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Import a local file
    AddPath {
        /// Path of the file
        path: String,
        /// Item name
        name: String,
        /// Source web page
        #[arg(long)]
        website: Option<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Annotation
        #[arg(long)]
        annotation: Option<String>,
        /// Destination folder ID
        #[arg(long)]
        folder: Option<String>,
    },
    /// Import an image from a URL
    AddUrl {
        /// Image URL
        url: String,
        /// Item name
        name: String,
        /// Source web page
        #[arg(long)]
        website: Option<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Creation time in milliseconds since the epoch
        #[arg(long)]
        modification_time: Option<i64>,
        /// Download header as NAME=VALUE (repeatable)
        #[arg(long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },
    /// Import local files listed in a JSON array file
    AddPaths {
        /// JSON file with `[{"path": .., "name": ..}, ..]`
        file: PathBuf,
        /// Destination folder ID
        #[arg(long)]
        folder: Option<String>,
    },
    /// Import images listed in a JSON array file
    AddUrls {
        /// JSON file with `[{"url": .., "name": ..}, ..]`
        file: PathBuf,
        /// Destination folder ID
        #[arg(long)]
        folder: Option<String>,
    },
    /// Save a bookmark
    Bookmark {
        /// Bookmarked URL
        url: String,
        /// Bookmark name
        name: String,
        /// Thumbnail as base64 data
        #[arg(long)]
        base64: String,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show an item's properties
    Info {
        /// Item ID
        id: String,
    },
    /// Show an item's thumbnail path
    Thumbnail {
        /// Item ID
        id: String,
    },
    /// List items
    List {
        /// Sort key, e.g. CREATEDATE or -FILESIZE
        #[arg(long)]
        order_by: Option<String>,
        /// Maximum number of items
        #[arg(long)]
        limit: Option<u32>,
        /// File extension
        #[arg(long)]
        ext: Option<String>,
        /// Name keyword
        #[arg(long)]
        name: Option<String>,
        /// Folder ID (repeatable)
        #[arg(long = "folder")]
        folders: Vec<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Move items to the trash
    Trash {
        /// Item IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Recompute an item's colour palette
    RefreshPalette {
        /// Item ID
        id: String,
    },
    /// Regenerate an item's thumbnail
    RefreshThumbnail {
        /// Item ID
        id: String,
    },
    /// Update an item's tags, annotation, URL or rating
    Update {
        /// Item ID
        id: String,
        /// Tag (repeatable); replaces all tags
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Remove all tags (sends an empty tag list)
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
        /// Annotation
        #[arg(long)]
        annotation: Option<String>,
        /// Source URL
        #[arg(long)]
        url: Option<String>,
        /// Rating from 0 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
        star: Option<u8>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LibraryCommand {
    /// Show details about the open library
    Info,
    /// List recently opened libraries
    History,
    /// Open another library
    Switch {
        /// Path of the library
        path: String,
    },
    /// Print the icon URL of a library
    Icon {
        /// Path of the library
        path: String,
    },
}

/// What a command produced.
#[derive(Debug, PartialEq)]
pub enum Output {
    /// An API reply.
    Json(Value),
    /// A locally computed string.
    Text(String),
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    if name.is_empty() {
        return Err(format!("empty header name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn non_empty(tags: &[String]) -> Option<&[String]> {
    if tags.is_empty() { None } else { Some(tags) }
}

fn read_items<T: serde::de::DeserializeOwned>(file: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let items: Vec<T> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid items in {}: {}", file.display(), e))?;
    debug!(count = items.len(), file = %file.display(), "Loaded batch items");
    Ok(items)
}

/// Run a command against the client.
pub async fn execute(client: &EagleClient, command: &Command) -> Result<Output, Box<dyn Error>> {
    let value = match command {
        Command::App(AppCommand::Info) => client.application().info().await?,

        Command::Folder(cmd) => {
            let folders = client.folders();
            match cmd {
                FolderCommand::Create { name, parent } => {
                    folders.create(name, parent.as_deref()).await?
                }
                FolderCommand::Rename { id, name } => folders.rename(id, name).await?,
                FolderCommand::Update {
                    id,
                    name,
                    description,
                    color,
                } => folders.update(id, name, description, *color).await?,
                FolderCommand::List => folders.list().await?,
                FolderCommand::Recent => folders.list_recent().await?,
            }
        }

        Command::Item(cmd) => {
            let items = client.items();
            match cmd {
                ItemCommand::AddPath {
                    path,
                    name,
                    website,
                    tags,
                    annotation,
                    folder,
                } => {
                    let mut item = PathItem::new(path, name);
                    item.website = website.clone();
                    item.tags = non_empty(tags).map(<[String]>::to_vec);
                    item.annotation = annotation.clone();
                    items.add_from_path(&item, folder.as_deref()).await?
                }
                ItemCommand::AddUrl {
                    url,
                    name,
                    website,
                    tags,
                    modification_time,
                    headers,
                } => {
                    let mut item = UrlItem::new(url, name);
                    item.website = website.clone();
                    item.tags = non_empty(tags).map(<[String]>::to_vec);
                    item.modification_time = *modification_time;
                    for (header, value) in headers {
                        item = item.header(header, value);
                    }
                    items.add_from_url(&item).await?
                }
                ItemCommand::AddPaths { file, folder } => {
                    let batch: Vec<PathItem> = read_items(file)?;
                    items.add_from_paths(&batch, folder.as_deref()).await?
                }
                ItemCommand::AddUrls { file, folder } => {
                    let batch: Vec<UrlItem> = read_items(file)?;
                    items.add_from_urls(&batch, folder.as_deref()).await?
                }
                ItemCommand::Bookmark {
                    url,
                    name,
                    base64,
                    tags,
                } => {
                    items
                        .add_bookmark(url, name, non_empty(tags), base64)
                        .await?
                }
                ItemCommand::Info { id } => items.info(id).await?,
                ItemCommand::Thumbnail { id } => items.thumbnail(id).await?,
                ItemCommand::List {
                    order_by,
                    limit,
                    ext,
                    name,
                    folders,
                    tags,
                } => {
                    let filter = ItemFilter {
                        order_by: order_by.clone(),
                        limit: *limit,
                        ext: ext.clone(),
                        name: name.clone(),
                        folders: folders.clone(),
                        tags: tags.clone(),
                    };
                    items.list(&filter).await?
                }
                ItemCommand::Trash { ids } => {
                    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                    items.move_to_trash(&ids).await?
                }
                ItemCommand::RefreshPalette { id } => items.refresh_palette(id).await?,
                ItemCommand::RefreshThumbnail { id } => items.refresh_thumbnail(id).await?,
                ItemCommand::Update {
                    id,
                    tags,
                    clear_tags,
                    annotation,
                    url,
                    star,
                } => {
                    let tags = if *clear_tags {
                        Some(Vec::new())
                    } else {
                        non_empty(tags).map(<[String]>::to_vec)
                    };
                    let changes = ItemUpdate {
                        tags,
                        annotation: annotation.clone(),
                        url: url.clone(),
                        star: *star,
                    };
                    items.update(id, &changes).await?
                }
            }
        }

        Command::Library(cmd) => {
            let library = client.library();
            match cmd {
                LibraryCommand::Info => library.info().await?,
                LibraryCommand::History => library.history().await?,
                LibraryCommand::Switch { path } => library.switch(path).await?,
                LibraryCommand::Icon { path } => return Ok(Output::Text(library.icon_url(path))),
            }
        }
    };

    Ok(Output::Json(value))
}
