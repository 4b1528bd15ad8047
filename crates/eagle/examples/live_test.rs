//! Live test against a running Eagle instance.
//!
//! Run with: cargo run --example live_test
//!
//! This test is SAFE - it only reads existing data and creates a
//! temporary test folder for write operations.

use eagle::{EagleClient, FolderColor, ItemFilter};

const TEST_FOLDER: &str = "EagleRsTest";

#[tokio::main]
async fn main() -> eagle::Result<()> {
    let client = EagleClient::new();

    println!("=== Eagle API Live Test ===\n");

    // ========== APPLICATION ==========
    println!("--- Application ---");

    let info = client.application().info().await?;
    println!("[OK] Eagle version: {}", info["data"]["version"]);

    // ========== LIBRARY (READ-ONLY) ==========
    println!("\n--- Library (read-only) ---");

    let library = client.library().info().await?;
    println!("[OK] Library: {}", library["data"]["library"]["name"]);

    match client.library().history_or_none().await {
        Some(history) => println!("[OK] History: {}", history["data"]),
        None => println!("[--] History unavailable"),
    }

    if let Some(path) = library["data"]["library"]["path"].as_str() {
        println!("[OK] Icon URL: {}", client.library().icon_url(path));
    }

    // ========== ITEMS (READ-ONLY) ==========
    println!("\n--- Items (read-only) ---");

    let filter = ItemFilter::new().order_by("-CREATEDATE").limit(5);
    let items = client.items().list(&filter).await?;
    let count = items["data"].as_array().map(Vec::len).unwrap_or(0);
    println!("[OK] Listed {} recent items", count);

    if let Some(id) = items["data"][0]["id"].as_str() {
        let item = client.items().info(id).await?;
        println!("[OK] First item: {}", item["data"]["name"]);

        let thumbnail = client.items().thumbnail(id).await?;
        println!("[OK] Thumbnail: {}", thumbnail["data"]);
    }

    // ========== FOLDERS ==========
    println!("\n--- Folders ---");

    let folders = client.folders().list().await?;
    let count = folders["data"].as_array().map(Vec::len).unwrap_or(0);
    println!("[OK] {} top-level folders", count);

    let created = client.folders().create(TEST_FOLDER, None).await?;
    if let Some(id) = created["data"]["id"].as_str() {
        println!("[OK] Created folder {}", id);
        client
            .folders()
            .update(id, TEST_FOLDER, "Created by live_test", FolderColor::Green)
            .await?;
        println!("[OK] Updated folder {}", id);
    }

    let recent = client.folders().list_recent().await?;
    println!("[OK] Recent folders: {}", recent["data"]);

    println!("\nDone! Remove the '{}' folder in Eagle when finished.", TEST_FOLDER);
    Ok(())
}
