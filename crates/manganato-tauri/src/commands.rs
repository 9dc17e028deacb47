//! Tauri commands for the manganato scraper
//!
//! This module contains all Tauri command implementations.

use manganato_core::{Catalog, MangaRecord};
use tauri::State;

use crate::ScraperState;

/// Resolve a genre name, or a state/type filter, to its listing URL
///
/// # Errors
/// Returns error message as String if the genre is unknown
#[tauri::command]
pub fn get_genre_link(
    state: State<'_, ScraperState>,
    genre: String,
    filter_state: Option<String>,
    filter_type: Option<String>,
) -> Result<String, String> {
    state
        .scraper
        .get_genre_link(&genre, filter_state.as_deref(), filter_type.as_deref())
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

/// Get recently updated manga from the first `page_limit` pages
///
/// # Errors
/// Returns error message as String if fetching or parsing fails
#[tauri::command]
pub async fn get_recent_updates(
    state: State<'_, ScraperState>,
    page_limit: u32,
) -> Result<Catalog, String> {
    state
        .scraper
        .get_recent_updates(page_limit)
        .await
        .map_err(|e| e.to_string())
}

/// Get the full record of a manga
///
/// # Errors
/// Returns error message as String if fetching or parsing fails
#[tauri::command]
pub async fn get_manga_info(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<MangaRecord, String> {
    state
        .scraper
        .get_manga_info(&url)
        .await
        .map_err(|e| e.to_string())
}

/// Get the manga listed under a genre URL
///
/// # Errors
/// Returns error message as String if fetching or parsing fails
#[tauri::command]
pub async fn get_genre_list(
    state: State<'_, ScraperState>,
    url: String,
    page_limit: u32,
) -> Result<Catalog, String> {
    state
        .scraper
        .get_genre_list(&url, page_limit)
        .await
        .map_err(|e| e.to_string())
}

/// Get the page image URLs of a chapter
///
/// # Errors
/// Returns error message as String if fetching or parsing fails
#[tauri::command]
pub async fn get_chapter_images(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Vec<String>, String> {
    state
        .scraper
        .get_chapter_images(&url)
        .await
        .map_err(|e| e.to_string())
}
