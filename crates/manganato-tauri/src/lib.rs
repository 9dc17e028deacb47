//! Manganato Tauri Integration
//!
//! Provides Tauri plugin for frontend integration with the manganato scraper.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(manganato_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Latest updates, first two pages
//! const updates = await invoke('plugin:manganato|get_recent_updates', { pageLimit: 2 });
//!
//! // Listing of one genre
//! const url = await invoke('plugin:manganato|get_genre_link', { genre: 'action' });
//! const action = await invoke('plugin:manganato|get_genre_list', { url, pageLimit: 1 });
//! ```

use std::sync::Arc;

use manganato_core::MangaNatoScraper;
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared scraper handle managed by Tauri
///
/// Every operation takes `&self` and the only shared data (the genre
/// registry and the client's rate limiter) is already safe to share, so
/// commands use the scraper concurrently without a lock.
pub struct ScraperState {
    pub(crate) scraper: Arc<MangaNatoScraper>,
}

impl ScraperState {
    /// Create a new ScraperState with default configuration and the
    /// bundled genre registry
    ///
    /// # Errors
    /// Returns error string if scraper initialization fails
    pub fn new() -> Result<Self, String> {
        let scraper = MangaNatoScraper::new().map_err(|e| e.to_string())?;
        Ok(Self::from_scraper(scraper))
    }

    /// Wrap an already configured scraper
    pub fn from_scraper(scraper: MangaNatoScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}

/// Initialize the manganato plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(manganato_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("manganato")
        .invoke_handler(tauri::generate_handler![
            commands::get_genre_link,
            commands::get_recent_updates,
            commands::get_manga_info,
            commands::get_genre_list,
            commands::get_chapter_images
        ])
        .setup(|app, _api| {
            let state = ScraperState::new().map_err(Box::<dyn std::error::Error>::from)?;
            log::debug!(
                "manganato plugin ready with {} genres",
                state.scraper.genres().genres().len()
            );
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use manganato_core::{CatalogEntry as Entry, MangaRecord as Manga};
