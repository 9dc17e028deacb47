//! Manganato Scraper Core Library
//!
//! Provides async API for reading the manganato.com catalog as structured
//! data: recent updates, genre listings, manga details and chapter images.
//!
//! # Overview
//!
//! This crate provides a complete scraping solution for manganato with:
//! - Rate-limited HTTP client to avoid overwhelming the server
//! - A genre registry mapping genre names to listing URLs
//! - HTML parsers for each page type
//! - High-level API tying fetching, lookup and parsing together
//!
//! # Example
//!
//! ```no_run
//! use manganato_core::{MangaNatoScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = MangaNatoScraper::new()?;
//!
//!     // Latest updates, first page only
//!     let updates = scraper.get_recent_updates(1).await?;
//!
//!     for (position, entry) in updates.iter() {
//!         println!("{}. {} - {}", position, entry.title, entry.latest_chapter);
//!     }
//!
//!     // Details and page images of the newest chapter
//!     if let Some(entry) = updates.get(1) {
//!         let manga = scraper.get_manga_info(&entry.url).await?;
//!         if let Some(chapter) = manga.chapters.first() {
//!             let pages = scraper.get_chapter_images(&chapter.url).await?;
//!             println!("{} has {} pages", chapter.label, pages.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Page layout
//!
//! Extraction follows the site's markup closely, including positional
//! rules such as "the third link of a listing item is the latest chapter".
//! When the site changes its layout, operations fail with
//! [`MangaNatoError::ElementNotFound`] naming the missing piece rather than
//! returning partial data.

mod client;
mod error;
pub mod parser;
mod registry;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, MangaNatoClient, PageFetcher, RateLimiter};

// Re-export error types
pub use error::{MangaNatoError, Result};

// Re-export parser functions
pub use parser::{parse_chapter_images, parse_genre_listing, parse_manga_info, parse_recent_updates};

// Re-export genre registry
pub use registry::{GenreRegistry, SOURCE_KEY};

// Re-export main scraper API
pub use scraper::MangaNatoScraper;

// Re-export data types
pub use types::{Catalog, CatalogEntry, ChapterRef, MangaRecord};
