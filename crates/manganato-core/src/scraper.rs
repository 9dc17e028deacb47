//! Main scraper API for manganato
//!
//! Provides the high-level API combining the page fetcher, the genre
//! registry and the parsers.

use crate::client::{ClientConfig, MangaNatoClient, PageFetcher};
use crate::error::{MangaNatoError, Result};
use crate::parser::{
    parse_chapter_images, parse_genre_listing, parse_manga_info, parse_recent_updates,
};
use crate::registry::GenreRegistry;
use crate::types::{Catalog, CatalogEntry, MangaRecord};
use crate::url::{BASE_URL, build_page_url, build_recent_updates_url};

/// Main scraper API for manganato
///
/// Every operation fetches the pages it needs one after another and
/// parses them; nothing is cached between calls. The only shared state is
/// the genre registry, which is fixed at construction.
pub struct MangaNatoScraper<F = MangaNatoClient> {
    fetcher: F,
    genres: GenreRegistry,
    base_url: String,
}

impl MangaNatoScraper<MangaNatoClient> {
    /// Create a new scraper with default client configuration and the
    /// bundled genre registry
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), GenreRegistry::bundled()?)
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Arguments
    /// * `config` - Custom client configuration
    /// * `genres` - Genre registry, usually from [`GenreRegistry::load`]
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig, genres: GenreRegistry) -> Result<Self> {
        let client = MangaNatoClient::with_config(config)?;
        Ok(Self::with_fetcher(client, genres))
    }
}

impl<F: PageFetcher> MangaNatoScraper<F> {
    /// Create a scraper around any page fetcher
    pub fn with_fetcher(fetcher: F, genres: GenreRegistry) -> Self {
        Self {
            fetcher,
            genres,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Use a different site root for the recent-updates listing
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The genre registry this scraper resolves names with
    pub fn genres(&self) -> &GenreRegistry {
        &self.genres
    }

    /// Resolve a genre name (or a state/type filter) to its listing URL
    ///
    /// See [`GenreRegistry::resolve`] for the precedence rules.
    ///
    /// # Errors
    /// - `InvalidGenre` if the genre is unknown
    ///
    /// # Example
    /// ```
    /// # fn example() -> manganato_core::Result<()> {
    /// use manganato_core::MangaNatoScraper;
    /// let scraper = MangaNatoScraper::new()?;
    /// let url = scraper.get_genre_link("action", None, None)?;
    /// assert_eq!(url, "https://manganato.com/genre-2");
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_genre_link(
        &self,
        genre: &str,
        state: Option<&str>,
        kind: Option<&str>,
    ) -> Result<&str> {
        self.genres.resolve(genre, state, kind)
    }

    /// Get the most recently updated manga
    ///
    /// Fetches pages 1 to `page_limit` of the "all genres" listing in
    /// order. Positions keep counting across pages.
    ///
    /// # Errors
    /// - `InvalidArgument` if `page_limit` is 0
    /// - `HttpError`, `RateLimited`, `Blocked`, `NotFound` if a fetch fails
    /// - `ElementNotFound` if a page does not have the expected layout
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> manganato_core::Result<()> {
    /// use manganato_core::MangaNatoScraper;
    /// let scraper = MangaNatoScraper::new()?;
    /// let updates = scraper.get_recent_updates(2).await?;
    /// for (position, entry) in updates.iter() {
    ///     println!("{}. {} ({})", position, entry.title, entry.latest_chapter);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_recent_updates(&self, page_limit: u32) -> Result<Catalog> {
        let base = self.base_url.as_str();
        self.collect_pages(
            page_limit,
            |page| build_recent_updates_url(base, page),
            parse_recent_updates,
        )
        .await
    }

    /// Get the full record of a manga from its detail page
    ///
    /// # Errors
    /// - `InvalidArgument` if `url` is empty or whitespace only
    /// - `HttpError`, `RateLimited`, `Blocked`, `NotFound` if the fetch fails
    /// - `ElementNotFound` if a required part of the page is missing
    pub async fn get_manga_info(&self, url: &str) -> Result<MangaRecord> {
        let url = require_url(url)?;
        let html = self.fetcher.fetch(url).await?;
        parse_manga_info(&html)
    }

    /// Get the manga listed under a genre URL
    ///
    /// Fetches `{url}/1` to `{url}/{page_limit}` in order. Positions keep
    /// counting across pages.
    ///
    /// # Errors
    /// - `InvalidArgument` if `url` is empty or `page_limit` is 0
    /// - `HttpError`, `RateLimited`, `Blocked`, `NotFound` if a fetch fails
    /// - `ElementNotFound` if a page does not have the expected layout
    pub async fn get_genre_list(&self, url: &str, page_limit: u32) -> Result<Catalog> {
        let url = require_url(url)?;
        self.collect_pages(
            page_limit,
            |page| build_page_url(url, page),
            parse_genre_listing,
        )
        .await
    }

    /// Get the manga listed under a genre name
    ///
    /// # Errors
    /// - `InvalidGenre` if the genre is unknown
    /// - everything [`get_genre_list`](Self::get_genre_list) returns
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> manganato_core::Result<()> {
    /// use manganato_core::MangaNatoScraper;
    /// let scraper = MangaNatoScraper::new()?;
    /// let isekai = scraper.get_genre_list_by_name("isekai", 1).await?;
    /// println!("{} titles", isekai.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_genre_list_by_name(&self, genre: &str, page_limit: u32) -> Result<Catalog> {
        let url = self.genres.resolve(genre, None, None)?;
        self.get_genre_list(url, page_limit).await
    }

    /// Get the page image URLs of a chapter, in reading order
    ///
    /// # Errors
    /// - `InvalidArgument` if `url` is empty or whitespace only
    /// - `HttpError`, `RateLimited`, `Blocked`, `NotFound` if the fetch fails
    /// - `ElementNotFound` if the page has no reader container
    pub async fn get_chapter_images(&self, url: &str) -> Result<Vec<String>> {
        let url = require_url(url)?;
        let html = self.fetcher.fetch(url).await?;
        parse_chapter_images(&html)
    }

    async fn collect_pages<U>(
        &self,
        page_limit: u32,
        page_url: U,
        parse_page: fn(&str) -> Result<Vec<CatalogEntry>>,
    ) -> Result<Catalog>
    where
        U: Fn(u32) -> String,
    {
        if page_limit == 0 {
            return Err(MangaNatoError::InvalidArgument(
                "Page limit must be at least 1".to_string(),
            ));
        }

        let mut catalog = Catalog::new();
        for page in 1..=page_limit {
            let url = page_url(page);
            let html = self.fetcher.fetch(&url).await?;
            let entries = parse_page(&html)?;
            log::debug!("{}: {} entries", url, entries.len());
            catalog.extend(entries);
        }
        Ok(catalog)
    }
}

fn require_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(MangaNatoError::InvalidArgument(
            "URL cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
