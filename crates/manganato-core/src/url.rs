//! URL helper functions for manganato
//!
//! Provides functions for building listing page URLs.

/// Default site root
pub const BASE_URL: &str = "https://manganato.com";

/// Builds the URL of one page of the "all genres" listing, which is
/// ordered by latest update
///
/// # Arguments
/// * `base` - Site root (e.g., "https://manganato.com")
/// * `page` - 1-based page number
///
/// # Example
/// ```
/// use manganato_core::url::build_recent_updates_url;
/// let url = build_recent_updates_url("https://manganato.com", 2);
/// assert_eq!(url, "https://manganato.com/genre-all/2");
/// ```
pub fn build_recent_updates_url(base: &str, page: u32) -> String {
    build_page_url(&format!("{}/genre-all", base.trim_end_matches('/')), page)
}

/// Builds the URL of one page of a genre listing
///
/// # Arguments
/// * `genre_url` - Genre listing URL as stored in the genre registry
/// * `page` - 1-based page number
///
/// # Example
/// ```
/// use manganato_core::url::build_page_url;
/// let url = build_page_url("https://manganato.com/genre-2/", 3);
/// assert_eq!(url, "https://manganato.com/genre-2/3");
/// ```
pub fn build_page_url(genre_url: &str, page: u32) -> String {
    format!("{}/{}", genre_url.trim_end_matches('/'), page)
}
