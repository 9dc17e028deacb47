//! Listing page parser for manganato
//!
//! Parses the "all genres" (recent updates) and per-genre listing pages.
//! Both share the same item markup but are read with different rules, see
//! [`parse_recent_updates`] and [`parse_genre_listing`].

use scraper::{ElementRef, Html};

use super::{all, attr, first, nth, text};
use crate::error::Result;
use crate::types::CatalogEntry;

const LISTING_PANEL: &str = "div.panel-content-genres";
const LISTING_ITEM: &str = "div.content-genres-item";

/// The latest-chapter link is the third anchor of a recent-updates item,
/// after the cover link and the title link
const RECENT_CHAPTER_ANCHOR: usize = 2;

/// The latest-chapter link is the second anchor of a genre item's info
/// block, after the title link
const GENRE_CHAPTER_ANCHOR: usize = 1;

/// Parses a recent-updates page (`/genre-all/{page}`)
///
/// Per item: cover from the first image, title and URL from the first
/// heading link, latest chapter from the third anchor of the item.
///
/// # Errors
/// `ElementNotFound` if the listing panel is missing or any item lacks
/// one of the elements above
pub fn parse_recent_updates(html: &str) -> Result<Vec<CatalogEntry>> {
    parse_listing(html, parse_recent_item)
}

/// Parses a genre listing page (`{genre_url}/{page}`)
///
/// Per item: cover from the image inside the `genres-item-img` link; title
/// and URL from the first heading link of the `genres-item-info` block;
/// latest chapter from the second anchor of that block.
///
/// # Errors
/// `ElementNotFound` if the listing panel is missing or any item lacks
/// one of the elements above
pub fn parse_genre_listing(html: &str) -> Result<Vec<CatalogEntry>> {
    parse_listing(html, parse_genre_item)
}

fn parse_listing(
    html: &str,
    parse_item: fn(ElementRef) -> Result<CatalogEntry>,
) -> Result<Vec<CatalogEntry>> {
    let document = Html::parse_document(html);
    let panel = first(document.root_element(), LISTING_PANEL)?;

    all(panel, LISTING_ITEM)?
        .into_iter()
        .map(parse_item)
        .collect()
}

fn parse_recent_item(item: ElementRef) -> Result<CatalogEntry> {
    let cover = attr(first(item, "img")?, "src")?;
    let heading_link = first(item, "h3 a")?;
    let latest_chapter = text(nth(item, "a", RECENT_CHAPTER_ANCHOR)?);

    Ok(CatalogEntry {
        title: text(heading_link),
        cover,
        url: attr(heading_link, "href")?,
        latest_chapter,
    })
}

fn parse_genre_item(item: ElementRef) -> Result<CatalogEntry> {
    let cover = attr(first(item, "a.genres-item-img img")?, "src")?;
    let info = first(item, "div.genres-item-info")?;
    let heading_link = first(info, "h3 a")?;
    let latest_chapter = text(nth(info, "a", GENRE_CHAPTER_ANCHOR)?);

    Ok(CatalogEntry {
        title: text(heading_link),
        cover,
        url: attr(heading_link, "href")?,
        latest_chapter,
    })
}
