//! Core data types for the manganato scraper
//!
//! Contains the structured records produced by the extraction rules.
//! Field names serialize to the keys downstream consumers already read
//! (`Title`, `Latest_Chapter`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single row of a listing page (recent updates or genre listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Manga title as shown on the listing
    #[serde(rename = "Title")]
    pub title: String,

    /// Cover image URL
    #[serde(rename = "Cover")]
    pub cover: String,

    /// URL of the manga detail page
    #[serde(rename = "Url")]
    pub url: String,

    /// Label of the latest chapter (e.g., "Chapter 112")
    #[serde(rename = "Latest_Chapter")]
    pub latest_chapter: String,
}

/// Listing rows keyed by their 1-based position
///
/// Positions run from 1 to `len()` without gaps, in the order the rows
/// appeared across all fetched pages. Serializes as a JSON object
/// (`{"1": {...}, "2": {...}}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<usize, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning the position it was stored under
    pub fn push(&mut self, entry: CatalogEntry) -> usize {
        let position = self.entries.len() + 1;
        self.entries.insert(position, entry);
        position
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 1-based position
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(&position)
    }

    /// Iterate `(position, entry)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CatalogEntry)> {
        self.entries.iter().map(|(position, entry)| (*position, entry))
    }

    /// Consume the catalog, keeping only the entries in order
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries.into_values().collect()
    }
}

impl Extend<CatalogEntry> for Catalog {
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

/// A chapter link from a manga detail page
///
/// Serializes as a `[label, url, uploaded]` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String, String)", from = "(String, String, String)")]
pub struct ChapterRef {
    /// Chapter label including its name (e.g., "Chapter 12: The Gate")
    pub label: String,

    /// URL of the chapter reader page
    pub url: String,

    /// Upload date as displayed (e.g., "Oct 10,23")
    pub uploaded: String,
}

impl From<ChapterRef> for (String, String, String) {
    fn from(chapter: ChapterRef) -> Self {
        (chapter.label, chapter.url, chapter.uploaded)
    }
}

impl From<(String, String, String)> for ChapterRef {
    fn from((label, url, uploaded): (String, String, String)) -> Self {
        Self {
            label,
            url,
            uploaded,
        }
    }
}

/// Everything extracted from a manga detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaRecord {
    #[serde(rename = "Title")]
    pub title: String,

    /// Summary text, empty when the site shows its placeholder
    #[serde(rename = "Plot")]
    pub plot: String,

    #[serde(rename = "Cover")]
    pub cover: String,

    #[serde(rename = "Genre")]
    pub genres: Vec<String>,

    /// Chapters in page order (newest first on the live site)
    #[serde(rename = "Chapters")]
    pub chapters: Vec<ChapterRef>,

    #[serde(
        rename = "Alternative_names",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_names: Option<Vec<String>>,

    #[serde(rename = "Authors", default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    /// Publication status (e.g., "Ongoing")
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
