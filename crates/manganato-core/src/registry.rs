//! Genre registry
//!
//! Maps genre names to their listing URLs. The mapping is read once from a
//! JSON document shaped like:
//!
//! ```json
//! {
//!     "Manganato": {
//!         "ACTION": "https://manganato.com/genre-2",
//!         "ALL": { "STATE": "https://...", "TYPE": "https://..." }
//!     }
//! }
//! ```
//!
//! and never modified afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MangaNatoError, Result};

/// Top-level key of this source inside the registry document
pub const SOURCE_KEY: &str = "Manganato";

/// Composite entry holding the state and type filtered listings
const ALL_KEY: &str = "ALL";
const STATE_KEY: &str = "STATE";
const TYPE_KEY: &str = "TYPE";

const BUNDLED_GENRES: &str = include_str!("../genre.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGenreLink {
    Url(String),
    Filters(HashMap<String, serde_json::Value>),
}

/// Read-only lookup table from genre name to listing URL
#[derive(Debug, Clone)]
pub struct GenreRegistry {
    genres: HashMap<String, String>,
    all_by_state: String,
    all_by_type: String,
}

impl GenreRegistry {
    /// Load the registry from a JSON file
    ///
    /// # Errors
    /// `ConfigError` if the file is missing, unreadable or malformed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            MangaNatoError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let registry = Self::from_json(&contents)?;
        log::debug!(
            "Loaded {} genres from {}",
            registry.genres.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Load the registry that ships with this crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_GENRES)
    }

    /// Parse a registry document held in memory
    ///
    /// # Errors
    /// `ConfigError` if the document is not valid JSON, lacks the
    /// `Manganato` section, holds a non-string genre URL, has two keys
    /// that differ only in case, or the `ALL` entry is missing its
    /// `STATE`/`TYPE` URLs. Other keys under `ALL` are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut document: HashMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| MangaNatoError::ConfigError(format!("invalid genre document: {}", e)))?;

        let section = document.remove(SOURCE_KEY).ok_or_else(|| {
            MangaNatoError::ConfigError(format!("missing \"{}\" section", SOURCE_KEY))
        })?;

        let raw: HashMap<String, RawGenreLink> = serde_json::from_value(section).map_err(|e| {
            MangaNatoError::ConfigError(format!("malformed \"{}\" section: {}", SOURCE_KEY, e))
        })?;

        let mut genres = HashMap::with_capacity(raw.len());
        let mut filters = None;

        for (name, link) in raw {
            let name = name.to_uppercase();
            match (name == ALL_KEY, link) {
                (true, RawGenreLink::Filters(map)) => {
                    if filters.is_some() {
                        return Err(duplicate_key(&name));
                    }
                    let mut normalized = HashMap::with_capacity(map.len());
                    for (key, value) in map {
                        let key = key.to_uppercase();
                        if normalized.insert(key.clone(), value).is_some() {
                            return Err(duplicate_key(&format!("{}.{}", ALL_KEY, key)));
                        }
                    }
                    filters = Some(normalized);
                }
                (false, RawGenreLink::Url(url)) => {
                    if genres.insert(name.clone(), url).is_some() {
                        return Err(duplicate_key(&name));
                    }
                }
                (true, RawGenreLink::Url(_)) => {
                    return Err(MangaNatoError::ConfigError(format!(
                        "\"{}\" must map {} and {} to URLs",
                        ALL_KEY, STATE_KEY, TYPE_KEY
                    )));
                }
                (false, RawGenreLink::Filters(_)) => {
                    return Err(MangaNatoError::ConfigError(format!(
                        "genre \"{}\" must map to a URL",
                        name
                    )));
                }
            }
        }

        let mut filters = filters.ok_or_else(|| {
            MangaNatoError::ConfigError(format!("missing \"{}\" entry", ALL_KEY))
        })?;
        let mut take_filter = |key: &str| match filters.remove(key) {
            Some(serde_json::Value::String(url)) => Ok(url),
            Some(_) => Err(MangaNatoError::ConfigError(format!(
                "\"{}\" entry maps \"{}\" to a non-string",
                ALL_KEY, key
            ))),
            None => Err(MangaNatoError::ConfigError(format!(
                "\"{}\" entry lacks \"{}\"",
                ALL_KEY, key
            ))),
        };
        let all_by_state = take_filter(STATE_KEY)?;
        let all_by_type = take_filter(TYPE_KEY)?;

        Ok(Self {
            genres,
            all_by_state,
            all_by_type,
        })
    }

    /// Resolve a genre to its listing URL
    ///
    /// A non-empty `state` selects the state-filtered "all genres" listing
    /// and a non-empty `kind` the type-filtered one, whatever `genre` says.
    /// When both are given, `state` wins. Otherwise `genre` is looked up
    /// case-insensitively.
    ///
    /// # Errors
    /// `InvalidGenre` if `genre` is not in the registry (including the
    /// bare `ALL` entry, which only resolves through a filter)
    pub fn resolve(&self, genre: &str, state: Option<&str>, kind: Option<&str>) -> Result<&str> {
        if state.is_some_and(|s| !s.is_empty()) {
            return Ok(&self.all_by_state);
        }
        if kind.is_some_and(|k| !k.is_empty()) {
            return Ok(&self.all_by_type);
        }

        let key = genre.to_uppercase();
        self.genres
            .get(&key)
            .map(String::as_str)
            .ok_or(MangaNatoError::InvalidGenre(key))
    }

    /// Names of all plain genres, sorted
    pub fn genres(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.genres.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn duplicate_key(name: &str) -> MangaNatoError {
    MangaNatoError::ConfigError(format!(
        "genre \"{}\" appears more than once ignoring case",
        name
    ))
}
