//! Chapter reader parser for manganato

use scraper::Html;

use super::{all, attr, first};
use crate::error::Result;

const READER_CONTAINER: &str = "div.container-chapter-reader";

/// Parses a chapter reader page and returns its page image URLs in order
///
/// A reader without images yields an empty list.
///
/// # Errors
/// `ElementNotFound` if the reader container is missing or an image has
/// no `src`
pub fn parse_chapter_images(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let reader = first(document.root_element(), READER_CONTAINER)?;

    all(reader, "img")?
        .into_iter()
        .map(|image| attr(image, "src"))
        .collect()
}
