//! HTML parsers for manganato
//!
//! Contains modules for parsing different page types, plus the small
//! element lookup helpers they share. Every parser takes the raw page
//! HTML and returns owned data, so no parsed document outlives the call.

pub mod chapter;
pub mod listing;
pub mod manga;

pub use chapter::parse_chapter_images;
pub use listing::{parse_genre_listing, parse_recent_updates};
pub use manga::parse_manga_info;

use scraper::{ElementRef, Selector};

use crate::error::{MangaNatoError, Result};

/// Build a selector from a CSS string
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| MangaNatoError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

/// First element under `scope` matching `css`, if any
pub(crate) fn try_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).next())
}

/// First element under `scope` matching `css`
///
/// # Errors
/// `ElementNotFound` naming `css` when nothing matches
pub(crate) fn first<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    try_first(scope, css)?.ok_or_else(|| MangaNatoError::ElementNotFound(css.to_string()))
}

/// The `index`-th (0-based) element under `scope` matching `css`
///
/// # Errors
/// `ElementNotFound` when fewer than `index + 1` elements match
pub(crate) fn nth<'a>(scope: ElementRef<'a>, css: &str, index: usize) -> Result<ElementRef<'a>> {
    let selector = selector(css)?;
    scope.select(&selector).nth(index).ok_or_else(|| {
        MangaNatoError::ElementNotFound(format!("{} (position {})", css, index + 1))
    })
}

/// Every element under `scope` matching `css`, in document order
pub(crate) fn all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// Concatenated text of an element without any trimming
pub(crate) fn raw_text(element: ElementRef) -> String {
    element.text().collect()
}

/// Concatenated text of an element with surrounding whitespace removed
pub(crate) fn text(element: ElementRef) -> String {
    raw_text(element).trim().to_string()
}

/// Value of a required attribute
///
/// # Errors
/// `ElementNotFound` naming the element and attribute when it is missing
pub(crate) fn attr(element: ElementRef, name: &str) -> Result<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| {
            MangaNatoError::ElementNotFound(format!("{}[{}]", element.value().name(), name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const HTML: &str = r#"
        <html><body>
            <div class="item">
                <a href="/one"> One </a>
                <a>Two</a>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_first_and_text() {
        let document = Html::parse_document(HTML);
        let link = first(document.root_element(), "div.item a").unwrap();
        assert_eq!(text(link), "One");
        assert_eq!(raw_text(link), " One ");
        assert_eq!(attr(link, "href").unwrap(), "/one");
    }

    #[test]
    fn test_first_missing() {
        let document = Html::parse_document(HTML);
        match first(document.root_element(), "div.missing") {
            Err(MangaNatoError::ElementNotFound(what)) => assert_eq!(what, "div.missing"),
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_nth_positions() {
        let document = Html::parse_document(HTML);
        let root = document.root_element();
        assert_eq!(text(nth(root, "a", 1).unwrap()), "Two");
        match nth(root, "a", 2) {
            Err(MangaNatoError::ElementNotFound(what)) => assert_eq!(what, "a (position 3)"),
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_attr_missing() {
        let document = Html::parse_document(HTML);
        let second = nth(document.root_element(), "a", 1).unwrap();
        match attr(second, "href") {
            Err(MangaNatoError::ElementNotFound(what)) => assert_eq!(what, "a[href]"),
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_selector() {
        let document = Html::parse_document(HTML);
        assert!(matches!(
            try_first(document.root_element(), "div[["),
            Err(MangaNatoError::ParseError(_))
        ));
    }
}
