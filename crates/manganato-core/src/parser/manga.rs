//! Manga detail page parser for manganato
//!
//! The info table on a detail page has no per-row markers, so rows are read
//! by position: the last row always holds the genres, and the rows before it
//! are, in order, alternative names, authors and status. Those three are
//! optional and silently skipped when their row or cell is missing.

use scraper::{ElementRef, Html};

use super::{all, attr, first, raw_text, text, try_first};
use crate::error::{MangaNatoError, Result};
use crate::types::{ChapterRef, MangaRecord};

/// Heading the description panel always starts with
const DESCRIPTION_LABEL: &str = "\nDescription :\n";

/// Number of leading characters cut from the description panel text
pub const DESCRIPTION_PREFIX_LEN: usize = DESCRIPTION_LABEL.len();

/// Shown in the placeholder text of titles without a summary
pub const BRAND_NAME: &str = "MangaNato.com";

const ALT_NAMES_ROW: usize = 0;
const AUTHORS_ROW: usize = 1;
const STATUS_ROW: usize = 2;

const ALT_NAMES_SEPARATOR: &str = " ; ";
const AUTHORS_SEPARATOR: &str = ", ";

/// Parses a manga detail page
///
/// # Errors
/// `ElementNotFound` if the cover, description, title, info table, genre
/// row, chapter list, or any chapter's link or date is missing
pub fn parse_manga_info(html: &str) -> Result<MangaRecord> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let cover = attr(first(first(root, "div.story-info-left")?, "img")?, "src")?;
    let plot = clean_plot(&raw_text(first(root, "div.panel-story-info-description")?));

    let info = first(root, "div.story-info-right")?;
    let title = text(first(info, "h1")?);

    let table = first(info, "table.variations-tableInfo")?;
    let rows = all(table, "tr")?;
    let (genre_row, rows) = rows.split_last().ok_or_else(|| {
        MangaNatoError::ElementNotFound("table.variations-tableInfo tr".to_string())
    })?;

    let genres: Vec<String> = all(first(*genre_row, "td.table-value")?, "a.a-h")?
        .into_iter()
        .map(text)
        .collect();

    let alternative_names = row_text(rows, ALT_NAMES_ROW, "h2", text)?
        .map(|names| split_list(&names, ALT_NAMES_SEPARATOR));
    let authors = row_text(rows, AUTHORS_ROW, "a.a-h", text)?
        .map(|names| split_list(&names, AUTHORS_SEPARATOR));
    // Status is kept exactly as the cell renders it
    let status = row_text(rows, STATUS_ROW, "td.table-value", raw_text)?;

    let chapters = parse_chapter_list(root)?;

    log::debug!(
        "Parsed \"{}\": {} genres, {} chapters",
        title,
        genres.len(),
        chapters.len()
    );

    Ok(MangaRecord {
        title,
        plot,
        cover,
        genres,
        chapters,
        alternative_names,
        authors,
        status,
    })
}

/// Text of the first `css` match in the info row at `index`, read with
/// `read`, or `None` when that row or element does not exist
fn row_text(
    rows: &[ElementRef],
    index: usize,
    css: &str,
    read: fn(ElementRef) -> String,
) -> Result<Option<String>> {
    let Some(row) = rows.get(index) else {
        log::debug!("Info row {} absent", index);
        return Ok(None);
    };

    let value = try_first(*row, css)?.map(read);
    if value.is_none() {
        log::debug!("Info row {} has no {}", index, css);
    }
    Ok(value)
}

fn split_list(value: &str, separator: &str) -> Vec<String> {
    value
        .split(separator)
        .map(|part| part.trim().to_string())
        .collect()
}

/// Strips the description label and boilerplate from the panel text
///
/// Returns an empty string when what remains is the site's
/// "no summary" placeholder.
fn clean_plot(raw: &str) -> String {
    let body: String = raw.chars().skip(DESCRIPTION_PREFIX_LEN).collect();
    let body = body.replace("<br>", "").replace("Summary:", "");
    let body = body.trim();

    if body.contains(BRAND_NAME) {
        String::new()
    } else {
        body.to_string()
    }
}

fn parse_chapter_list(root: ElementRef) -> Result<Vec<ChapterRef>> {
    let panel = first(root, "div.panel-story-chapter-list")?;
    let list = first(panel, "ul.row-content-chapter")?;

    all(list, "li.a-h")?
        .into_iter()
        .map(|item| {
            let link = first(item, "a")?;
            Ok(ChapterRef {
                label: text(link),
                url: attr(link, "href")?,
                uploaded: text(first(item, "span.chapter-time.text-nowrap")?),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = include_str!("../../tests/fixtures/manga_full.html");
    const NO_AUTHORS: &str = include_str!("../../tests/fixtures/manga_no_authors.html");
    const PLACEHOLDER: &str = include_str!("../../tests/fixtures/manga_placeholder.html");

    const PLOT: &str = "In a world where awakened beings called hunters must battle monsters,\nSung Jinwoo is known as the weakest hunter of all mankind.";

    #[test]
    fn test_description_prefix_matches_label() {
        assert_eq!(DESCRIPTION_PREFIX_LEN, 15);
        assert!(FULL.contains("<h3>Description :</h3>"));
    }

    #[test]
    fn test_parse_full_record() {
        let record = parse_manga_info(FULL).unwrap();

        assert_eq!(record.title, "Solo Leveling");
        assert_eq!(record.cover, "https://avt.mkklcdnv6temp.com/19/k/1-1583464475.jpg");
        assert_eq!(record.plot, PLOT);
        assert_eq!(record.genres, vec!["Action", "Adventure", "Fantasy"]);
        assert_eq!(
            record.alternative_names,
            Some(vec![
                "Only I Level Up".to_string(),
                "Na Honjaman Level Up".to_string(),
                "나 혼자만 레벨업".to_string(),
            ])
        );
        assert_eq!(
            record.authors,
            Some(vec!["Chugong".to_string(), "Jang Sung-Lak".to_string()])
        );
        assert_eq!(record.status, Some("Completed".to_string()));
    }

    #[test]
    fn test_chapters_in_page_order() {
        let record = parse_manga_info(FULL).unwrap();

        assert_eq!(record.chapters.len(), 3);
        assert_eq!(
            record.chapters[0],
            ChapterRef {
                label: "Chapter 201: Side Story 21".to_string(),
                url: "https://chapmanganato.to/manga-dr980474/chapter-201".to_string(),
                uploaded: "Jan 01,22".to_string(),
            }
        );
        assert_eq!(record.chapters[2].label, "Chapter 1");
        assert_eq!(record.chapters[2].uploaded, "Mar 04,18");
    }

    #[test]
    fn test_status_keeps_cell_whitespace() {
        let html = FULL.replace(
            r#"<td class="table-value">Completed</td>"#,
            "<td class=\"table-value\">\n Ongoing\n</td>",
        );
        assert_ne!(html, FULL);

        let record = parse_manga_info(&html).unwrap();
        assert_eq!(record.status.as_deref(), Some("\n Ongoing\n"));
        assert_eq!(
            record.authors,
            Some(vec!["Chugong".to_string(), "Jang Sung-Lak".to_string()])
        );
    }

    #[test]
    fn test_missing_authors_row() {
        let record = parse_manga_info(NO_AUTHORS).unwrap();

        assert_eq!(record.title, "Solo Leveling");
        assert_eq!(record.plot, PLOT);
        assert_eq!(record.genres.len(), 3);
        assert_eq!(record.chapters.len(), 3);
        assert!(record.alternative_names.is_some());
        assert_eq!(record.authors, None);
        // Status shifts into the authors slot and is no longer found by position
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_placeholder_plot_is_empty() {
        let record = parse_manga_info(PLACEHOLDER).unwrap();

        assert_eq!(record.plot, "");
        assert_eq!(record.title, "Untitled Oneshot");
        assert_eq!(record.alternative_names, None);
        assert_eq!(record.authors, None);
        assert_eq!(record.status, None);
        assert!(record.chapters.is_empty());
    }

    #[test]
    fn test_clean_plot() {
        assert_eq!(clean_plot("\nDescription :\nA plot.\n"), "A plot.");
        assert_eq!(clean_plot("\nDescription :\nSummary: A<br> plot."), "A plot.");
        assert_eq!(clean_plot("\nDescription :\nRead it on MangaNato.com"), "");
        assert_eq!(clean_plot("short"), "");
    }

    #[test]
    fn test_missing_date_span_fails_whole_call() {
        let html = FULL.replacen(
            r#"<span class="chapter-time text-nowrap" title="Dec 24,2021 10:00">Dec 24,21</span>"#,
            "",
            1,
        );

        match parse_manga_info(&html) {
            Err(MangaNatoError::ElementNotFound(what)) => {
                assert_eq!(what, "span.chapter-time.text-nowrap")
            }
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_genre_cell_fails() {
        let html = r#"
        <html><body>
        <div class="story-info-left"><img src="cover.jpg"></div>
        <div class="story-info-right">
            <h1>Title</h1>
            <table class="variations-tableInfo"><tr><td>Genres :</td></tr></table>
        </div>
        <div class="panel-story-info-description">x</div>
        </body></html>
        "#;

        match parse_manga_info(html) {
            Err(MangaNatoError::ElementNotFound(what)) => assert_eq!(what, "td.table-value"),
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_fails() {
        let html = r#"
        <html><body>
        <div class="story-info-left"><img src="cover.jpg"></div>
        <div class="story-info-right">
            <h1>Title</h1>
            <table class="variations-tableInfo"></table>
        </div>
        <div class="panel-story-info-description">x</div>
        </body></html>
        "#;

        assert!(matches!(
            parse_manga_info(html),
            Err(MangaNatoError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_missing_cover_fails() {
        let html = FULL.replace(r#"<div class="story-info-left">"#, r#"<div class="story-info">"#);
        match parse_manga_info(&html) {
            Err(MangaNatoError::ElementNotFound(what)) => assert_eq!(what, "div.story-info-left"),
            other => panic!("Expected ElementNotFound error, got {:?}", other),
        }
    }
}
