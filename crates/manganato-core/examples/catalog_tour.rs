//! Walks the live catalog: latest updates, one manga, one chapter
//!
//! Run with: cargo run --example catalog_tour -p manganato-core

use manganato_core::MangaNatoScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = MangaNatoScraper::new()?;

    println!("Fetching recent updates...\n");

    let updates = scraper.get_recent_updates(1).await?;

    if updates.is_empty() {
        println!("No updates found!");
        return Ok(());
    }

    println!("Found {} titles:\n", updates.len());

    for (position, entry) in updates.iter().take(5) {
        println!("{}. {}", position, entry.title);
        println!("   Latest: {}", entry.latest_chapter);
        println!("   URL: {}", entry.url);
        println!();
    }

    let Some(entry) = updates.get(1) else {
        return Ok(());
    };

    println!("Getting details for: {}\n", entry.title);
    let manga = scraper.get_manga_info(&entry.url).await?;

    println!("Genres: {}", manga.genres.join(", "));
    if let Some(ref authors) = manga.authors {
        println!("Authors: {}", authors.join(", "));
    }
    if let Some(ref status) = manga.status {
        println!("Status: {}", status);
    }
    println!("Chapters: {}\n", manga.chapters.len());

    if let Some(chapter) = manga.chapters.first() {
        match scraper.get_chapter_images(&chapter.url).await {
            Ok(pages) => {
                println!("✓ {} has {} pages", chapter.label, pages.len());
                for page in pages.iter().take(3) {
                    println!("  {}", page);
                }
            }
            Err(e) => println!("✗ Failed to read {}: {}", chapter.label, e),
        }
    }

    Ok(())
}
