use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookrack_catalog::Shelf;

/// List the catalog with 1-based indices and purchase counts.
pub(crate) fn run_view_catalog(shelf: &Shelf) {
    if shelf.catalog().is_empty() {
        log::info!("The catalog is empty.");
        return;
    }
    for (i, book) in shelf.catalog().iter().enumerate() {
        log::info!(
            "{} {} - Purchased {} times",
            format!("{}.", i + 1).if_supports_color(Stdout, |t| t.cyan()),
            book.description(),
            book.purchase_count,
        );
    }
}

pub(crate) fn run_display_genres(shelf: &Shelf) {
    log::info!("Available genres: {}", shelf.genres().join(", "));
}

pub(crate) fn run_filter_by_genre(shelf: &Shelf, genre: &str) {
    let matches = shelf.filter_by_genre(genre);
    if matches.is_empty() {
        log::info!("No books found for the genre: {}", genre);
        return;
    }
    for book in matches {
        log::info!("{}", book.description());
    }
}

pub(crate) fn run_search_author(shelf: &Shelf, author: &str) {
    let matches = shelf.search_by_author(author);
    if matches.is_empty() {
        log::info!("No books found by {}.", author);
        return;
    }
    log::info!(
        "Books by {}:",
        author.if_supports_color(Stdout, |t| t.bold()),
    );
    for book in matches {
        log::info!("  {}", book.description());
    }
}

pub(crate) fn run_search_title(shelf: &Shelf, title: &str) {
    match shelf.search_by_title(title) {
        Some(book) => log::info!(
            "{} Book found: {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            book.description(),
        ),
        None => log::info!("No book found with the title: {}", title),
    }
}

pub(crate) fn run_top_purchased(shelf: &Shelf) {
    log::info!(
        "{}",
        "Top purchased books:".if_supports_color(Stdout, |t| t.bold()),
    );
    for (title, count) in shelf.top_purchased(3) {
        log::info!("  {} - Purchased {} times", title, count);
    }
}
