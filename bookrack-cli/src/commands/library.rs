use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookrack_catalog::{BuyOutcome, ReadOutcome, Shelf};

/// Purchase a catalog book by its 1-based listing index.
///
/// An out-of-range index is a silent no-op; the listing shown beforehand is
/// the user's feedback.
pub(crate) fn run_buy(shelf: &mut Shelf, index: usize) {
    match shelf.buy(index) {
        BuyOutcome::Purchased { title } => log::info!(
            "{} You have purchased \"{}\"!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            title,
        ),
        BuyOutcome::AlreadyOwned { title } => {
            log::info!("You already own \"{}\".", title);
        }
        BuyOutcome::InvalidIndex => {}
    }
}

/// List the library with 1-based indices and read status.
pub(crate) fn run_view_library(shelf: &Shelf) {
    let books = shelf.library_books();
    if books.is_empty() {
        log::info!("Your library is empty.");
        return;
    }
    for (i, book) in books.iter().enumerate() {
        log::info!(
            "{} {}, Read: {}",
            format!("{}.", i + 1).if_supports_color(Stdout, |t| t.cyan()),
            book.description(),
            if book.read { "Yes" } else { "No" },
        );
    }
}

/// Mark a library book read by its 1-based listing index.
///
/// Already-read entries and out-of-range indices are silent no-ops.
pub(crate) fn run_read(shelf: &mut Shelf, index: usize) {
    match shelf.read_book(index) {
        ReadOutcome::Marked { title } => log::info!(
            "{} You have marked \"{}\" as read!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            title,
        ),
        ReadOutcome::AlreadyRead | ReadOutcome::InvalidIndex => {}
    }
}
