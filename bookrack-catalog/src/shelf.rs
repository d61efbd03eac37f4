//! The catalog/library manager and its query operations.
//!
//! [`Shelf`] owns two ordered collections: the catalog of every title
//! available for purchase, and the library of entries the user owns. All
//! mutation and search logic lives here; rendering belongs to the caller.

use std::cmp::Reverse;
use std::path::Path;

use crate::store::{self, StoreError};
use crate::types::{Book, LibraryEntry};

// ── Operation outcomes ──────────────────────────────────────────────────────

/// Outcome of a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuyOutcome {
    /// The book was appended to the library and its purchase count bumped.
    Purchased { title: String },
    /// The same catalog entry is already in the library; nothing changed.
    AlreadyOwned { title: String },
    /// Index outside `[1, catalog len]`; nothing changed.
    InvalidIndex,
}

/// Outcome of marking a library entry read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The entry was newly marked read.
    Marked { title: String },
    /// The entry was already read; nothing changed.
    AlreadyRead,
    /// Index outside `[1, library len]`; nothing changed.
    InvalidIndex,
}

// ── Shelf ───────────────────────────────────────────────────────────────────

/// The catalog of available books plus the user's purchased library.
///
/// Both collections preserve insertion order. Indices passed to [`buy`] and
/// [`read_book`] are 1-based into the current ordering, matching what a
/// listing presents to the user; out-of-range indices are reported as
/// `InvalidIndex` outcomes rather than errors.
///
/// [`buy`]: Shelf::buy
/// [`read_book`]: Shelf::read_book
#[derive(Debug, Default)]
pub struct Shelf {
    catalog: Vec<Book>,
    library: Vec<LibraryEntry>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the catalog. Duplicates are permitted.
    pub fn add_to_catalog(&mut self, book: Book) {
        self.catalog.push(book);
    }

    /// All catalog entries in insertion order.
    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    /// Distinct genre values across the catalog, sorted.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self.catalog.iter().map(|b| b.genre.as_str()).collect();
        genres.sort_unstable();
        genres.dedup();
        genres
    }

    /// Catalog entries whose genre matches exactly (case-sensitive), in
    /// catalog order.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Book> {
        self.catalog.iter().filter(|b| b.genre == genre).collect()
    }

    /// Purchase the catalog book at the given 1-based index.
    ///
    /// A repeat purchase of the same catalog entry leaves the library and
    /// the purchase count untouched. The check compares catalog handles, so
    /// an [`LibraryEntry::Imported`] entry with matching fields does not
    /// count as owned.
    pub fn buy(&mut self, index: usize) -> BuyOutcome {
        if index == 0 || index > self.catalog.len() {
            return BuyOutcome::InvalidIndex;
        }
        let slot = index - 1;
        let owned = self
            .library
            .iter()
            .any(|e| matches!(e, LibraryEntry::Shelved(i) if *i == slot));

        let book = &mut self.catalog[slot];
        if owned {
            BuyOutcome::AlreadyOwned {
                title: book.title.clone(),
            }
        } else {
            book.purchase_count += 1;
            let title = book.title.clone();
            self.library.push(LibraryEntry::Shelved(slot));
            BuyOutcome::Purchased { title }
        }
    }

    /// The library's books in purchase order, with imported entries resolved
    /// alongside shelved ones.
    pub fn library_books(&self) -> Vec<&Book> {
        self.library.iter().map(|e| self.resolve(e)).collect()
    }

    fn resolve<'a>(&'a self, entry: &'a LibraryEntry) -> &'a Book {
        match entry {
            LibraryEntry::Shelved(i) => &self.catalog[*i],
            LibraryEntry::Imported(book) => book,
        }
    }

    /// Mark the library book at the given 1-based index as read.
    pub fn read_book(&mut self, index: usize) -> ReadOutcome {
        if index == 0 || index > self.library.len() {
            return ReadOutcome::InvalidIndex;
        }
        let book = match &mut self.library[index - 1] {
            LibraryEntry::Shelved(i) => &mut self.catalog[*i],
            LibraryEntry::Imported(book) => book,
        };
        if book.read {
            ReadOutcome::AlreadyRead
        } else {
            book.mark_read();
            ReadOutcome::Marked {
                title: book.title.clone(),
            }
        }
    }

    /// The `n` most-purchased catalog titles with their counts.
    ///
    /// Ranks a copy; the catalog's own order is untouched. The sort is
    /// stable, so equal counts keep their relative catalog order.
    pub fn top_purchased(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<&Book> = self.catalog.iter().collect();
        ranked.sort_by_key(|b| Reverse(b.purchase_count));
        ranked
            .into_iter()
            .take(n)
            .map(|b| (b.title.as_str(), b.purchase_count))
            .collect()
    }

    /// Linear scan for books by an author, case-insensitive, catalog order.
    pub fn search_by_author(&self, name: &str) -> Vec<&Book> {
        let needle = name.to_lowercase();
        self.catalog
            .iter()
            .filter(|b| b.author.to_lowercase() == needle)
            .collect()
    }

    /// Binary search for a title, case-insensitive.
    ///
    /// The catalog copy is sorted by lowercased title and the probes compare
    /// lowercased strings, so the ordering and the predicate agree even for
    /// titles differing only in case.
    pub fn search_by_title(&self, title: &str) -> Option<&Book> {
        let mut sorted: Vec<&Book> = self.catalog.iter().collect();
        sorted.sort_by_cached_key(|b| b.title.to_lowercase());

        let needle = title.to_lowercase();
        let mut low = 0;
        let mut high = sorted.len();
        while low < high {
            let mid = low + (high - low) / 2;
            let mid_title = sorted[mid].title.to_lowercase();
            if mid_title == needle {
                return Some(sorted[mid]);
            }
            if mid_title < needle {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        None
    }

    /// Write the library to a purchases file, one record per line.
    pub fn save_purchases(&self, path: &Path) -> Result<(), StoreError> {
        store::save(path, self.library_books())
    }

    /// Append the contents of a purchases file to the library.
    ///
    /// The load is atomic: the whole file is parsed first, and a malformed
    /// record leaves the library exactly as it was. Restored entries are
    /// catalog-detached ([`LibraryEntry::Imported`]) with `read` and
    /// `purchase_count` reset. Returns the number of books loaded.
    pub fn load_purchases(&mut self, path: &Path) -> Result<usize, StoreError> {
        let books = store::load(path)?;
        let count = books.len();
        self.library
            .extend(books.into_iter().map(LibraryEntry::Imported));
        Ok(count)
    }
}
