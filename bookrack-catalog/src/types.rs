//! Data model types for the book catalog and user library.

// ── Book ────────────────────────────────────────────────────────────────────

/// A single title in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Page count. Expected positive; the constructor does not validate.
    pub pages: u32,
    pub genre: String,
    /// Whether the user has marked this book read. Starts false and only
    /// ever transitions to true.
    pub read: bool,
    /// How many times this book has been purchased. Only ever increments.
    pub purchase_count: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            genre: genre.into(),
            read: false,
            purchase_count: 0,
        }
    }

    /// One-line rendering of the book's details.
    pub fn description(&self) -> String {
        format!(
            "Title: {}, Author: {}, Pages: {}, Genre: {}",
            self.title, self.author, self.pages, self.genre
        )
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

// ── Library entry ───────────────────────────────────────────────────────────

/// One entry in the user's library.
///
/// A purchase shares the catalog's `Book` — the entry is a handle into the
/// catalog, and duplicate-purchase detection compares handles, not field
/// values. Books restored from a purchases file have no catalog counterpart
/// and are carried as owned values instead; they start unread with a zero
/// purchase count and cannot block a later purchase of a same-titled
/// catalog book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEntry {
    /// Index into the catalog; the book itself lives there.
    Shelved(usize),
    /// A catalog-detached book loaded from a purchases file.
    Imported(Book),
}
