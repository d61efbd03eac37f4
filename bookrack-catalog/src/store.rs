//! Flat-file persistence for the purchases list.
//!
//! Format: plain text, one record per line, four comma-joined fields:
//!
//! ```text
//! title,author,pages,genre
//! ```
//!
//! No header, no quoting, no escaping — a field containing a literal comma
//! will corrupt parsing on reload, which is a documented limitation of the
//! format. `read` and `purchase_count` are not persisted; restored books
//! start unread with a zero count.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::Book;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The purchases file does not exist.
    #[error("no purchases file at {path}")]
    NotFound { path: String },

    /// I/O error reading or writing the purchases file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A line did not parse as a purchases record
    #[error("malformed record in {path} at line {line}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },
}

/// Write books to a purchases file, overwriting any existing contents.
///
/// Any I/O failure propagates; a partially written file is never reported
/// as success.
pub fn save<'a>(
    path: &Path,
    books: impl IntoIterator<Item = &'a Book>,
) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for book in books {
        writeln!(
            out,
            "{},{},{},{}",
            book.title, book.author, book.pages, book.genre
        )
        .map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}

/// Parse a purchases file into books.
///
/// All-or-nothing: the first malformed record (wrong field count, or a
/// pages field that is not a positive integer) fails the whole load with
/// its line number, so callers never see a partial result. Blank lines are
/// skipped. A missing file is reported as [`StoreError::NotFound`] so the
/// caller can treat it as a notice rather than a failure.
pub fn load(path: &Path) -> Result<Vec<Book>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let malformed = |line, reason: String| StoreError::Malformed {
        path: path.display().to_string(),
        line,
        reason,
    };

    let mut books = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(malformed(
                idx + 1,
                format!("expected 4 fields, got {}", fields.len()),
            ));
        }
        let pages: u32 = fields[2]
            .trim()
            .parse()
            .map_err(|_| malformed(idx + 1, format!("pages is not a number: {:?}", fields[2])))?;
        if pages == 0 {
            return Err(malformed(idx + 1, "pages must be positive".to_string()));
        }
        books.push(Book::new(fields[0], fields[1], pages, fields[3]));
    }

    Ok(books)
}
