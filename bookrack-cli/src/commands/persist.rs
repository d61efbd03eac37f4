use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookrack_catalog::{Shelf, StoreError};

use crate::error::CliError;

/// Save the library to a purchases file.
pub(crate) fn run_save(shelf: &Shelf, path: &Path) -> Result<(), CliError> {
    shelf.save_purchases(path)?;
    log::info!(
        "{} Purchases saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Load a purchases file into the library.
///
/// A missing file is a notice, not an error; the load itself is atomic, so
/// a malformed file leaves the library untouched.
pub(crate) fn run_load(shelf: &mut Shelf, path: &Path) -> Result<(), CliError> {
    match shelf.load_purchases(path) {
        Ok(count) => {
            log::info!(
                "{} Purchases loaded! ({} book{})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                count,
                if count == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(StoreError::NotFound { .. }) => {
            log::info!("No saved purchases found.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
