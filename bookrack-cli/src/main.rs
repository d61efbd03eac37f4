//! bookrack CLI
//!
//! Interactive catalog/library manager for digital books: browse and search
//! the catalog, purchase books into a personal library, mark them read, and
//! save/load the purchased set to a flat file.

mod commands;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookrack_catalog::{Book, Shelf};

#[derive(Parser)]
#[command(name = "bookrack")]
#[command(about = "Manage a catalog of ebooks and your purchased library", long_about = None)]
struct Cli {
    /// Default purchases file offered by the save/load prompts
    #[arg(short, long, default_value = "purchases.txt")]
    purchases: PathBuf,
}

fn main() {
    init_logger();
    let cli = Cli::parse();
    let mut shelf = seed_shelf();

    loop {
        print_menu();
        let Some(choice) = read_line("Choose an option") else {
            break;
        };

        match choice.as_str() {
            "1" => commands::run_view_catalog(&shelf),
            "2" => {
                commands::run_view_catalog(&shelf);
                if let Some(index) = read_index("Enter the number of the book you want to purchase")
                {
                    commands::run_buy(&mut shelf, index);
                }
            }
            "3" => commands::run_view_library(&shelf),
            "4" => {
                commands::run_view_library(&shelf);
                if let Some(index) = read_index("Enter the number of the book you want to read") {
                    commands::run_read(&mut shelf, index);
                }
            }
            "5" => {
                let Some(author) = read_line("Enter the author's name") else {
                    break;
                };
                commands::run_search_author(&shelf, &author);
            }
            "6" => {
                let Some(title) = read_line("Enter the title of the book") else {
                    break;
                };
                commands::run_search_title(&shelf, &title);
            }
            "7" => commands::run_display_genres(&shelf),
            "8" => {
                let Some(genre) = read_line("Enter the genre") else {
                    break;
                };
                commands::run_filter_by_genre(&shelf, &genre);
            }
            "9" => commands::run_top_purchased(&shelf),
            "10" => {
                let path = read_path("Enter the file name to save purchases", &cli.purchases);
                report(commands::run_save(&shelf, &path));
            }
            "11" => {
                let path = read_path("Enter the file name to load purchases", &cli.purchases);
                report(commands::run_load(&mut shelf, &path));
            }
            "12" => break,
            other => log::warn!("Unknown option: {}", other),
        }
    }
}

/// Message-only format so info-level output reads as plain CLI text;
/// `RUST_LOG` still adjusts verbosity for debugging.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Seed the catalog with the launch titles.
fn seed_shelf() -> Shelf {
    let mut shelf = Shelf::new();
    shelf.add_to_catalog(Book::new("Moby Dick", "Herman Melville", 635, "Adventure"));
    shelf.add_to_catalog(Book::new("Sherlock Holmes", "Arthur Conan Doyle", 307, "Mystery"));
    shelf.add_to_catalog(Book::new("Dracula", "Bram Stoker", 418, "Horror"));
    shelf.add_to_catalog(Book::new("Pride and Prejudice", "Jane Austen", 279, "Romance"));
    shelf
}

const MENU: &[&str] = &[
    "1. View Catalog",
    "2. Buy a Book",
    "3. View Library",
    "4. Read a Book",
    "5. Search by Author",
    "6. Search by Title",
    "7. Display Genres",
    "8. Filter by Genre",
    "9. Top Purchased Books",
    "10. Save Purchases",
    "11. Load Purchases",
    "12. Exit",
];

fn print_menu() {
    println!();
    println!("{}", "bookrack".if_supports_color(Stdout, |t| t.bold()));
    for entry in MENU {
        println!("  {}", entry);
    }
}

/// Prompt for one trimmed line of input. Returns `None` on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}: ", prompt);
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Prompt for a 1-based listing index. Non-numeric input is reported and
/// the operation abandoned.
fn read_index(prompt: &str) -> Option<usize> {
    let raw = read_line(prompt)?;
    match raw.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            log::warn!("Invalid input. Enter a number.");
            None
        }
    }
}

/// Prompt for a file path, falling back to the default on an empty line.
fn read_path(prompt: &str, default: &Path) -> PathBuf {
    let prompt = format!("{} [{}]", prompt, default.display());
    match read_line(&prompt) {
        Some(raw) if !raw.is_empty() => PathBuf::from(raw),
        _ => default.to_path_buf(),
    }
}

fn report(result: Result<(), error::CliError>) {
    if let Err(e) = result {
        log::warn!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
    }
}
