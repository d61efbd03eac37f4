use bookrack_catalog::{Book, BuyOutcome, ReadOutcome, Shelf};

fn sample_shelf() -> Shelf {
    let mut shelf = Shelf::new();
    shelf.add_to_catalog(Book::new("Moby Dick", "Herman Melville", 635, "Adventure"));
    shelf.add_to_catalog(Book::new("Sherlock Holmes", "Arthur Conan Doyle", 307, "Mystery"));
    shelf.add_to_catalog(Book::new("Dracula", "Bram Stoker", 418, "Horror"));
    shelf.add_to_catalog(Book::new("Pride and Prejudice", "Jane Austen", 279, "Romance"));
    shelf
}

#[test]
fn buy_adds_to_library_and_counts() {
    let mut shelf = sample_shelf();

    let outcome = shelf.buy(1);
    assert_eq!(
        outcome,
        BuyOutcome::Purchased {
            title: "Moby Dick".to_string()
        }
    );
    assert_eq!(shelf.library_books().len(), 1);
    assert_eq!(shelf.catalog()[0].purchase_count, 1);
}

#[test]
fn repeat_buy_is_idempotent() {
    let mut shelf = sample_shelf();

    shelf.buy(1);
    let second = shelf.buy(1);
    assert_eq!(
        second,
        BuyOutcome::AlreadyOwned {
            title: "Moby Dick".to_string()
        }
    );
    assert_eq!(shelf.library_books().len(), 1);
    assert_eq!(shelf.catalog()[0].purchase_count, 1);
}

#[test]
fn buy_out_of_range_is_a_noop() {
    let mut shelf = sample_shelf();

    assert_eq!(shelf.buy(0), BuyOutcome::InvalidIndex);
    assert_eq!(shelf.buy(5), BuyOutcome::InvalidIndex);
    assert!(shelf.library_books().is_empty());
    assert!(shelf.catalog().iter().all(|b| b.purchase_count == 0));
}

#[test]
fn read_marks_once() {
    let mut shelf = sample_shelf();
    shelf.buy(3);

    let first = shelf.read_book(1);
    assert_eq!(
        first,
        ReadOutcome::Marked {
            title: "Dracula".to_string()
        }
    );
    assert_eq!(shelf.read_book(1), ReadOutcome::AlreadyRead);
    assert!(shelf.library_books()[0].read);
}

#[test]
fn read_out_of_range_is_a_noop() {
    let mut shelf = sample_shelf();
    shelf.buy(1);

    assert_eq!(shelf.read_book(0), ReadOutcome::InvalidIndex);
    assert_eq!(shelf.read_book(2), ReadOutcome::InvalidIndex);
    assert!(!shelf.library_books()[0].read);
}

#[test]
fn read_status_is_visible_in_catalog_listing() {
    // A purchase shares the catalog book, so marking it read in the library
    // flips the same entry the catalog shows.
    let mut shelf = sample_shelf();
    shelf.buy(2);
    shelf.read_book(1);

    assert!(shelf.catalog()[1].read);
}

#[test]
fn top_purchased_ranks_descending_with_stable_ties() {
    let mut shelf = sample_shelf();
    shelf.buy(3); // Dracula: 1

    let top = shelf.top_purchased(3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0], ("Dracula", 1));
    // Remaining entries are tied at zero and keep catalog order.
    assert_eq!(top[1], ("Moby Dick", 0));
    assert_eq!(top[2], ("Sherlock Holmes", 0));

    // Ranking works on a copy; the catalog itself is untouched.
    assert_eq!(shelf.catalog()[0].title, "Moby Dick");
    assert_eq!(shelf.catalog()[2].title, "Dracula");
}

#[test]
fn top_purchased_caps_at_catalog_size() {
    let mut shelf = Shelf::new();
    shelf.add_to_catalog(Book::new("Dracula", "Bram Stoker", 418, "Horror"));

    assert_eq!(shelf.top_purchased(3).len(), 1);
    assert!(Shelf::new().top_purchased(3).is_empty());
}

#[test]
fn search_by_title_is_case_insensitive() {
    let shelf = sample_shelf();

    let hit = shelf.search_by_title("dracula").unwrap();
    assert_eq!(hit.title, "Dracula");

    // Every catalog title is findable whatever the input case.
    for book in shelf.catalog() {
        assert!(shelf.search_by_title(&book.title.to_uppercase()).is_some());
        assert!(shelf.search_by_title(&book.title.to_lowercase()).is_some());
    }

    assert!(shelf.search_by_title("Hobbit").is_none());
    assert!(Shelf::new().search_by_title("Dracula").is_none());
}

#[test]
fn search_by_author_is_case_insensitive() {
    let shelf = sample_shelf();

    let hits = shelf.search_by_author("bram stoker");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dracula");

    assert!(shelf.search_by_author("Mary Shelley").is_empty());
}

#[test]
fn genres_are_sorted_and_deduplicated() {
    let mut shelf = sample_shelf();
    shelf.add_to_catalog(Book::new("Frankenstein", "Mary Shelley", 280, "Horror"));

    assert_eq!(
        shelf.genres(),
        vec!["Adventure", "Horror", "Mystery", "Romance"]
    );
}

#[test]
fn filter_by_genre_is_case_sensitive() {
    let shelf = sample_shelf();

    let hits = shelf.filter_by_genre("Horror");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dracula");

    assert!(shelf.filter_by_genre("horror").is_empty());
    assert!(shelf.filter_by_genre("Sci-Fi").is_empty());
}
