mod catalog;
mod library;
mod persist;

pub(crate) use catalog::{
    run_display_genres, run_filter_by_genre, run_search_author, run_search_title,
    run_top_purchased, run_view_catalog,
};
pub(crate) use library::{run_buy, run_read, run_view_library};
pub(crate) use persist::{run_load, run_save};
