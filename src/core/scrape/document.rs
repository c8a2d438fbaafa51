use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::info;

use crate::utils::Result;

/// One chart entry in the listing markup.
pub(crate) static ENTRY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.ipc-metadata-list-summary-item").unwrap());

/// Read the saved chart page as UTF-8. Single-shot; an unreadable path
/// aborts the whole run.
pub fn load_listing(path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Locate every chart entry in the listing and return each as an owned
/// HTML fragment, in document order. Zero matches is a valid outcome.
///
/// Fragments are owned strings so each one can be handed to a concurrent
/// task without tying the task to the listing's document tree.
pub fn locate_entries(listing: &str) -> Vec<String> {
    let document = Html::parse_document(listing);
    let entries: Vec<String> = document
        .select(&ENTRY_SELECTOR)
        .map(|entry| entry.html())
        .collect();

    info!("Found {} movie entries in the listing document", entries.len());
    entries
}
