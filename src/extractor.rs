use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::data_models::{KitespotDraft, NO_DESCRIPTION, PageContent, UNKNOWN_NAME};

// Compiled once, these never change between pages.
static NAME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 is a valid selector"));
static DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("p is a valid selector"));

/// Pull the spot name and description out of a page.
///
/// Takes the first `<h1>` and the first `<p>` in document order. The html5ever
/// parser recovers from broken markup, so a missing element just falls back to
/// its default instead of failing.
pub fn extract(content: &PageContent) -> KitespotDraft {
    let document = Html::parse_document(content.as_str());

    let name = first_text(&document, &NAME_SELECTOR).unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let description =
        first_text(&document, &DESCRIPTION_SELECTOR).unwrap_or_else(|| NO_DESCRIPTION.to_string());

    KitespotDraft { name, description }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
