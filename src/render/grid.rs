use html_escape::encode_double_quoted_attribute;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::models::{Catalog, ProductEntry};
use crate::render::card::{build_card, column_class};
use crate::render::rewrite::{push_open_tag, rewrite_element, Replacements};

pub const GRID_MARKER_CLASS: &str = "js-store-grid-cont";
pub const GRID_PRELOADER_CLASS: &str = "js-store-grid-cont-preloader";
const DEFAULT_GRID_CLASS: &str = "js-store-grid-cont t-store__grid-cont t-container";

static GRID: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".js-store-grid-cont").expect("Invalid grid selector"));
static GRID_PRELOADER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".js-store-grid-cont-preloader").expect("Invalid grid preloader selector")
});
static CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".t-store__card").expect("Invalid card selector"));

/// Whether the container already holds rendered cards (host templates
/// sometimes pre-render the grid server-side).
pub fn has_cards(store: ElementRef) -> bool {
    store.select(&CARD).next().is_some()
}

/// Render product cards into one placeholder container.
///
/// Returns the container's rewritten outer HTML, or `None` when there
/// is nothing to render (empty catalog or no entry in the resolved
/// category) so the caller leaves the placeholder untouched. The grid
/// target is reused when the template already has one, grafted after
/// the grid preloader when present, and appended with stock classes
/// otherwise. Grid contents are replaced wholesale, so rendering the
/// same container again never duplicates cards.
pub fn render_container(
    store: ElementRef,
    catalog: &Catalog,
    category_id: &str,
    limit: usize,
    currency_suffix: &str,
) -> Option<String> {
    if catalog.is_empty() {
        return None;
    }

    let matching: Vec<&ProductEntry> = catalog
        .offers
        .iter()
        .filter(|offer| category_id.is_empty() || offer.category_id == category_id)
        .collect();
    if matching.is_empty() {
        return None;
    }

    let column = column_class(store);
    let cards: String = matching
        .iter()
        .take(limit)
        .map(|offer| build_card(offer, &column, currency_suffix))
        .collect();

    if let Some(grid) = store.select(&GRID).next() {
        let mut replacement = String::new();
        push_open_tag(grid.value(), &mut replacement);
        replacement.push_str(&cards);
        replacement.push_str("</");
        replacement.push_str(grid.value().name());
        replacement.push('>');

        let mut replacements = Replacements::new();
        replacements.insert(grid.id(), replacement);
        return Some(rewrite_element(store, &replacements));
    }

    if let Some(preloader) = store.select(&GRID_PRELOADER).next() {
        let grid_class = preloader
            .value()
            .attr("class")
            .unwrap_or_default()
            .replace(GRID_PRELOADER_CLASS, GRID_MARKER_CLASS);

        let mut replacement = preloader.html();
        replacement.push_str("<div class=\"");
        replacement.push_str(&encode_double_quoted_attribute(&grid_class));
        replacement.push_str("\">");
        replacement.push_str(&cards);
        replacement.push_str("</div>");

        let mut replacements = Replacements::new();
        replacements.insert(preloader.id(), replacement);
        return Some(rewrite_element(store, &replacements));
    }

    let mut out = String::new();
    push_open_tag(store.value(), &mut out);
    out.push_str(&store.inner_html());
    out.push_str("<div class=\"");
    out.push_str(DEFAULT_GRID_CLASS);
    out.push_str("\">");
    out.push_str(&cards);
    out.push_str("</div></");
    out.push_str(store.value().name());
    out.push('>');
    Some(out)
}
