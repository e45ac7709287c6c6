use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::models::{Catalog, ProductEntry};
use crate::parsers::{clean_text, strip_variant_suffix};

/// Parse raw YML feed text into a [`Catalog`].
///
/// The feed is read with the tolerant HTML parser: malformed input
/// degrades to a document without matching nodes, so the worst case is
/// an empty catalog, never an error. Offers sharing a `group_id` are
/// size variants of one product; only the first SKU per group is kept,
/// in feed document order. Offers without a `group_id` fall back to
/// their own `id` and stay singleton groups.
pub fn parse_feed(raw: &str) -> Catalog {
    let document = Html::parse_document(raw);

    let category_selector = Selector::parse("category").unwrap();
    let offer_selector = Selector::parse("offer").unwrap();
    let name_selector = Selector::parse("name").unwrap();
    let url_selector = Selector::parse("url").unwrap();
    let picture_selector = Selector::parse("picture").unwrap();
    let price_selector = Selector::parse("price").unwrap();
    // The HTML parser lowercases tag names, so <categoryId> matches here.
    let category_id_selector = Selector::parse("categoryid").unwrap();

    let mut catalog = Catalog::default();

    for category in document.select(&category_selector) {
        let Some(id) = category.value().attr("id") else {
            continue;
        };
        let name = clean_text(&category.text().collect::<String>());
        catalog.categories_by_name.insert(name.to_lowercase(), id.to_string());
        catalog.categories.insert(id.to_string(), name);
    }

    let mut seen_groups = HashSet::new();

    for offer in document.select(&offer_selector) {
        let id = offer.value().attr("id").unwrap_or_default();
        let group_key = offer.value().attr("group_id").unwrap_or(id);
        if !seen_groups.insert(group_key.to_string()) {
            continue;
        }

        catalog.offers.push(ProductEntry {
            id: id.to_string(),
            group_key: group_key.to_string(),
            name: strip_variant_suffix(&child_text(offer, &name_selector)),
            url: child_text(offer, &url_selector),
            picture: child_text(offer, &picture_selector),
            price: child_text(offer, &price_selector),
            category_id: child_text(offer, &category_id_selector),
        });
    }

    catalog
}

fn child_text(offer: ElementRef, selector: &Selector) -> String {
    offer
        .select(selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .unwrap_or_default()
}
