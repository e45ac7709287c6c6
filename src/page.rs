use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::category::{display_limit_for_path, resolve_category_id};
use crate::config::Config;
use crate::feed::{fetch_feed, parse_feed};
use crate::render::{has_cards, render_container, rewrite_document, Replacements};

static STORE_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".t-store.js-store").expect("Invalid store container selector"));

/// Rewrite a host page so its store placeholders carry product cards.
///
/// Pages without a store container come back untouched without any
/// network traffic. Otherwise the feed is fetched and parsed once, and
/// every container that does not already hold cards gets a grid render
/// against the category resolved from `current_path`. Every failure
/// mode degrades to returning the page exactly as it came in; this
/// function never fails.
pub async fn bind(page_html: &str, current_path: &str, config: &Config, client: &Client) -> String {
    let document = Html::parse_document(page_html);
    let stores: Vec<ElementRef> = document.select(&STORE_CONTAINER).collect();
    if stores.is_empty() {
        debug!("no store containers on this page, skipping feed fetch");
        return page_html.to_string();
    }

    let raw = match fetch_feed(client, &config.feed_sources, &config.base_url).await {
        Ok(raw) => raw,
        Err(e) => {
            debug!("feed unavailable, leaving page as-is: {}", e);
            return page_html.to_string();
        }
    };

    let catalog = parse_feed(&raw);
    info!(
        "parsed feed: {} categories, {} products after variant grouping",
        catalog.categories.len(),
        catalog.offers.len()
    );

    // Give the host template's own layout pass a head start.
    sleep(Duration::from_millis(config.render_delay_ms)).await;

    let category_id = resolve_category_id(current_path, &config.slug_categories, &catalog);
    let limit = display_limit_for_path(current_path, config);
    debug!(
        "rendering {} container(s), category filter {:?}, limit {}",
        stores.len(),
        category_id,
        limit
    );

    let mut replacements = Replacements::new();
    for store in stores {
        if has_cards(store) {
            debug!("container already has cards, skipping");
            continue;
        }
        if let Some(html) =
            render_container(store, &catalog, &category_id, limit, &config.currency_suffix)
        {
            replacements.insert(store.id(), html);
        }
    }

    if replacements.is_empty() {
        return page_html.to_string();
    }
    rewrite_document(&document, &replacements)
}
