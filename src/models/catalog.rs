use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One sellable product group: a feed offer with its size-variant
/// siblings collapsed onto the first SKU encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub group_key: String,
    pub name: String,
    pub url: String,
    pub picture: String,
    pub price: String,
    pub category_id: String,
}

/// Parsed feed: category table, case-insensitive name index and the
/// deduplicated offers in feed document order. Built once per page
/// rewrite and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: HashMap<String, String>,
    pub categories_by_name: HashMap<String, String>,
    pub offers: Vec<ProductEntry>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Category id for a display name, matched case-insensitively.
    pub fn category_id_by_name(&self, name: &str) -> Option<&str> {
        self.categories_by_name
            .get(&name.to_lowercase())
            .map(String::as_str)
    }
}
