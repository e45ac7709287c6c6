use std::collections::HashMap;

use crate::config::Config;
use crate::models::Catalog;

/// Resolve the category filter implied by the request path.
///
/// `/` and `/catalog` (trailing slashes ignored) mean "no filter", as
/// does any path shape this module does not recognize. `/catalog/<slug>`
/// goes through the static slug table and then the feed's name index;
/// an unknown slug or a name missing from the feed also falls back to
/// "no filter" rather than an error. Pure function, no I/O.
pub fn resolve_category_id(
    current_path: &str,
    slug_table: &HashMap<String, String>,
    catalog: &Catalog,
) -> String {
    let path = current_path.trim_end_matches('/');
    if path.is_empty() || path == "/catalog" {
        return String::new();
    }

    if let Some(rest) = path.strip_prefix("/catalog/") {
        let slug = rest.rsplit('/').next().unwrap_or_default();
        if let Some(name) = slug_table.get(slug) {
            if let Some(id) = catalog.category_id_by_name(name) {
                return id.to_string();
            }
        }
    }

    String::new()
}

/// Display cap for a container: the full grid on catalog pages, a
/// short teaser strip everywhere else.
pub fn display_limit_for_path(current_path: &str, config: &Config) -> usize {
    if current_path.starts_with("/catalog") {
        config.catalog_limit
    } else {
        config.teaser_limit
    }
}
