use once_cell::sync::Lazy;
use regex::Regex;

// Trailing size token after a "-" separator, plus anything behind it.
// The alternation order mirrors the feed conventions: "2XL" before "XL"
// so the longer token wins.
static VARIANT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*-\s*(2XL|XS|S|M|L|XL|XXL|XXXL)(\s*-.*)?$")
        .expect("Invalid variant suffix regex")
});

/// Strip the trailing size-variant token from a display name.
///
/// Offers in the feed carry per-size names like "Футболка Космос - XL";
/// the grouped card shows the bare product name. Names without a
/// recognized trailing token come back unchanged.
pub fn strip_variant_suffix(name: &str) -> String {
    VARIANT_SUFFIX.replace(name, "").trim().to_string()
}
