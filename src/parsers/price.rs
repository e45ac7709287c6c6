/// Format a feed price for card display.
///
/// Numeric prices render rounded to whole units; anything the feed
/// sends that does not parse is shown verbatim. The currency suffix is
/// appended either way.
pub fn format_price(raw: &str, suffix: &str) -> String {
    let display = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}", value.round() as i64),
        _ => raw.to_string(),
    };
    format!("{} {}", display, suffix)
}
