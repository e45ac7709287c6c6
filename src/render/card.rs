use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::models::ProductEntry;
use crate::parsers::format_price;

pub const CARD_PRELOADER_CLASS: &str = "t-store__card-preloader";
const DEFAULT_COLUMN_CLASS: &str = "t-store__stretch-col t-store__stretch-col_25 t-col t-col_3";

static CARD_PRELOADER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".t-store__card-preloader").expect("Invalid card preloader selector")
});

/// Column layout class for cards in this container.
///
/// The host template ships a preloader card carrying the column classes
/// for its breakpoint setup; cards copy those, minus the preloader
/// marker itself. Containers without one get the stock four-column set.
pub fn column_class(store: ElementRef) -> String {
    match store.select(&CARD_PRELOADER).next() {
        Some(preloader) => preloader
            .value()
            .attr("class")
            .unwrap_or_default()
            .split_whitespace()
            .filter(|class| *class != CARD_PRELOADER_CLASS)
            .collect::<Vec<_>>()
            .join(" "),
        None => DEFAULT_COLUMN_CLASS.to_string(),
    }
}

/// Build the markup for one product card.
pub fn build_card(entry: &ProductEntry, column_class: &str, currency_suffix: &str) -> String {
    let url = encode_double_quoted_attribute(&entry.url);
    let picture = encode_double_quoted_attribute(&entry.picture);
    let name_attr = encode_double_quoted_attribute(&entry.name);
    let name = encode_text(&entry.name);
    let price = format_price(&entry.price, currency_suffix);
    let price = encode_text(&price);
    let column = encode_double_quoted_attribute(column_class);

    format!(
        concat!(
            "<div class=\"{column}\">",
            "<div class=\"t-store__card__wrap_all\">",
            "<div class=\"t-store__card__imgwrapper\">",
            "<a class=\"t-store__card__imgwrapper_in\" href=\"{url}\">",
            "<div class=\"t-store__card__bgimg t-bgimg\" style=\"background-image:url('{picture}')\"></div>",
            "<img class=\"t-store__card__img\" src=\"{picture}\" alt=\"{name_attr}\">",
            "</a>",
            "</div>",
            "<div class=\"t-store__card__textwrapper\">",
            "<div class=\"t-store__card__title\">{name}</div>",
            "<div class=\"t-store__card__price\">{price}</div>",
            "<div class=\"t-store__card__btns-wrapper\">",
            "<a class=\"t-btn t-btnflex t-btnflex_type_button t-btnflex_sm t-store__card__btn\" href=\"{url}\">",
            "<span class=\"t-btnflex__text t-store__card__btn-text\">Подробнее</span>",
            "</a>",
            "<a class=\"t-btn t-btnflex t-btnflex_type_button2 t-btnflex_sm t-store__card__btn t-store__card__btn_second\" href=\"{url}#order\">",
            "<span class=\"t-btnflex__text t-store__card__btn-text\">Купить</span>",
            "</a>",
            "</div>",
            "</div>",
            "</div>",
            "</div>",
        ),
        column = column,
        url = url,
        picture = picture,
        name_attr = name_attr,
        name = name,
        price = price,
    )
}
