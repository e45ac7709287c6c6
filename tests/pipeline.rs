use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use store_render::config::Config;
use store_render::page;
use store_render::utils::http::create_client;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<yml_catalog date="2026-01-20 01:30">
  <shop>
    <name>printloop</name>
    <categories>
      <category id="c1">Футболки</category>
      <category id="c2">Толстовки</category>
    </categories>
    <offers>
      <offer id="o1s" group_id="g1">
        <name>Футболка Космос - S</name>
        <url>https://printloop.store/tovar/kosmos</url>
        <picture>https://printloop.store/img/kosmos.jpg</picture>
        <price>1999.5</price>
        <categoryId>c1</categoryId>
      </offer>
      <offer id="o1l" group_id="g1">
        <name>Футболка Космос - L</name>
        <url>https://printloop.store/tovar/kosmos</url>
        <picture>https://printloop.store/img/kosmos.jpg</picture>
        <price>1999.5</price>
        <categoryId>c1</categoryId>
      </offer>
      <offer id="o2">
        <name>Худи Пиксель</name>
        <url>https://printloop.store/tovar/piksel</url>
        <picture>https://printloop.store/img/piksel.jpg</picture>
        <price>n/a</price>
        <categoryId>c2</categoryId>
      </offer>
    </offers>
  </shop>
</yml_catalog>"#;

const PAGE: &str = "<!DOCTYPE html><html><head><title>Магазин</title></head><body>\
  <div class=\"t-store js-store\">\
    <div class=\"js-store-grid-cont-preloader t-store__grid-cont\">\
      <div class=\"t-store__card-preloader t-col t-col_3\"></div>\
    </div>\
  </div>\
</body></html>";

fn test_config(server: &MockServer, sources: &[&str]) -> Config {
    let mut config = Config::load().unwrap();
    config.base_url = server.uri();
    config.feed_sources = sources.iter().map(|s| s.to_string()).collect();
    config.render_delay_ms = 0;
    config
}

fn card_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".t-store__card__title").unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn wide_feed(count: usize) -> String {
    let offers: String = (0..count)
        .map(|i| {
            format!(
                "<offer id=\"w{i}\"><name>Товар {i}</name>\
                 <url>https://printloop.store/tovar/{i}</url>\
                 <picture>https://printloop.store/img/{i}.jpg</picture>\
                 <price>500</price><categoryId>c1</categoryId></offer>"
            )
        })
        .collect();
    format!(
        "<yml_catalog><shop><categories><category id=\"c1\">Футболки</category></categories>\
         <offers>{offers}</offers></shop></yml_catalog>"
    )
}

#[tokio::test]
async fn falls_back_past_failing_sources_and_renders_the_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bad.yml"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/feed.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, &["/bad.yml", "/feed.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let out = page::bind(PAGE, "/catalog/tshirts", &config, &client).await;

    // g1 collapses to its first SKU, the c2 hoodie is filtered out
    assert_eq!(card_titles(&out), vec!["Футболка Космос".to_string()]);
    assert!(out.contains("2000 р."));
    // graft after the preloader, column classes copied from the card preloader
    assert!(out.contains("class=\"js-store-grid-cont t-store__grid-cont\""));
    assert!(out.contains("<div class=\"t-col t-col_3\">"));
}

#[tokio::test]
async fn all_sources_failing_leaves_the_page_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = test_config(&server, &["/one.yml", "/two.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let out = page::bind(PAGE, "/catalog/tshirts", &config, &client).await;
    assert_eq!(out, PAGE);
}

#[tokio::test]
async fn pages_without_containers_never_hit_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server, &["/feed.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let page_html = "<html><body><div class=\"t-card\">ничего</div></body></html>";
    let out = page::bind(page_html, "/", &config, &client).await;
    assert_eq!(out, page_html);
}

#[tokio::test]
async fn display_caps_follow_the_page_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(wide_feed(30)))
        .mount(&server)
        .await;

    let config = test_config(&server, &["/feed.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let teaser = page::bind(PAGE, "/", &config, &client).await;
    assert_eq!(card_titles(&teaser).len(), 8);

    let catalog_page = page::bind(PAGE, "/catalog/tshirts", &config, &client).await;
    let titles = card_titles(&catalog_page);
    assert_eq!(titles.len(), 24);
    // catalog order, first N entries
    assert_eq!(titles[0], "Товар 0");
    assert_eq!(titles[23], "Товар 23");
}

#[tokio::test]
async fn containers_with_existing_cards_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let config = test_config(&server, &["/feed.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let page_html = "<html><body>\
      <div class=\"t-store js-store\" id=\"prerendered\">\
        <div class=\"js-store-grid-cont\"><div class=\"t-store__card\">шаблон</div></div>\
      </div>\
      <div class=\"t-store js-store\" id=\"empty\">\
        <div class=\"js-store-grid-cont\"></div>\
      </div>\
    </body></html>";

    let out = page::bind(page_html, "/", &config, &client).await;

    // the pre-rendered container is untouched, the empty one is filled
    assert!(out.contains("шаблон"));
    assert_eq!(card_titles(&out).len(), 2);
}

#[tokio::test]
async fn unknown_category_pages_render_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let config = test_config(&server, &["/feed.yml"]);
    let client = create_client(&config.user_agent).unwrap();

    let out = page::bind(PAGE, "/catalog/doesnotexist", &config, &client).await;
    assert_eq!(
        card_titles(&out),
        vec!["Футболка Космос".to_string(), "Худи Пиксель".to_string()]
    );
    // raw price fallback for the hoodie
    assert!(out.contains("n/a р."));
}
