use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub feed_sources: Vec<String>,
    pub base_url: String,
    pub slug_categories: HashMap<String, String>,
    pub catalog_limit: usize,
    pub teaser_limit: usize,
    pub render_delay_ms: u64,
    pub currency_suffix: String,
    pub user_agent: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Hardcoded to match the store deployment
        let feed_sources = vec![
            "/tstore/yml/9912592c705955c907f472521d03869b.yml".to_string(),
            "https://printloop.store/tstore/yml/9912592c705955c907f472521d03869b.yml".to_string(),
            "https://printloop.ru/tstore/yml/9912592c705955c907f472521d03869b.yml".to_string(),
            "/store-13587701-202601200130.yml".to_string(),
        ];

        let mut slug_categories = HashMap::new();
        slug_categories.insert("tshirts".to_string(), "Футболки".to_string());
        slug_categories.insert("hoodies".to_string(), "Толстовки".to_string());
        slug_categories.insert("popular".to_string(), "Популярное".to_string());
        slug_categories.insert("new".to_string(), "Новинки".to_string());
        slug_categories.insert("gift".to_string(), "В подарок".to_string());
        slug_categories.insert("pairs".to_string(), "Парные".to_string());
        slug_categories.insert("games".to_string(), "Игры".to_string());
        slug_categories.insert("memes".to_string(), "Мемы".to_string());
        slug_categories.insert("films".to_string(), "Кино".to_string());
        slug_categories.insert("sport".to_string(), "Спорт".to_string());

        Ok(Config {
            feed_sources,
            base_url: "https://printloop.store".to_string(),
            slug_categories,
            catalog_limit: 24,
            teaser_limit: 8,
            render_delay_ms: 700,
            currency_suffix: "р.".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string(),
        })
    }
}
