pub mod category;
pub mod config;
pub mod feed;
pub mod models;
pub mod page;
pub mod parsers;
pub mod render;
pub mod utils;
