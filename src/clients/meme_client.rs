use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::clients::html::{attribute, has_class};
use crate::clients::http::{Fetched, get_bytes, get_text};
use crate::error::Result;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());

/// Source of the first `img.base-img` on the page, made absolute.
pub fn parse_meme_url(html: &str) -> Option<String> {
    IMG_TAG
        .find_iter(html)
        .map(|m| m.as_str())
        .find(|tag| has_class(tag, "base-img"))
        .and_then(|tag| attribute(tag, "src"))
        .filter(|src| !src.trim().is_empty())
        .map(|src| {
            if src.starts_with("//") {
                format!("https:{}", src)
            } else {
                src
            }
        })
}

pub async fn fetch_trending_meme_url(client: &Client, url: &str) -> Result<Option<String>> {
    let html = get_text(client, url).await?;
    Ok(parse_meme_url(&html))
}

pub async fn fetch_image(client: &Client, url: &str) -> Result<Fetched> {
    get_bytes(client, url).await
}
