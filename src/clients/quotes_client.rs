use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;

use crate::clients::html::{has_class, inner_text};
use crate::clients::http::get_text;
use crate::error::Result;

static DIV_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(/?)div\b[^>]*>").unwrap());
static QUOTE_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<span[^>]*class="[^"]*\btext\b[^"]*"[^>]*>(.*?)</span>"#).unwrap()
});
static QUOTE_AUTHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<small[^>]*class="[^"]*\bauthor\b[^"]*"[^>]*>(.*?)</small>"#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn display(&self) -> String {
        // The scraped text already carries its own quotation marks.
        format!("{}\n- {}", self.text, self.author)
    }
}

/// The markup of every `div.quote`, from its opening tag to the matching
/// `</div>`, with nested divs counted.
fn quote_fragments(html: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut open: Option<(usize, usize)> = None;
    for caps in DIV_BOUNDARY.captures_iter(html) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        let closing = !caps[1].is_empty();
        open = match open {
            None if !closing && has_class(tag.as_str(), "quote") => Some((tag.start(), 1)),
            None => None,
            Some((start, depth)) if closing && depth == 1 => {
                fragments.push(&html[start..tag.end()]);
                None
            }
            Some((start, depth)) if closing => Some((start, depth - 1)),
            Some((start, depth)) => Some((start, depth + 1)),
        };
    }
    if let Some((start, _)) = open {
        fragments.push(&html[start..]);
    }
    fragments
}

fn parse_quote(fragment: &str) -> Option<Quote> {
    let text = inner_text(&QUOTE_TEXT.captures(fragment)?[1]);
    let author = inner_text(&QUOTE_AUTHOR.captures(fragment)?[1]);
    if text.is_empty() || author.is_empty() {
        return None;
    }
    Some(Quote { text, author })
}

/// Every complete quote on a quotes.toscrape.com page, in page order.
/// Quotes missing their text or author are skipped.
pub fn parse_quotes(html: &str) -> Vec<Quote> {
    let fragments = quote_fragments(html);
    let quotes: Vec<Quote> = fragments.iter().filter_map(|f| parse_quote(f)).collect();
    if quotes.len() < fragments.len() {
        warn!(
            "event=quote_parse status=partial skipped={}",
            fragments.len() - quotes.len()
        );
    }
    quotes
}

pub async fn fetch_quotes(client: &Client, url: &str) -> Result<Vec<Quote>> {
    let html = get_text(client, url).await?;
    Ok(parse_quotes(&html))
}
