use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(x?)([0-9a-fA-F]+);").unwrap());
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Strips tags, decodes common entities and collapses whitespace.
pub fn inner_text(fragment: &str) -> String {
    let without_tags = TAG.replace_all(fragment, "");
    let decoded = decode_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn decode_entities(text: &str) -> String {
    let numeric = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures| {
        let radix = if caps[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&caps[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });
    numeric
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Value of `name` inside a single start tag such as `<img class="a" src="b">`.
pub fn attribute(tag: &str, name: &str) -> Option<String> {
    ATTRIBUTE
        .captures_iter(tag)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
        .map(|m| decode_entities(m.as_str()))
}

pub fn has_class(tag: &str, class: &str) -> bool {
    attribute(tag, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_text_strips_and_decodes() {
        assert_eq!(
            inner_text("  <b>Tom &amp; Jerry</b>\n  &#8220;hi&#x201D; "),
            "Tom & Jerry \u{201C}hi\u{201D}"
        );
    }

    #[test]
    fn escape_round_trips_markup() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn attribute_and_class_lookup() {
        let tag = r#"<img class="base-img shadow" src='//i.imgflip.com/1.jpg' alt="x">"#;
        assert_eq!(attribute(tag, "src").as_deref(), Some("//i.imgflip.com/1.jpg"));
        assert!(has_class(tag, "base-img"));
        assert!(!has_class(tag, "base"));
        assert_eq!(attribute(tag, "width"), None);
        assert_eq!(attribute(r#"<img data-src="a" src="b">"#, "src").as_deref(), Some("b"));
    }
}
