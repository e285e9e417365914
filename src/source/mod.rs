use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::Headline;
use crate::utils::error::{BoxResult, RustocError};

lazy_static! {
    static ref HEADING_REGEX: Regex =
        Regex::new(r"(?is)<h([1-6])([^>]*)>(.*?)</h[1-6]\s*>").unwrap();

    static ref ID_REGEX: Regex = Regex::new(r#"(?i)id\s*=\s*["']([^"']*)["']"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref SELECTOR_TOKEN_REGEX: Regex = Regex::new(r"(?i)^h([1-6])$").unwrap();
}

/// Default selector, matching the four levels most documents use for
/// navigation
pub const DEFAULT_SELECTOR: &str = "h1, h2, h3, h4";

/// Parse a comma-separated heading selector ("h2, h3") into the set of
/// levels it matches
pub fn parse_selector(selector: &str) -> BoxResult<Vec<usize>> {
    let selector = if selector.trim().is_empty() {
        DEFAULT_SELECTOR
    } else {
        selector
    };

    let mut levels = Vec::new();
    for token in selector.split(',') {
        let token = token.trim();
        match SELECTOR_TOKEN_REGEX.captures(token) {
            Some(cap) => {
                let level: usize = cap[1].parse()?;
                if !levels.contains(&level) {
                    levels.push(level);
                }
            }
            None => {
                return Err(Box::new(RustocError::Source(format!(
                    "unsupported selector component \"{}\"; expected h1..h6",
                    token
                ))));
            }
        }
    }
    Ok(levels)
}

/// Extract headline records from HTML content, in document order.
///
/// Only headings matched by the selector are collected. A heading without
/// an `id` attribute gets an anchor slugified from its text.
pub fn extract_headlines(html: &str, selector: &str) -> BoxResult<Vec<Headline>> {
    let levels = parse_selector(selector)?;
    let mut headlines = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let level: usize = cap[1].parse()?;
        if !levels.contains(&level) {
            continue;
        }

        let text = strip_html_tags(&cap[3]);
        let anchor = match ID_REGEX.captures(&cap[2]) {
            Some(id) if !id[1].is_empty() => id[1].to_string(),
            _ => slug::slugify(&text),
        };

        headlines.push(Headline::new(level, text, anchor));
    }

    log::debug!("extracted {} headlines with selector \"{}\"", headlines.len(), selector);
    Ok(headlines)
}

/// Strip HTML tags from heading content
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}
