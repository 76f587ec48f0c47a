//! RSS feed helpers: query URL construction and `<item><title>` extraction.

use roxmltree::Document;
use url::Url;

/// Builds the search URL for an industry keyword.
/// Returns `None` only when `base` is not an absolute URL.
pub fn search_url(base: &str, industry: &str) -> Option<Url> {
    let query = format!("{} industry news", industry.trim());
    Url::parse_with_params(
        base,
        &[
            ("q", query.as_str()),
            ("hl", "en-US"),
            ("gl", "US"),
            ("ceid", "US:en"),
        ],
    )
    .ok()
}

/// Extracts up to `max` headline titles from an RSS (or Atom) document, in source order.
/// Malformed XML yields an empty list.
pub fn parse_headlines(xml: &str, max: usize) -> Vec<String> {
    let doc = match Document::parse(xml.trim_start_matches('\u{feff}').trim()) {
        Ok(doc) => doc,
        Err(_) => return Vec::new(),
    };

    doc.descendants()
        .filter(|node| node.has_tag_name("item") || node.has_tag_name("entry"))
        .filter_map(|item| {
            item.children()
                .find(|child| child.is_element() && child.has_tag_name("title"))
        })
        .filter_map(|title| {
            let text: String = title
                .descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect();
            let clean = collapse_whitespace(&text);
            (!clean.is_empty()).then_some(clean)
        })
        .take(max)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
