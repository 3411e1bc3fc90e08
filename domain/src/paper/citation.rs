//! Citation extraction from model output

use crate::debate::record::Source;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\((https?://[^\s)]+)\)").expect("valid markdown link regex")
});

/// Extract `[title](url)` links as sources, in order, de-duplicated by URL
pub fn extract_citations(text: &str) -> Vec<Source> {
    let mut seen = HashSet::new();
    MARKDOWN_LINK
        .captures_iter(text)
        .filter_map(|caps| {
            let title = caps[1].trim();
            let url = &caps[2];
            seen.insert(url.to_string()).then(|| Source::new(title, url))
        })
        .collect()
}
