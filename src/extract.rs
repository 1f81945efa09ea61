// src/extract.rs
// Pull announced activities out of the page markup.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use tracing::warn;

/// Collect the trimmed text of every element matching `selectors`.
///
/// Set semantics: duplicates collapse, and empty-after-trim matches are
/// dropped so a blank heading never reads as a "new activity". An empty
/// result is a soft condition (stale selectors or an empty page), logged
/// here and left to the caller to act on.
pub fn activities(markup: &str, selectors: &[&str]) -> BTreeSet<String> {
    let doc = Html::parse_document(markup);
    let mut found = BTreeSet::new();

    for raw in selectors {
        let sel = match Selector::parse(raw) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping invalid selector {raw:?}: {e}");
                continue;
            }
        };
        for el in doc.select(&sel) {
            let text = normalize_ws(&el.text().collect::<String>());
            if !text.is_empty() {
                found.insert(text);
            }
        }
    }

    if found.is_empty() {
        warn!("no elements matched any selector; page empty or selectors stale");
    }
    found
}

/// Collapse runs of whitespace (including newlines from nested markup)
/// into single spaces and trim the ends.
fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
