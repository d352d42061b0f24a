//! Pure text helpers for rich-text resume fields.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Opening or closing `<li>` tag; group 1 is `/` on a closing tag.
static LIST_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)li\b[^>]*>").unwrap());

const DATE_SEPARATOR: &str = " - ";

/// What to return when a rich-text field has no list-item markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletFallback {
    /// The whole stripped text as a single bullet.
    WholeText,
    /// One bullet per non-empty line.
    SplitLines,
}

/// Removes every markup tag, decodes the common entities and trims.
pub fn strip_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    decode_entities(&TAG_RE.replace_all(text, ""))
        .trim()
        .to_string()
}

/// List-item contents in document order, or the whole stripped text when
/// the field carries no list markup. Nested items become bullets of their
/// own; their parent keeps only its own text.
pub fn extract_bullets(text: &str) -> Vec<String> {
    extract_bullets_with(text, BulletFallback::WholeText)
}

pub fn extract_bullets_with(text: &str, fallback: BulletFallback) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    if let Some(items) = list_items(text) {
        return items;
    }

    match fallback {
        BulletFallback::WholeText => {
            let stripped = strip_markup(text);
            if stripped.is_empty() {
                vec![]
            } else {
                vec![stripped]
            }
        }
        BulletFallback::SplitLines => text
            .lines()
            .map(strip_markup)
            .filter(|line| !line.is_empty())
            .collect(),
    }
}

/// `None` when `text` has no `<li>` tag at all.
fn list_items(text: &str) -> Option<Vec<String>> {
    let mut items: Vec<String> = Vec::new();
    // Indices into `items` of the currently open list items, innermost last.
    let mut open: Vec<usize> = Vec::new();
    let mut cursor = 0;

    for caps in LIST_TAG_RE.captures_iter(text) {
        let Some(tag) = caps.get(0) else { continue };
        if let Some(&current) = open.last() {
            items[current].push_str(&text[cursor..tag.start()]);
        }
        cursor = tag.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if closing {
            open.pop();
        } else {
            open.push(items.len());
            items.push(String::new());
        }
    }

    if items.is_empty() {
        return None;
    }
    if let Some(&current) = open.last() {
        items[current].push_str(&text[cursor..]);
    }
    Some(
        items
            .iter()
            .map(|item| strip_markup(item))
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// Splits `"<start> - <end>"` on the first separator. Without a separator the
/// whole trimmed text is the start and the end is empty.
pub fn split_date_range(text: &str) -> (String, String) {
    match text.split_once(DATE_SEPARATOR) {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
