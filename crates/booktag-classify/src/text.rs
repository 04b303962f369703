//! Description cleanup before classification.

use booktag_types::BookRecord;
use scraper::Html;
use tracing::warn;

/// Cleaned descriptions shorter than this are treated as absent; catalog
/// exports frequently hold markup-only or placeholder descriptions.
const MIN_DESCRIPTION_CHARS: usize = 5;

/// Strip markup from a raw description and collapse whitespace.
///
/// Parses the input as an HTML fragment, keeps only text content (entities
/// decoded), drops literal `\n` escape sequences carried over from upstream
/// exports, and collapses all whitespace runs to single spaces.
pub fn clean_html(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(raw);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    collapse_whitespace(&text.replace("\\n", " "))
}

/// Build the text submitted for classification.
///
/// Picks `ai_description` over `description` when present and non-blank,
/// strips markup, and prefixes the title. Returns an empty string when no
/// usable description remains; the classifier short-circuits on that.
pub fn prepare_description(record: &BookRecord, max_chars: usize) -> String {
    let cleaned = clean_html(record.preferred_description());

    if cleaned.chars().count() < MIN_DESCRIPTION_CHARS {
        warn!(id = %record.id, title = %record.title, "no usable description");
        return String::new();
    }

    format!("{}: {}", record.title, truncate_chars(&cleaned, max_chars))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate on a character boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
