//! Free-text answer parsing.
//!
//! The service is asked for a comma-separated list, but real answers come
//! back with bullets, numbering, quotes, or labels outside the vocabulary.
//! Parsing is pure so it can be exercised without any network dependency.

use std::collections::HashSet;

use booktag_types::Vocabulary;

/// Parse a raw service answer into vocabulary topics.
///
/// Candidates are split on commas, semicolons, and line breaks, stripped
/// of list decorations, and matched case-insensitively against the
/// vocabulary. Non-members are discarded silently; survivors come back in
/// the vocabulary's canonical casing, deduplicated, in first-seen answer
/// order. An unparsable answer yields an empty list, which is a
/// legitimate result rather than an error.
pub fn parse_topics(raw: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut topics = Vec::new();

    for part in raw.split([',', ';', '\n', '\r']) {
        let candidate = clean_candidate(part);
        if candidate.is_empty() {
            continue;
        }
        if let Some(canonical) = vocabulary.canonical(candidate) {
            if seen.insert(canonical.to_lowercase()) {
                topics.push(canonical.to_string());
            }
        }
    }

    topics
}

/// Strip list decorations: bullets, `1.`/`1)` numbering, quotes, and a
/// trailing period.
fn clean_candidate(part: &str) -> &str {
    let mut candidate = part.trim();
    candidate = candidate
        .trim_start_matches(|c| matches!(c, '-' | '*' | '•'))
        .trim_start();
    candidate = strip_numbering(candidate);
    candidate = candidate
        .trim_matches(|c| matches!(c, '"' | '\''))
        .trim();
    candidate.trim_end_matches('.').trim_end()
}

fn strip_numbering(part: &str) -> &str {
    let rest = part.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == part.len() {
        return part;
    }
    match rest.strip_prefix(['.', ')']) {
        Some(stripped) => stripped.trim_start(),
        // Digits not followed by list punctuation belong to the label
        None => part,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_topics(["History", "Fiction", "Science Fiction", "1984 Studies"])
    }

    #[test]
    fn test_parse_comma_list() {
        let topics = parse_topics("History, Fiction", &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction"]);
    }

    #[test]
    fn test_parse_restores_canonical_casing() {
        let topics = parse_topics("history, FICTION, science fiction", &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction", "Science Fiction"]);
    }

    #[test]
    fn test_parse_discards_unknown_labels() {
        let topics = parse_topics("History, Romance, Cooking, Fiction", &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction"]);
    }

    #[test]
    fn test_parse_dedups_case_insensitively() {
        let topics = parse_topics("Fiction, fiction, FICTION, History", &vocabulary());
        assert_eq!(topics, vec!["Fiction", "History"]);
    }

    #[test]
    fn test_parse_bulleted_lines() {
        let raw = "- History\n- Fiction\n• Science Fiction";
        let topics = parse_topics(raw, &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction", "Science Fiction"]);
    }

    #[test]
    fn test_parse_numbered_lines() {
        let raw = "1. History\n2) Fiction\n3. Romance";
        let topics = parse_topics(raw, &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction"]);
    }

    #[test]
    fn test_parse_quoted_and_punctuated() {
        let topics = parse_topics("\"History\", 'Fiction'.", &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction"]);
    }

    #[test]
    fn test_parse_keeps_leading_digits_in_labels() {
        let topics = parse_topics("1984 Studies, Fiction", &vocabulary());
        assert_eq!(topics, vec!["1984 Studies", "Fiction"]);
    }

    #[test]
    fn test_parse_semicolon_separated() {
        let topics = parse_topics("History; Fiction", &vocabulary());
        assert_eq!(topics, vec!["History", "Fiction"]);
    }

    #[test]
    fn test_parse_garbage_yields_empty() {
        assert!(parse_topics("", &vocabulary()).is_empty());
        assert!(parse_topics("no matching labels here", &vocabulary()).is_empty());
        assert!(parse_topics("***,,;;\n\n", &vocabulary()).is_empty());
    }

    #[test]
    fn test_parse_preserves_answer_order() {
        let topics = parse_topics("Fiction, History", &vocabulary());
        assert_eq!(topics, vec!["Fiction", "History"]);
    }
}
