//! Emphasis markup around query term matches.
//!
//! All spans are located against the original text before anything is
//! wrapped. Overlapping spans from different terms are merged and wrapped
//! once, so the output never nests or splits `<mark>` elements, and the text
//! in and around each span is HTML-escaped.

use regex::RegexBuilder;

use crate::utils::escape_html;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive literal occurrence of each term in `<mark>`.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    let spans = match_spans(text, terms);

    let mut marked = String::with_capacity(text.len() + spans.len() * 13);
    let mut cursor = 0;
    for (start, end) in spans {
        marked.push_str(&escape_html(&text[cursor..start]));
        marked.push_str(MARK_OPEN);
        marked.push_str(&escape_html(&text[start..end]));
        marked.push_str(MARK_CLOSE);
        cursor = end;
    }
    marked.push_str(&escape_html(&text[cursor..]));
    marked
}

/// Byte ranges of all term matches, sorted and with overlaps merged.
///
/// Adjacent spans stay separate so back-to-back occurrences remain
/// individually marked.
fn match_spans<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        let pattern = match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                log::warn!("Skipping highlight term '{}': {}", term, e);
                continue;
            }
        };
        spans.extend(pattern.find_iter(text).map(|m| (m.start(), m.end())));
    }
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_original_case() {
        assert_eq!(
            highlight("Realms and REALMS", &["realms"]),
            "<mark>Realms</mark> and <mark>REALMS</mark>"
        );
    }

    #[test]
    fn test_no_terms_only_escapes() {
        let none: [&str; 0] = [];
        assert_eq!(highlight("a < b", &none), "a &lt; b");
        assert_eq!(highlight("plain", &[""]), "plain");
    }

    #[test]
    fn test_multiple_terms() {
        assert_eq!(
            highlight("Java server setup", &["java", "setup"]),
            "<mark>Java</mark> server <mark>setup</mark>"
        );
    }

    #[test]
    fn test_overlapping_terms_are_wrapped_once() {
        assert_eq!(
            highlight("Minecraft server", &["craft", "minecraft"]),
            "<mark>Minecraft</mark> server"
        );
        assert_eq!(
            highlight("abcd", &["abc", "bcd"]),
            "<mark>abcd</mark>"
        );
    }

    #[test]
    fn test_term_matching_markup_word_is_not_rewrapped() {
        // Marking "mark" must not touch the inserted tags.
        assert_eq!(
            highlight("mark my words", &["mark", "my"]),
            "<mark>mark</mark> <mark>my</mark> words"
        );
    }

    #[test]
    fn test_adjacent_occurrences_stay_separate() {
        assert_eq!(highlight("abab", &["ab"]), "<mark>ab</mark><mark>ab</mark>");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(
            highlight("Use C++ or C#", &["c++"]),
            "Use <mark>C++</mark> or C#"
        );
        assert_eq!(highlight("a.b axb", &["a.b"]), "<mark>a.b</mark> axb");
    }

    #[test]
    fn test_escapes_text_inside_and_outside_marks() {
        assert_eq!(
            highlight("<b> & b", &["b"]),
            "&lt;<mark>b</mark>&gt; &amp; <mark>b</mark>"
        );
    }
}
