//! Context excerpts around query matches.
//!
//! Offsets and lengths here are in characters, not bytes, so multi-byte text
//! is never cut inside a code point.

use crate::models::SearchConfig;
use crate::utils::term_pattern;

/// Marker for text omitted from an excerpt.
pub const ELLIPSIS: &str = "...";

/// Characters of context on each side of a match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Length of the excerpt shown when there is nothing to center on.
pub const DEFAULT_PREVIEW_LENGTH: usize = 200;

/// Half-open character range `[start, end)` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: usize,
    end: usize,
}

/// Builds bounded previews of plain text centered on term matches.
#[derive(Debug, Clone, Copy)]
pub struct Excerpter {
    context_radius: usize,
    preview_length: usize,
}

impl Default for Excerpter {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_RADIUS, DEFAULT_PREVIEW_LENGTH)
    }
}

impl Excerpter {
    pub fn new(context_radius: usize, preview_length: usize) -> Self {
        Self {
            context_radius,
            preview_length,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.context_radius, config.preview_length)
    }

    /// Produce the excerpt of `text` for `terms`.
    ///
    /// Every case-insensitive literal occurrence of a term contributes a
    /// window of `context_radius` characters on each side; overlapping windows
    /// are merged. Without terms or matches the leading preview is returned.
    pub fn extract<S: AsRef<str>>(&self, text: &str, terms: &[S]) -> String {
        self.segments(text, terms)
            .iter()
            .map(Segment::as_str)
            .collect()
    }

    /// Like [`extract`](Self::extract), split into source text and markers.
    pub fn segments<'t, S: AsRef<str>>(&self, text: &'t str, terms: &[S]) -> Vec<Segment<'t>> {
        let pattern = match term_pattern(terms) {
            Ok(Some(pattern)) => pattern,
            Ok(None) => return self.preview_segments(text),
            Err(e) => {
                log::warn!("Could not build term pattern, using preview: {}", e);
                return self.preview_segments(text);
            }
        };

        // Byte offset of every char, plus the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;
        let to_char = |byte: usize| bounds.partition_point(|&b| b < byte);

        let mut windows: Vec<Window> = Vec::new();
        for m in pattern.find_iter(text) {
            let start = to_char(m.start()).saturating_sub(self.context_radius);
            let end = (to_char(m.end()) + self.context_radius).min(char_count);

            match windows.last_mut() {
                Some(last) if start <= last.end => last.end = last.end.max(end),
                _ => windows.push(Window { start, end }),
            }
        }

        if windows.is_empty() {
            return self.preview_segments(text);
        }

        let mut segments = Vec::with_capacity(windows.len() * 4);
        let mut previous: Option<Window> = None;
        for window in &windows {
            if let Some(prev) = previous {
                if window.start > prev.end + 1 {
                    segments.push(Segment::Marker(" ... "));
                } else {
                    segments.push(Segment::Marker(" "));
                }
            }
            if window.start > 0 {
                segments.push(Segment::Marker(ELLIPSIS));
            }
            segments.push(Segment::Text(&text[bounds[window.start]..bounds[window.end]]));
            if window.end < char_count {
                segments.push(Segment::Marker(ELLIPSIS));
            }
            previous = Some(*window);
        }
        segments
    }

    /// The first `preview_length` characters, with an ellipsis if truncated.
    pub fn preview(&self, text: &str) -> String {
        self.preview_segments(text)
            .iter()
            .map(Segment::as_str)
            .collect()
    }

    fn preview_segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        match text.char_indices().nth(self.preview_length) {
            Some((cut, _)) => vec![Segment::Text(&text[..cut]), Segment::Marker(ELLIPSIS)],
            None => vec![Segment::Text(text)],
        }
    }
}

/// A piece of an excerpt: either a slice of the source text or an inserted
/// omission marker / separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Marker(&'static str),
}

impl<'t> Segment<'t> {
    pub fn as_str(&self) -> &'t str {
        match *self {
            Segment::Text(text) => text,
            Segment::Marker(marker) => marker,
        }
    }
}

/// Excerpt `text` around `terms` with the default preview length.
pub fn extract_context<S: AsRef<str>>(text: &str, terms: &[S], context_radius: usize) -> String {
    Excerpter::new(context_radius, DEFAULT_PREVIEW_LENGTH).extract(text, terms)
}
