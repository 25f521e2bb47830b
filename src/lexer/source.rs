use crate::Span;

/// The source text of one compilation unit, with an optional origin name.
///
/// Offsets handed to `slice` and `char_at` are clamped to the buffer
/// bounds so range computations stay total during error recovery.
#[derive(Debug, Clone)]
pub struct Source {
    contents: String,
    origin: Option<String>,
}

impl Source {
    pub fn new(contents: impl Into<String>, origin: Option<String>) -> Self {
        Source {
            contents: contents.into(),
            origin,
        }
    }

    /// Replaces the contents with the text of the next compilation unit.
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The origin name used in diagnostics reports.
    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or("input")
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// The substring between two byte offsets, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = start.min(self.contents.len());
        let end = end.clamp(start, self.contents.len());
        &self.contents[start..end]
    }

    /// The substring covered by a span.
    pub fn span_text(&self, span: &Span) -> &str {
        self.slice(span.start.offset, span.end.offset)
    }

    /// The character at a byte offset, or `'\0'` past the end.
    pub fn char_at(&self, offset: usize) -> char {
        self.slice(offset, self.contents.len())
            .chars()
            .next()
            .unwrap_or('\0')
    }
}
