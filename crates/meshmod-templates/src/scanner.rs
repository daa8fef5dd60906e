//! Placeholder scanning
//!
//! Splits raw template text into literal and placeholder segments in a
//! single left-to-right pass.

use crate::error::TemplateError;

/// Opening placeholder delimiter
pub const OPEN_DELIMITER: &str = "{{";

/// Closing placeholder delimiter
pub const CLOSE_DELIMITER: &str = "}}";

/// A segment of template text, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text passed through unchanged, including whitespace and
    /// line breaks
    Literal(&'a str),
    /// A placeholder expression found between delimiters
    Placeholder {
        /// Raw expression text between the delimiters, untrimmed
        raw: &'a str,
        /// Byte offset of the opening delimiter in the source
        offset: usize,
        /// 1-based line of the opening delimiter
        line: usize,
    },
}

/// Lazy scanner over template text
///
/// Yields segments in document order. Delimiters do not nest: a placeholder
/// span runs from the first `{{` to the next `}}`. After yielding an error
/// the scanner is exhausted; re-scanning requires a new `Scanner`.
pub struct Scanner<'a> {
    source: &'a str,
    position: usize,
    line: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the given template text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            failed: false,
        }
    }

    fn advance(&mut self, len: usize) {
        let consumed = &self.source[self.position..self.position + len];
        self.line += consumed.bytes().filter(|&b| b == b'\n').count();
        self.position += len;
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Segment<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.position..];

        if let Some(body) = rest.strip_prefix(OPEN_DELIMITER) {
            let offset = self.position;
            let line = self.line;
            return match body.find(CLOSE_DELIMITER) {
                Some(end) => {
                    let raw = &body[..end];
                    self.advance(OPEN_DELIMITER.len() + end + CLOSE_DELIMITER.len());
                    Some(Ok(Segment::Placeholder { raw, offset, line }))
                }
                None => {
                    self.failed = true;
                    Some(Err(TemplateError::UnterminatedPlaceholder { offset, line }))
                }
            };
        }

        let end = rest.find(OPEN_DELIMITER).unwrap_or(rest.len());
        let text = &rest[..end];
        self.advance(end);
        Some(Ok(Segment::Literal(text)))
    }
}
