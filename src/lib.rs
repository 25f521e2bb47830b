#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source: 1-based line and column, 0-based byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Location {
    pub fn start() -> Self {
        Location {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range between two locations in a source, half-open over offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Span { start, end }
    }

    /// The span from the start of this span to the end of another.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::{Location, Span};

    #[test]
    fn test_location_display() {
        let location = Location {
            line: 3,
            column: 14,
            offset: 40,
        };
        assert_eq!(location.to_string(), "3:14");
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(
            Location::start(),
            Location {
                line: 1,
                column: 4,
                offset: 3,
            },
        );
        assert_eq!(span.to_string(), "1:1..1:4");
    }

    #[test]
    fn test_span_to() {
        let first = Span::new(
            Location::start(),
            Location {
                line: 1,
                column: 2,
                offset: 1,
            },
        );
        let second = Span::new(
            Location {
                line: 2,
                column: 1,
                offset: 8,
            },
            Location {
                line: 2,
                column: 5,
                offset: 12,
            },
        );

        let combined = first.to(&second);
        assert_eq!(combined.start, first.start);
        assert_eq!(combined.end, second.end);
    }
}
