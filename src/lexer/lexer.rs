use regex::Regex;

use crate::{Location, Span, MK_SIMPLE_HANDLER, MK_TOKEN};

use super::{
    source::Source,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type PatternHandler = fn(&mut Lexer, &str) -> Token;

#[derive(Clone)]
pub struct LexPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// A lazy scanner over a source buffer.
///
/// `next` classifies one token at a time, skipping whitespace and `#`
/// line comments first. Patterns are tried in order at the cursor; any
/// other non-whitespace character falls through to a one-character
/// operator token. Once the end of the source is reached, `next` keeps
/// returning end-of-input tokens.
pub struct Lexer {
    patterns: Vec<LexPattern>,
    trivia: Vec<Regex>,
    source: Source,
    line: u32,
    column: u32,
    offset: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Lexer {
        Lexer {
            patterns: vec![
                LexPattern {
                    regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(),
                    handler: symbol_handler,
                },
                LexPattern {
                    regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(),
                    handler: number_handler,
                },
                LexPattern {
                    regex: Regex::new("^\\(").unwrap(),
                    handler: MK_SIMPLE_HANDLER!(TokenKind::LeftParen),
                },
                LexPattern {
                    regex: Regex::new("^\\)").unwrap(),
                    handler: MK_SIMPLE_HANDLER!(TokenKind::RightParen),
                },
                LexPattern {
                    regex: Regex::new("^,").unwrap(),
                    handler: MK_SIMPLE_HANDLER!(TokenKind::Comma),
                },
            ],
            trivia: vec![
                Regex::new("^\\s+").unwrap(),
                Regex::new("^#[^\n]*").unwrap(),
            ],
            source,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Loads new contents and rewinds to the start of the source.
    pub fn load(&mut self, contents: &str) {
        self.source.set_contents(contents);
        self.line = 1;
        self.column = 1;
        self.offset = 0;
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Returns the next token in the source.
    pub fn next(&mut self) -> Token {
        self.skip_trivia();

        if self.offset >= self.source.len() {
            let at = self.location();
            return MK_TOKEN!(
                TokenKind::Eof,
                String::new(),
                Span {
                    start: at.clone(),
                    end: at
                }
            );
        }

        let matched = {
            let remaining = self.remainder();
            self.patterns
                .iter()
                .find_map(|pattern| {
                    pattern
                        .regex
                        .find(remaining)
                        .map(|found| (pattern.handler, String::from(found.as_str())))
                })
                .or_else(|| {
                    // Any other character becomes a one-character operator
                    // symbol, the hook that makes custom operators possible.
                    remaining
                        .chars()
                        .next()
                        .map(|c| (op_handler as PatternHandler, c.to_string()))
                })
        };

        match matched {
            Some((handler, text)) => handler(self, &text),
            None => {
                let at = self.location();
                MK_TOKEN!(
                    TokenKind::Eof,
                    String::new(),
                    Span {
                        start: at.clone(),
                        end: at
                    }
                )
            }
        }
    }

    /// Consumes matched text at the cursor, returning its span.
    pub fn consume(&mut self, matched: &str) -> Span {
        let start = self.location();

        for c in matched.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
        }

        Span {
            start,
            end: self.location(),
        }
    }

    fn remainder(&self) -> &str {
        self.source.slice(self.offset, self.source.len())
    }

    /// Skips whitespace and line comments before the next token.
    fn skip_trivia(&mut self) {
        loop {
            let matched = {
                let remaining = self.remainder();
                self.trivia
                    .iter()
                    .find_map(|regex| regex.find(remaining))
                    .map(|found| String::from(found.as_str()))
            };

            match matched {
                Some(text) => {
                    self.consume(&text);
                }
                None => return,
            }
        }
    }
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let span = lexer.consume(matched);

    match RESERVED_LOOKUP.get(matched) {
        Some(kind) => MK_TOKEN!(*kind, String::from(matched), span),
        None => MK_TOKEN!(TokenKind::Identifier, String::from(matched), span),
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let span = lexer.consume(matched);
    MK_TOKEN!(TokenKind::Number, String::from(matched), span)
}

fn op_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let span = lexer.consume(matched);
    MK_TOKEN!(TokenKind::Op, String::from(matched), span)
}
