use log::debug;

use crate::{
    ast::ast::Item,
    errors::errors::{DiagnosticBag, ParseError, SyntaxErrorKind},
    lexer::{
        lexer::Lexer,
        source::Source,
        tokens::{Token, TokenKind},
    },
};

use super::{
    item::{parse_definition, parse_extern, parse_top_level_expr},
    lookups::OpTable,
};

/// A parsing session driving the lexer one token of lookahead at a time.
///
/// The session owns the lexer (and through it the source buffer), the
/// operator precedence table and the diagnostic state. Each `parse_item`
/// call loads fresh source text and resets the lexer and diagnostics,
/// but never the precedence table: operator declarations from earlier
/// calls stay visible to later ones.
///
/// A session holds mutable cursor state throughout, so it cannot be
/// shared across threads; use one session per thread.
pub struct Parser {
    lexer: Lexer,
    next: Token,
    pub(super) precedence: OpTable,
    pub(super) diagnostics: DiagnosticBag,
}

impl Parser {
    /// Creates a session. The origin names the compilation unit in
    /// error reports; `None` reports against `"input"`.
    pub fn new(origin: Option<String>) -> Self {
        let mut lexer = Lexer::new(Source::new("", origin));
        let next = lexer.next();

        Parser {
            lexer,
            next,
            precedence: OpTable::new(),
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Parses one top-level item from an input string.
    ///
    /// On malformed input the parser keeps going: it records a
    /// diagnostic, substitutes an absent node, resynchronizes at the
    /// nearest structural boundary and parses the remaining siblings.
    /// All diagnostics collected for the input are surfaced together in
    /// the returned error.
    pub fn parse_item(&mut self, input: &str) -> Result<Item, ParseError> {
        self.load(input);
        debug!("parsing item from {}", self.lexer.source().origin());

        let item = match self.current_token_kind() {
            TokenKind::Def => parse_definition(self).map(Item::Function),
            TokenKind::Extern => parse_extern(self).map(Item::Prototype),
            _ => parse_top_level_expr(self).map(Item::Function),
        };

        self.synchronize(&[TokenKind::Eof]);
        if self.current_token_kind() != TokenKind::Eof {
            let span = self.next.span.clone();
            self.diagnostics.emit(SyntaxErrorKind::UnexpectedToken, span);
        }

        match item {
            Some(item) if self.diagnostics.is_empty() => Ok(item),
            _ => Err(self.diagnostics.into_error(self.lexer.source().origin())),
        }
    }

    /// The diagnostics recorded so far for the current input.
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Loads a new input, resetting everything except the precedence
    /// table.
    pub(super) fn load(&mut self, input: &str) {
        self.lexer.load(input);
        self.diagnostics.clear();
        self.next = self.lexer.next();
    }

    pub(super) fn current_token(&self) -> &Token {
        &self.next
    }

    pub(super) fn current_token_kind(&self) -> TokenKind {
        self.next.kind
    }

    /// Advances to the next token and returns the previous token.
    pub(super) fn advance(&mut self) -> Token {
        let next = self.lexer.next();
        std::mem::replace(&mut self.next, next)
    }

    /// Consumes a token of the expected kind, or emits `error` anchored
    /// at the offending token and returns None.
    pub(super) fn consume(
        &mut self,
        expected_kind: TokenKind,
        error: SyntaxErrorKind,
    ) -> Option<Token> {
        if self.next.kind == expected_kind {
            Some(self.advance())
        } else {
            let span = self.next.span.clone();
            self.diagnostics.emit(error, span);
            None
        }
    }

    /// While panicking, skips tokens until one of `stop_kinds` or
    /// end-of-input and leaves panic mode. No-op otherwise.
    pub(super) fn synchronize(&mut self, stop_kinds: &[TokenKind]) {
        if !self.diagnostics.is_panicking() {
            return;
        }

        while self.next.kind != TokenKind::Eof && !stop_kinds.contains(&self.next.kind) {
            self.advance();
        }

        debug!("resynchronized at {}", self.next.span.start);
        self.diagnostics.recover();
    }

    /// Parses a comma-separated list of items using some parse function.
    ///
    /// A failed element resynchronizes at the next comma or terminator,
    /// so one malformed entry does not take its siblings with it.
    pub(super) fn parse_list<T>(
        &mut self,
        parse: fn(&mut Parser) -> Option<T>,
        end: TokenKind,
    ) -> Vec<T> {
        let mut result = vec![];

        while self.next.kind != TokenKind::Eof && self.next.kind != end {
            if let Some(element) = parse(self) {
                result.push(element);
            } else {
                self.synchronize(&[TokenKind::Comma, end]);
            }

            if self.next.kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }

        result
    }
}
