use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{Diagnostic, Span};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser over an `Eof`-terminated token sequence.
///
/// Two-level precedence grammar:
///
/// ```text
/// expression := term (('+' | '-') term)*      left-associative
/// term       := factor (('*' | '/') factor)*  left-associative
/// factor     := INTEGER
///             | ('+' | '-') term
///             | '(' expression ')'
/// ```
///
/// A unary operator binds a full term, not a factor, so `-2*3` parses as
/// `-(2*3)`.
///
/// The parser holds a single advancing cursor and never rewinds. It never
/// fails with an error either: each syntax problem emits one `Diagnostic`,
/// the affected node is marked invalid, and a tree is still returned so the
/// caller releases everything uniformly.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// `tokens` must end with an `Eof` token, as produced by
    /// `Lexer::scan_tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parses one expression spanning the whole input. Trailing tokens after
    /// a complete expression are a diagnostic and invalidate the result.
    pub fn parse(mut self) -> (Expr, Vec<Diagnostic>) {
        let mut expr = self.expression();

        if !self.check(TokenKind::Eof) {
            self.error("Unexpected input after expression", self.peek().span);
            expr.mark_invalid();
        }

        (expr, self.diagnostics)
    }

    fn expression(&mut self) -> Expr {
        let mut expr = self.term();

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.term();
            expr = Expr::binary(op, expr, rhs);
        }

        expr
    }

    fn term(&mut self) -> Expr {
        let mut expr = self.factor();

        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.factor();
            expr = Expr::binary(op, expr, rhs);
        }

        expr
    }

    fn factor(&mut self) -> Expr {
        let token = self.advance().clone();

        match token.kind {
            TokenKind::Integer => match token.value {
                Some(value) => Expr::number(value),
                None => {
                    self.error("Integer literal out of range", token.span);
                    Expr::invalid()
                }
            },
            TokenKind::Plus => Expr::unary(UnaryOp::Plus, self.term()),
            TokenKind::Minus => Expr::unary(UnaryOp::Neg, self.term()),
            TokenKind::LeftParen => self.parenthesized(),
            _ => {
                self.error("Unexpected token", token.span);
                Expr::invalid()
            }
        }
    }

    fn parenthesized(&mut self) -> Expr {
        let mut expr = self.expression();

        if self.check(TokenKind::RightParen) {
            self.advance();
        } else {
            self.error(
                "Expected closing ')' at end of expression",
                self.peek().span,
            );
            expr.mark_invalid();
        }

        expr
    }

    fn error(&mut self, message: &str, span: Span) {
        self.diagnostics.push(Diagnostic::new(message, span));
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Advances past the current token and returns it. The cursor never
    /// moves past `Eof`, so a factor expected at end of input reports the
    /// `Eof` token rather than reading out of bounds.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
            &self.tokens[self.current - 1]
        } else {
            self.peek()
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }
}
