use crate::error::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character tokens
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,

    // Literals
    Integer,
    Identifier,

    // Special
    Eof,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Parsed payload of an `Integer` token; `None` for every other kind,
    /// and also for an integer literal that does not fit in `i64` (the
    /// parser reports that case).
    pub value: Option<i64>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    pub fn integer(value: Option<i64>, span: Span) -> Self {
        Self {
            kind: TokenKind::Integer,
            span,
            value,
        }
    }
}

/// Single-pass scanner over one line of input. Scanning never fails: an
/// unrecognized character becomes an `Unknown` token and the parser owns the
/// error semantics. Whitespace is not special-cased, so a space also lexes
/// as `Unknown` and `1 2` is rejected downstream.
pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Produces the ordered token sequence, terminated by exactly one
    /// zero-width `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, Span::empty(self.current)));
        self.tokens
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            _ => self.add_token(TokenKind::Unknown),
        }
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn number(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        // An out-of-range literal still produces an Integer token; the
        // absent payload is what the parser reports.
        let value = self.source[self.start..self.current].parse::<i64>().ok();
        self.tokens
            .push(Token::integer(value, Span::new(self.start, self.current)));
    }

    fn identifier(&mut self) {
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            self.advance();
        }

        self.add_token(TokenKind::Identifier);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens
            .push(Token::new(kind, Span::new(self.start, self.current)));
    }
}
