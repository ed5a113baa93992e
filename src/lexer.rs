use crate::error::Diagnostic;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,

    // Trivia
    Whitespace,

    // Single-character tokens
    Plus,
    Minus,
    Star,
    Slash,
    OpenParenthesis,
    CloseParenthesis,

    // Special
    Bad,
    EndOfFile,
}

impl TokenKind {
    /// Binding power of the token in infix position, 0 for non-operators.
    pub fn binary_precedence(self) -> u8 {
        match self {
            TokenKind::Star | TokenKind::Slash => 2,
            TokenKind::Plus | TokenKind::Minus => 1,
            _ => 0,
        }
    }

    /// Binding power of the token in prefix position, 0 for non-operators.
    pub fn unary_precedence(self) -> u8 {
        match self {
            TokenKind::Plus | TokenKind::Minus => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NumberToken",
            TokenKind::Whitespace => "WhitespaceToken",
            TokenKind::Plus => "PlusToken",
            TokenKind::Minus => "MinusToken",
            TokenKind::Star => "StarToken",
            TokenKind::Slash => "SlashToken",
            TokenKind::OpenParenthesis => "OpenParenthesisToken",
            TokenKind::CloseParenthesis => "CloseParenthesisToken",
            TokenKind::Bad => "BadToken",
            TokenKind::EndOfFile => "EndOfFileToken",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub text: String,
    pub value: Option<i32>,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize, text: String, value: Option<i32>) -> Self {
        Self {
            kind,
            position,
            text,
            value,
        }
    }

    /// Placeholder the parser substitutes when the expected token is missing.
    pub fn missing(kind: TokenKind, position: usize) -> Self {
        Self::new(kind, position, String::new(), None)
    }

    pub fn len(&self) -> usize {
        match self.kind {
            TokenKind::EndOfFile => 0,
            _ => self.text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// On-demand scanner over one line of input. Positions are character offsets.
pub struct Lexer {
    source: Vec<char>,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
        }
    }

    /// Returns the next token; once the input is exhausted every call yields EndOfFile.
    pub fn next_token(&mut self, diagnostics: &mut Vec<Diagnostic>) -> Token {
        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Token::new(TokenKind::EndOfFile, self.current, "\0".to_string(), None);
            }
        };

        let start = self.current;

        if c.is_ascii_digit() {
            self.advance_while(|c| c.is_ascii_digit());
            let text = self.text_from(start);
            // Out-of-range literals stay Number tokens with a value of 0.
            let value = text.parse::<i32>().unwrap_or(0);
            return Token::new(TokenKind::Number, start, text, Some(value));
        }

        if c.is_whitespace() {
            self.advance_while(char::is_whitespace);
            return Token::new(TokenKind::Whitespace, start, self.text_from(start), None);
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            _ => {
                diagnostics.push(Diagnostic::bad_character(start, c));
                TokenKind::Bad
            }
        };

        self.current += 1;
        Token::new(kind, start, c.to_string(), None)
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.current += 1;
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.current].iter().collect()
    }
}
