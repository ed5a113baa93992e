use crate::ast::{token_span, ExpressionSyntax, SyntaxTree};
use crate::error::Diagnostic;
use crate::lexer::{Lexer, Token, TokenKind};

/// Deepest chain of nested unary or parenthesized expressions the parser will
/// build. Every later stage walks the tree recursively.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Precedence-climbing parser over the trivia-free token stream of one line.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
    abandoned: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        let mut diagnostics = Vec::new();
        let mut lexer = Lexer::new(text);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token(&mut diagnostics);
            let kind = token.kind;
            if kind != TokenKind::Whitespace && kind != TokenKind::Bad {
                tokens.push(token);
            }
            if kind == TokenKind::EndOfFile {
                break;
            }
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
            abandoned: false,
            diagnostics,
        }
    }

    /// Parses a single expression followed by end of input. Never fails;
    /// problems are recorded in the tree's diagnostics.
    pub fn parse(mut self) -> SyntaxTree {
        let root = self.parse_expression(0);
        let end_of_file = self.match_token(TokenKind::EndOfFile);

        SyntaxTree {
            diagnostics: self.diagnostics,
            root,
            end_of_file,
        }
    }

    fn parse_expression(&mut self, parent_precedence: u8) -> ExpressionSyntax {
        if self.depth >= MAX_NESTING_DEPTH {
            return self.abandon_nesting();
        }

        self.depth += 1;
        let expression = self.parse_operator_expression(parent_precedence);
        self.depth -= 1;
        expression
    }

    /// Reports the nesting limit once, skips the rest of the line and
    /// returns a placeholder operand.
    fn abandon_nesting(&mut self) -> ExpressionSyntax {
        let current = self.peek(0);
        let span = token_span(current);
        let position = current.position;
        self.diagnostics
            .push(Diagnostic::nesting_too_deep(span, MAX_NESTING_DEPTH));

        self.current = self.tokens.len() - 1;
        self.abandoned = true;
        ExpressionSyntax::Number {
            number_token: Token::missing(TokenKind::Number, position),
        }
    }

    fn parse_operator_expression(&mut self, parent_precedence: u8) -> ExpressionSyntax {
        let unary_precedence = self.peek(0).kind.unary_precedence();
        let mut left = if unary_precedence != 0 && unary_precedence >= parent_precedence {
            let operator_token = self.advance();
            let operand = self.parse_expression(unary_precedence);
            ExpressionSyntax::Unary {
                operator_token,
                operand: Box::new(operand),
            }
        } else {
            self.parse_primary_expression()
        };

        loop {
            let precedence = self.peek(0).kind.binary_precedence();
            if precedence == 0 || precedence <= parent_precedence {
                break;
            }

            let operator_token = self.advance();
            let right = self.parse_expression(precedence);
            left = ExpressionSyntax::Binary {
                left: Box::new(left),
                operator_token,
                right: Box::new(right),
            };
        }

        left
    }

    fn parse_primary_expression(&mut self) -> ExpressionSyntax {
        if self.check(TokenKind::OpenParenthesis) {
            let open_parenthesis_token = self.advance();
            let expression = self.parse_expression(0);
            let close_parenthesis_token = self.match_token(TokenKind::CloseParenthesis);
            return ExpressionSyntax::Parenthesized {
                open_parenthesis_token,
                expression: Box::new(expression),
                close_parenthesis_token,
            };
        }

        let number_token = self.match_token(TokenKind::Number);
        ExpressionSyntax::Number { number_token }
    }

    /// Consumes the current token if it has the expected kind. Otherwise
    /// records a diagnostic and hands back a placeholder of that kind,
    /// leaving the cursor where it is. Once the line has been abandoned the
    /// placeholders are handed back silently.
    fn match_token(&mut self, kind: TokenKind) -> Token {
        if self.check(kind) {
            return self.advance();
        }
        if self.abandoned {
            return Token::missing(kind, self.peek(0).position);
        }

        let actual = self.peek(0);
        let diagnostic =
            Diagnostic::unexpected_token(token_span(actual), actual.kind, kind, &actual.text);
        let position = actual.position;
        self.diagnostics.push(diagnostic);
        Token::missing(kind, position)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek(0).kind == kind
    }

    /// Looks `offset` tokens ahead, sticking to the final EndOfFile token.
    fn peek(&self, offset: usize) -> &Token {
        let index = self.current + offset;
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek(0).clone();
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        token
    }
}
