use crate::error::{Diagnostic, Span};
use crate::lexer::{Token, TokenKind};
use std::fmt;

/// Untyped expression tree produced by the parser. Every node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSyntax {
    Number {
        number_token: Token,
    },
    Unary {
        operator_token: Token,
        operand: Box<ExpressionSyntax>,
    },
    Binary {
        left: Box<ExpressionSyntax>,
        operator_token: Token,
        right: Box<ExpressionSyntax>,
    },
    Parenthesized {
        open_parenthesis_token: Token,
        expression: Box<ExpressionSyntax>,
        close_parenthesis_token: Token,
    },
}

impl ExpressionSyntax {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            ExpressionSyntax::Number { .. } => SyntaxKind::NumberExpression,
            ExpressionSyntax::Unary { .. } => SyntaxKind::UnaryExpression,
            ExpressionSyntax::Binary { .. } => SyntaxKind::BinaryExpression,
            ExpressionSyntax::Parenthesized { .. } => SyntaxKind::ParenthesizedExpression,
        }
    }

    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            ExpressionSyntax::Number { number_token } => vec![SyntaxNode::Token(number_token)],
            ExpressionSyntax::Unary {
                operator_token,
                operand,
            } => vec![
                SyntaxNode::Token(operator_token),
                SyntaxNode::Expression(operand),
            ],
            ExpressionSyntax::Binary {
                left,
                operator_token,
                right,
            } => vec![
                SyntaxNode::Expression(left),
                SyntaxNode::Token(operator_token),
                SyntaxNode::Expression(right),
            ],
            ExpressionSyntax::Parenthesized {
                open_parenthesis_token,
                expression,
                close_parenthesis_token,
            } => vec![
                SyntaxNode::Token(open_parenthesis_token),
                SyntaxNode::Expression(expression),
                SyntaxNode::Token(close_parenthesis_token),
            ],
        }
    }
}

pub fn token_span(token: &Token) -> Span {
    Span::new(token.position, token.position + token.len().max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    Token(TokenKind),
    NumberExpression,
    UnaryExpression,
    BinaryExpression,
    ParenthesizedExpression,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxKind::Token(kind) => write!(f, "{}", kind),
            SyntaxKind::NumberExpression => write!(f, "NumberExpression"),
            SyntaxKind::UnaryExpression => write!(f, "UnaryExpression"),
            SyntaxKind::BinaryExpression => write!(f, "BinaryExpression"),
            SyntaxKind::ParenthesizedExpression => write!(f, "ParenthesizedExpression"),
        }
    }
}

/// Borrowed view of any node in the tree; tokens are leaves.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Token(&'a Token),
    Expression(&'a ExpressionSyntax),
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxNode::Token(token) => SyntaxKind::Token(token.kind),
            SyntaxNode::Expression(expression) => expression.kind(),
        }
    }

    pub fn children(&self) -> Vec<SyntaxNode<'a>> {
        match *self {
            SyntaxNode::Token(_) => Vec::new(),
            SyntaxNode::Expression(expression) => expression.children(),
        }
    }

    /// Writes the node and its descendants as an indented tree, one node per line.
    pub fn write_tree(&self, f: &mut impl fmt::Write) -> fmt::Result {
        self.write_tree_at(f, "", true)
    }

    fn write_tree_at(&self, f: &mut impl fmt::Write, indent: &str, is_last: bool) -> fmt::Result {
        let marker = if is_last { "└──" } else { "├──" };
        write!(f, "{}{}{}", indent, marker, self.kind())?;

        if let SyntaxNode::Token(Token {
            value: Some(value), ..
        }) = self
        {
            write!(f, " {}", value)?;
        }
        writeln!(f)?;

        let indent = format!("{}{}", indent, if is_last { "    " } else { "│   " });
        let children = self.children();
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            child.write_tree_at(f, &indent, i + 1 == count)?;
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_tree(f)
    }
}

/// Result of parsing one line: the expression, the end-of-file token and
/// every diagnostic raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub diagnostics: Vec<Diagnostic>,
    pub root: ExpressionSyntax,
    pub end_of_file: Token,
}

impl SyntaxTree {
    pub fn parse(text: &str) -> SyntaxTree {
        crate::parser::Parser::new(text).parse()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn root_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Expression(&self.root)
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root_node().write_tree(f)
    }
}
