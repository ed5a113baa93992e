// minicalc: a line-at-a-time integer calculator
//
// Each line is scanned, parsed into a syntax tree with recoverable
// diagnostics, bound to a typed tree and evaluated. Nothing is kept
// between lines.

// Public modules
pub mod ast;
pub mod binder;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runner;
pub mod value;

// Re-export commonly used items
pub use ast::{ExpressionSyntax, SyntaxKind, SyntaxNode, SyntaxTree};
pub use binder::{bind, BoundExpression};
pub use error::{BindError, CalcError, Diagnostic, Fault, RuntimeError, Span};
pub use evaluator::evaluate;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use value::ValueType;

// Re-export main functions
pub use runner::{evaluate_line, run};
