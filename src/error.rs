use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io;

use crate::lexer::TokenKind;
use crate::value::ValueType;

/// Character offsets into a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    BindError,
    RuntimeError,
}

impl ErrorKind {
    fn color(self) -> Color {
        match self {
            ErrorKind::LexError => Color::Red,
            ErrorKind::ParseError => Color::Yellow,
            ErrorKind::BindError => Color::Blue,
            ErrorKind::RuntimeError => Color::Magenta,
        }
    }

    fn title(self) -> &'static str {
        match self {
            ErrorKind::LexError => "Lexical Error",
            ErrorKind::ParseError => "Parse Error",
            ErrorKind::BindError => "Binding Error",
            ErrorKind::RuntimeError => "Runtime Error",
        }
    }
}

/// A recoverable problem found while scanning or parsing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn bad_character(position: usize, character: char) -> Self {
        Self {
            kind: ErrorKind::LexError,
            severity: Severity::Error,
            span: Span::single(position),
            message: format!("bad character input '{}'", character),
        }
    }

    pub fn unexpected_token(span: Span, actual: TokenKind, expected: TokenKind, text: &str) -> Self {
        Self {
            kind: ErrorKind::ParseError,
            severity: Severity::Error,
            span,
            message: format!(
                "Unexpected Token <{}>, expected <{}>, at <{}>",
                actual, expected, text
            ),
        }
    }

    pub fn nesting_too_deep(span: Span, limit: usize) -> Self {
        Self {
            kind: ErrorKind::ParseError,
            severity: Severity::Error,
            span,
            message: format!("Expression nested deeper than {} levels", limit),
        }
    }

    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn report(&self, source: &str, filename: Option<&str>) -> io::Result<()> {
        render(self.kind, self.span, &self.message, None, source, filename)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Operator/type combination the binder has no rule for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("unsupported unary operator {operator} for operand type {operand}")]
    UnsupportedUnaryOperator {
        operator: TokenKind,
        operand: ValueType,
        span: Span,
    },
    #[error("unsupported binary operator {operator} for operand types {left} and {right}")]
    UnsupportedBinaryOperator {
        operator: TokenKind,
        left: ValueType,
        right: ValueType,
        span: Span,
    },
}

impl BindError {
    pub fn span(&self) -> Span {
        match self {
            BindError::UnsupportedUnaryOperator { span, .. } => *span,
            BindError::UnsupportedBinaryOperator { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero { span: Span },
}

impl RuntimeError {
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::DivisionByZero { span } => *span,
        }
    }

    fn help(&self) -> &'static str {
        match self {
            RuntimeError::DivisionByZero { .. } => "the right-hand side of '/' evaluated to 0",
        }
    }
}

/// Failure after a clean parse: the line bound or evaluated badly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Fault {
    pub fn span(&self) -> Span {
        match self {
            Fault::Bind(error) => error.span(),
            Fault::Runtime(error) => error.span(),
        }
    }

    pub fn report(&self, source: &str, filename: Option<&str>) -> io::Result<()> {
        let (kind, help) = match self {
            Fault::Bind(_) => (ErrorKind::BindError, None),
            Fault::Runtime(error) => (ErrorKind::RuntimeError, Some(error.help())),
        };
        render(kind, self.span(), &self.to_string(), help, source, filename)
    }
}

/// Everything that can stop a single line from producing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("{} diagnostic(s) reported", .0.len())]
    Diagnostics(Vec<Diagnostic>),
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl CalcError {
    pub fn report(&self, source: &str, filename: Option<&str>) -> io::Result<()> {
        match self {
            CalcError::Diagnostics(diagnostics) => {
                for diagnostic in diagnostics {
                    diagnostic.report(source, filename)?;
                }
                Ok(())
            }
            CalcError::Fault(fault) => fault.report(source, filename),
        }
    }
}

fn render(
    kind: ErrorKind,
    span: Span,
    message: &str,
    help: Option<&str>,
    source: &str,
    filename: Option<&str>,
) -> io::Result<()> {
    let filename = filename.unwrap_or("<repl>");
    let color = kind.color();

    // Placeholders synthesized at end of input point one past the text.
    let length = source.chars().count();
    let start = span.start.min(length);
    let end = span.end.min(length).max(start);

    let mut report_builder = Report::build(ReportKind::Error, filename, start)
        .with_message(format!("{}: {}", kind.title().fg(color), message))
        .with_label(
            Label::new((filename, start..end))
                .with_message(message)
                .with_color(color),
        );

    if let Some(help_text) = help {
        report_builder = report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
    }

    report_builder
        .finish()
        .eprint((filename, Source::from(source)))
}
