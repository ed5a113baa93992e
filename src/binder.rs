use crate::ast::{token_span, ExpressionSyntax};
use crate::error::{BindError, Span};
use crate::lexer::TokenKind;
use crate::value::ValueType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundUnaryOperatorKind {
    Identity,
    Negation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundBinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// A prefix operator rule: which token, on which operand type, yields what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundUnaryOperator {
    pub token_kind: TokenKind,
    pub kind: BoundUnaryOperatorKind,
    pub operand_type: ValueType,
    pub result_type: ValueType,
}

impl BoundUnaryOperator {
    const fn new(token_kind: TokenKind, kind: BoundUnaryOperatorKind, ty: ValueType) -> Self {
        Self {
            token_kind,
            kind,
            operand_type: ty,
            result_type: ty,
        }
    }

    pub fn lookup(token_kind: TokenKind, operand_type: ValueType) -> Option<&'static Self> {
        UNARY_OPERATORS
            .iter()
            .find(|op| op.token_kind == token_kind && op.operand_type == operand_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundBinaryOperator {
    pub token_kind: TokenKind,
    pub kind: BoundBinaryOperatorKind,
    pub left_type: ValueType,
    pub right_type: ValueType,
    pub result_type: ValueType,
}

impl BoundBinaryOperator {
    const fn new(token_kind: TokenKind, kind: BoundBinaryOperatorKind, ty: ValueType) -> Self {
        Self {
            token_kind,
            kind,
            left_type: ty,
            right_type: ty,
            result_type: ty,
        }
    }

    pub fn lookup(
        token_kind: TokenKind,
        left_type: ValueType,
        right_type: ValueType,
    ) -> Option<&'static Self> {
        BINARY_OPERATORS.iter().find(|op| {
            op.token_kind == token_kind && op.left_type == left_type && op.right_type == right_type
        })
    }
}

static UNARY_OPERATORS: [BoundUnaryOperator; 2] = [
    BoundUnaryOperator::new(TokenKind::Plus, BoundUnaryOperatorKind::Identity, ValueType::Int),
    BoundUnaryOperator::new(TokenKind::Minus, BoundUnaryOperatorKind::Negation, ValueType::Int),
];

static BINARY_OPERATORS: [BoundBinaryOperator; 4] = [
    BoundBinaryOperator::new(TokenKind::Plus, BoundBinaryOperatorKind::Addition, ValueType::Int),
    BoundBinaryOperator::new(TokenKind::Minus, BoundBinaryOperatorKind::Subtraction, ValueType::Int),
    BoundBinaryOperator::new(TokenKind::Star, BoundBinaryOperatorKind::Multiplication, ValueType::Int),
    BoundBinaryOperator::new(TokenKind::Slash, BoundBinaryOperatorKind::Division, ValueType::Int),
];

/// Typed tree ready for evaluation. Parentheses have no bound form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundExpression {
    Literal {
        value: i32,
        span: Span,
    },
    Unary {
        operator: BoundUnaryOperatorKind,
        operand: Box<BoundExpression>,
        ty: ValueType,
    },
    Binary {
        left: Box<BoundExpression>,
        operator: BoundBinaryOperatorKind,
        right: Box<BoundExpression>,
        ty: ValueType,
        /// Location of the operator token, used when evaluation faults.
        span: Span,
    },
}

impl BoundExpression {
    pub fn ty(&self) -> ValueType {
        match self {
            BoundExpression::Literal { .. } => ValueType::Int,
            BoundExpression::Unary { ty, .. } => *ty,
            BoundExpression::Binary { ty, .. } => *ty,
        }
    }
}

pub fn bind(syntax: &ExpressionSyntax) -> Result<BoundExpression, BindError> {
    match syntax {
        ExpressionSyntax::Number { number_token } => Ok(BoundExpression::Literal {
            // Placeholder tokens carry no value.
            value: number_token.value.unwrap_or(0),
            span: token_span(number_token),
        }),
        ExpressionSyntax::Unary {
            operator_token,
            operand,
        } => {
            let bound_operand = bind(operand)?;
            let operand_type = bound_operand.ty();
            let operator = BoundUnaryOperator::lookup(operator_token.kind, operand_type)
                .ok_or(BindError::UnsupportedUnaryOperator {
                    operator: operator_token.kind,
                    operand: operand_type,
                    span: token_span(operator_token),
                })?;

            Ok(BoundExpression::Unary {
                operator: operator.kind,
                operand: Box::new(bound_operand),
                ty: operator.result_type,
            })
        }
        ExpressionSyntax::Binary {
            left,
            operator_token,
            right,
        } => {
            let bound_left = bind(left)?;
            let bound_right = bind(right)?;
            let operator =
                BoundBinaryOperator::lookup(operator_token.kind, bound_left.ty(), bound_right.ty())
                    .ok_or(BindError::UnsupportedBinaryOperator {
                        operator: operator_token.kind,
                        left: bound_left.ty(),
                        right: bound_right.ty(),
                        span: token_span(operator_token),
                    })?;

            Ok(BoundExpression::Binary {
                left: Box::new(bound_left),
                operator: operator.kind,
                right: Box::new(bound_right),
                ty: operator.result_type,
                span: token_span(operator_token),
            })
        }
        ExpressionSyntax::Parenthesized { expression, .. } => bind(expression),
    }
}
