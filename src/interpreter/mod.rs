//! Lox tree-walking interpreter.
//!
//! The interpreter walks the abstract syntax tree (AST) produced by the parser,
//! recursively evaluating each expression and computing its runtime value.
//!
//! # Expression Types
//!
//! - **Literals**: `nil`, booleans, numbers, strings
//! - **Unary**: `-` (negation), `!` (logical NOT)
//! - **Binary**: `+`, `-`, `*`, `/`, comparisons, equality
//! - **Grouping**: Parenthesized expressions
//!
//! Operands are always evaluated left to right. The first runtime type error
//! stops the program, nothing after it runs.

pub mod value;

use std::io::Write;

use anyhow::Context;
use tracing::debug;
use value::Value;

use crate::{
	LoxError,
	error::interpreter::InterpreterError,
	parser::{Expression, ExpressionVisitor, LiteralValue},
	scanner::{Token, TokenType::*},
	statement::{Statement, StatementVisitor},
};

/// Interpreter that executes Lox statements, writing `print` output to `out`.
pub struct Interpreter<W> {
	out: W,
}

impl<W: Write> Interpreter<W> {
	pub fn new(out: W) -> Self { Self { out } }

	/// Execute statements in order, stopping at the first runtime error.
	pub fn interpret(&mut self, statements: &[Statement<'_>]) -> Result<(), LoxError> {
		debug!(statements = statements.len(), "interpreting program");
		for statement in statements {
			statement.accept(self)?;
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate(&mut self, expression: &Expression<'_>) -> Result<Value, InterpreterError> { expression.accept(self) }

	pub fn into_inner(self) -> W { self.out }
}

impl<'a, W: Write> StatementVisitor<'a> for Interpreter<W> {
	type Output = Result<(), LoxError>;

	fn visit_expression_statement(&mut self, expression: &Expression<'a>) -> Self::Output {
		self.evaluate(expression)?;
		Ok(())
	}

	fn visit_print_statement(&mut self, expression: &Expression<'a>) -> Self::Output {
		let value = self.evaluate(expression)?;
		writeln!(self.out, "{value}").context("Failed write print output")?;
		Ok(())
	}
}

impl<'a, W: Write> ExpressionVisitor<'a> for Interpreter<W> {
	type Output = Result<Value, InterpreterError>;

	fn visit_literal(&mut self, value: &LiteralValue<'a>) -> Self::Output {
		Ok(match value {
			LiteralValue::Nil => Value::Nil,
			LiteralValue::Boolean(b) => Value::Bool(*b),
			LiteralValue::Number(n) => Value::Num(*n),
			LiteralValue::String(s) => Value::Str(s.to_string()),
		})
	}

	fn visit_unary(&mut self, operator: &Token<'a>, right: &Expression<'a>) -> Self::Output {
		let right_value = self.evaluate(right)?;
		Ok(match (&operator.r#type, &right_value) {
			(Minus, Value::Num(n)) => Value::Num(-n),
			(Minus, _) => return Err(InterpreterError::OperandMustBeNumber {
				operator: operator.lexeme.to_string(),
				line:     operator.line,
			}),
			(Bang, v) => Value::Bool(!v.to_bool()),
			_ => return Err(unknown_operator(operator)),
		})
	}

	fn visit_binary(&mut self, left: &Expression<'a>, operator: &Token<'a>, right: &Expression<'a>) -> Self::Output {
		let left_value = self.evaluate(left)?;
		let right_value = self.evaluate(right)?;
		left_value.binary_op(&operator.r#type, &right_value).ok_or_else(|| operand_error(operator))
	}

	fn visit_grouping(&mut self, inner: &Expression<'a>) -> Self::Output { self.evaluate(inner) }
}

/// The error for a binary operator whose operands have the wrong types.
fn operand_error(operator: &Token<'_>) -> InterpreterError {
	let (operator_text, line) = (operator.lexeme.to_string(), operator.line);
	match operator.r#type {
		Plus => InterpreterError::OperandsMustBeNumbersOrStrings { operator: operator_text, line },
		Minus | Star | Slash | Greater | GreaterEqual | Less | LessEqual => {
			InterpreterError::OperandsMustBeNumbers { operator: operator_text, line }
		}
		_ => unknown_operator(operator),
	}
}

fn unknown_operator(operator: &Token<'_>) -> InterpreterError {
	InterpreterError::UnknownOperator { operator: operator.lexeme.to_string(), line: operator.line }
}
