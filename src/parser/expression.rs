//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Each node owns its children, the tree is never
//! mutated once the parser hands it out.

use std::fmt::Display;

use crate::{printer::AstPrinter, scanner::Token};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> { Box::new(Expression::Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Expression::Grouping(expr)) }

	pub fn literal(value: LiteralValue<'a>) -> Box<Self> { Box::new(Expression::Literal(value)) }

	/// Hand this node to the matching `visit_*` method of `visitor`.
	pub fn accept<V: ExpressionVisitor<'a>>(&self, visitor: &mut V) -> V::Output {
		match self {
			Expression::Literal(value) => visitor.visit_literal(value),
			Expression::Unary { operator, right } => visitor.visit_unary(operator, right),
			Expression::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
			Expression::Grouping(inner) => visitor.visit_grouping(inner),
		}
	}
}

/// One traversal over expressions, e.g. evaluation or printing.
pub trait ExpressionVisitor<'a> {
	type Output;

	fn visit_literal(&mut self, value: &LiteralValue<'a>) -> Self::Output;

	fn visit_unary(&mut self, operator: &Token<'a>, right: &Expression<'a>) -> Self::Output;

	fn visit_binary(&mut self, left: &Expression<'a>, operator: &Token<'a>, right: &Expression<'a>) -> Self::Output;

	fn visit_grouping(&mut self, inner: &Expression<'a>) -> Self::Output;
}

/// Literal values in the AST
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue<'a> {
	Number(f64),
	String(&'a str),
	Boolean(bool),
	Nil,
}

impl<'a> TryFrom<Token<'a>> for LiteralValue<'a> {
	type Error = anyhow::Error;

	fn try_from(token: Token<'a>) -> Result<Self, Self::Error> {
		use crate::scanner::TokenType::*;

		Ok(match token.r#type {
			Number(n) => LiteralValue::Number(n),
			String(s) => LiteralValue::String(s),
			True => LiteralValue::Boolean(true),
			False => LiteralValue::Boolean(false),
			Nil => LiteralValue::Nil,
			_ => anyhow::bail!("Cannot convert token {:?} to a literal", token),
		})
	}
}

impl Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", AstPrinter.print_expression(self))
	}
}

impl Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{n}"),
			LiteralValue::String(s) => write!(f, "{s}"),
			LiteralValue::Boolean(b) => write!(f, "{b}"),
			LiteralValue::Nil => write!(f, "nil"),
		}
	}
}
