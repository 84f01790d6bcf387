//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. A program is just an ordered list of statements.

use std::fmt::Display;

use crate::{parser::Expression, printer::AstPrinter};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// An expression used as a statement, its value is discarded.
	Expression(Expression<'a>),
	/// A print statement.
	Print(Expression<'a>),
}

impl<'a> Statement<'a> {
	pub fn accept<V: StatementVisitor<'a>>(&self, visitor: &mut V) -> V::Output {
		match self {
			Statement::Expression(expression) => visitor.visit_expression_statement(expression),
			Statement::Print(expression) => visitor.visit_print_statement(expression),
		}
	}
}

/// One traversal over statements.
pub trait StatementVisitor<'a> {
	type Output;

	fn visit_expression_statement(&mut self, expression: &Expression<'a>) -> Self::Output;

	fn visit_print_statement(&mut self, expression: &Expression<'a>) -> Self::Output;
}

impl Display for Statement<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", AstPrinter.print_statement(self))
	}
}
