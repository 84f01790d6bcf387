//! Fully parenthesized prefix rendering of the syntax tree, e.g.
//! `(* (- 123) (group 45.67))`.
//!
//! This is for looking at what the parser built. Strings are printed without
//! their quotes, so the output is not meant to be scanned again.

use crate::{
	parser::{Expression, ExpressionVisitor, LiteralValue},
	scanner::Token,
	statement::{Statement, StatementVisitor},
};

/// Side-effect free visitor that turns expressions and statements into text.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
	pub fn print_expression(&mut self, expression: &Expression<'_>) -> String { expression.accept(self) }

	pub fn print_statement(&mut self, statement: &Statement<'_>) -> String { statement.accept(self) }

	/// Print a whole program, one statement per line.
	pub fn print(&mut self, statements: &[Statement<'_>]) -> String {
		statements.iter().map(|statement| self.print_statement(statement)).collect::<Vec<_>>().join("\n")
	}

	fn parenthesize(&mut self, name: &str, expressions: &[&Expression<'_>]) -> String {
		let mut builder = format!("({name}");
		for expression in expressions {
			builder.push(' ');
			builder.push_str(&expression.accept(self));
		}
		builder.push(')');
		builder
	}
}

impl<'a> ExpressionVisitor<'a> for AstPrinter {
	type Output = String;

	fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String { value.to_string() }

	fn visit_unary(&mut self, operator: &Token<'a>, right: &Expression<'a>) -> String {
		self.parenthesize(operator.lexeme, &[right])
	}

	fn visit_binary(&mut self, left: &Expression<'a>, operator: &Token<'a>, right: &Expression<'a>) -> String {
		self.parenthesize(operator.lexeme, &[left, right])
	}

	fn visit_grouping(&mut self, inner: &Expression<'a>) -> String { self.parenthesize("group", &[inner]) }
}

impl<'a> StatementVisitor<'a> for AstPrinter {
	type Output = String;

	fn visit_expression_statement(&mut self, expression: &Expression<'a>) -> String { expression.accept(self) }

	fn visit_print_statement(&mut self, expression: &Expression<'a>) -> String { self.parenthesize("print", &[expression]) }
}
