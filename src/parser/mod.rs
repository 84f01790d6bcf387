//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → printStmt | exprStmt ;
//! printStmt      → "print" expression ";" ;
//! exprStmt       → expression ";" ;
//! expression     → equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```

mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::Context;
pub use expression::{Expression, ExpressionVisitor, LiteralValue};
use tracing::{debug, trace};

use crate::{
	LoxError,
	error::{
		parser::{ParseError, ParseErrorType, ParserError},
		report::Reporter,
	},
	scanner::{Token, TokenType},
	statement::Statement,
};

/// Recursive-descent parser over a scanned token stream.
pub struct Parser<'a> {
	/// The tokens to parse, ending with `Eof`.
	tokens: Peekable<IntoIter<Token<'a>>>,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens: tokens.into_iter().peekable() } }

	/// Parse statements until `Eof`.
	///
	/// A syntax error is reported to `reporter`, then the parser skips ahead to
	/// the next statement boundary and carries on, so every malformed statement
	/// gets its own report. Only internal failures end parsing early.
	pub fn parse(&mut self, reporter: &mut Reporter) -> Result<Vec<Statement<'a>>, LoxError> {
		let mut statements = Vec::new();
		let mut recovered = 0;
		while !self.is_at_end()? {
			match self.statement() {
				Ok(statement) => statements.push(statement),
				Err(ParserError::ParseError(error)) => {
					reporter.parse_error(&error);
					recovered += 1;
					self.synchronize()?;
				}
				Err(ParserError::InternalError(e)) => return Err(e.into()),
			}
		}
		debug!(statements = statements.len(), recovered, "parsed program");
		Ok(statements)
	}

	/// Parse a statement.
	fn statement(&mut self) -> Result<Statement<'a>, ParserError> {
		if self.check(&Print)? {
			self.advance()?;
			return self.print_statement();
		}
		self.expression_statement()
	}

	fn print_statement(&mut self) -> Result<Statement<'a>, ParserError> {
		let value = self.expression()?;
		self.consume(&Semicolon, ParseErrorType::MissingSemicolonAfterValue)?;
		Ok(Statement::Print(*value))
	}

	fn expression_statement(&mut self) -> Result<Statement<'a>, ParserError> {
		let expression = self.expression()?;
		self.consume(&Semicolon, ParseErrorType::MissingSemicolonAfterExpression)?;
		Ok(Statement::Expression(*expression))
	}

	/// Parse an expression.
	fn expression(&mut self) -> Result<Box<Expression<'a>>, ParserError> { self.equality() }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek()?.r#type, BangEqual | EqualEqual) {
			expression = Expression::binary(expression, self.advance()?, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.peek()?.r#type, Greater | GreaterEqual | Less | LessEqual) {
			expression = Expression::binary(expression, self.advance()?, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.factor()?;
		while matches!(self.peek()?.r#type, Minus | Plus) {
			expression = Expression::binary(expression, self.advance()?, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.unary()?;
		while matches!(self.peek()?.r#type, Slash | Star) {
			expression = Expression::binary(expression, self.advance()?, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		if matches!(self.peek()?.r#type, Bang | Minus) {
			return Ok(Expression::unary(self.advance()?, self.unary()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let r#type = self.peek()?.r#type.clone();
		match r#type {
			False | True | Nil | Number(_) | String(_) => {
				let token = self.advance()?;
				Ok(Expression::literal(LiteralValue::try_from(token)?))
			}
			LeftParen => {
				self.advance()?; // consume '('
				let expr = self.expression()?;
				self.consume(&RightParen, ParseErrorType::UnterminatedParenthesis)?;
				Ok(Expression::grouping(expr))
			}
			_ => Err(ParseError::at(self.peek()?, ParseErrorType::ExpectedExpression).into()),
		}
	}

	/// Take the next token if it has the expected type, otherwise fail at it.
	fn consume(&mut self, r#type: &TokenType<'a>, error: ParseErrorType) -> Result<Token<'a>, ParserError> {
		if self.check(r#type)? {
			return self.advance();
		}
		Err(ParseError::at(self.peek()?, error).into())
	}

	fn check(&mut self, r#type: &TokenType<'a>) -> Result<bool, ParserError> { Ok(&self.peek()?.r#type == r#type) }

	/// Advance to the next token. Callers never advance past `Eof`.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		Ok(self.tokens.next().context("Unexpected end of token stream")?)
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		Ok(self.tokens.peek().context("Unexpected end of token stream")?)
	}

	fn is_at_end(&mut self) -> Result<bool, ParserError> { Ok(self.peek()?.is_eof()) }

	/// Discard tokens until just past a `;` or right before a keyword that
	/// starts a statement.
	fn synchronize(&mut self) -> Result<(), ParserError> {
		while !self.is_at_end()? {
			let skipped = self.advance()?;
			trace!(lexeme = skipped.lexeme, line = skipped.line, "synchronize skipped token");
			if skipped.r#type == Semicolon || self.peek()?.r#type.begins_statement() {
				return Ok(());
			}
		}
		Ok(())
	}
}
