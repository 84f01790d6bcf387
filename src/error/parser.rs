use crate::{error::report::Location, scanner::Token};

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A syntax error, positioned at the token the parser could not accept.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}{location}: {type}")]
pub struct ParseError {
	pub line:     usize,
	pub location: Location,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn at(token: &Token<'_>, r#type: ParseErrorType) -> Self {
		Self { line: token.line, location: Location::of(token), r#type }
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	ExpectedExpression,
	UnterminatedParenthesis,
	MissingSemicolonAfterValue,
	MissingSemicolonAfterExpression,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression.")
			}
			UnterminatedParenthesis => {
				write!(f, "Expect ')' after expression.")
			}
			MissingSemicolonAfterValue => {
				write!(f, "Expect ';' after value.")
			}
			MissingSemicolonAfterExpression => {
				write!(f, "Expect ';' after expression.")
			}
		}
	}
}
