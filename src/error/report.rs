//! The error surface shared by every phase.
//!
//! Scanner and parser keep going after a fault, so they record what they
//! found here instead of bailing out. The driver checks [`Reporter::had_error`]
//! before it lets the interpreter anywhere near the program.

use std::fmt::Display;

use tracing::debug;

use crate::{
	error::{interpreter::InterpreterError, parser::ParseError, scanner::ScanError},
	scanner::{Token, TokenType},
};

/// Which phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Lexical,
	Syntax,
}

/// Where on its line a diagnostic points.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
	/// No particular token, used by the scanner.
	Unknown,
	/// The end of input.
	AtEnd,
	/// A token, by its lexeme.
	At(String),
}

impl Location {
	pub fn of(token: &Token<'_>) -> Self {
		match token.r#type {
			TokenType::Eof => Location::AtEnd,
			_ => Location::At(token.lexeme.to_string()),
		}
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Location::Unknown => Ok(()),
			Location::AtEnd => write!(f, " at end"),
			Location::At(lexeme) => write!(f, " at '{lexeme}'"),
		}
	}
}

/// A lexical or syntax error, rendered as `[line L] Error<location>: <message>`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
	pub kind:     ErrorKind,
	pub line:     usize,
	pub location: Location,
	pub message:  String,
}

/// Collects diagnostics from scanning and parsing, and the runtime error that
/// stopped evaluation, if any.
#[derive(Debug, Default)]
pub struct Reporter {
	diagnostics:   Vec<Diagnostic>,
	runtime_error: Option<InterpreterError>,
}

impl Reporter {
	pub fn new() -> Self { Self::default() }

	pub fn scan_error(&mut self, error: &ScanError) {
		debug!(line = error.line, "scan error: {}", error.r#type);
		self.diagnostics.push(Diagnostic {
			kind:     ErrorKind::Lexical,
			line:     error.line,
			location: Location::Unknown,
			message:  error.r#type.to_string(),
		});
	}

	pub fn parse_error(&mut self, error: &ParseError) {
		debug!(line = error.line, "parse error: {}", error.r#type);
		self.diagnostics.push(Diagnostic {
			kind:     ErrorKind::Syntax,
			line:     error.line,
			location: error.location.clone(),
			message:  error.r#type.to_string(),
		});
	}

	pub fn runtime_error(&mut self, error: InterpreterError) {
		debug!(line = error.line(), "runtime error");
		self.runtime_error = Some(error);
	}

	/// Whether any lexical or syntax error was reported since the last reset.
	pub fn had_error(&self) -> bool { !self.diagnostics.is_empty() }

	pub fn had_runtime_error(&self) -> bool { self.runtime_error.is_some() }

	pub fn count(&self, kind: ErrorKind) -> usize { self.diagnostics.iter().filter(|d| d.kind == kind).count() }

	pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

	pub fn runtime(&self) -> Option<&InterpreterError> { self.runtime_error.as_ref() }

	/// Forget lexical and syntax errors between independent REPL submissions.
	/// The runtime error is kept.
	pub fn reset(&mut self) { self.diagnostics.clear(); }
}
