pub mod interpreter;
pub mod parser;
pub mod report;
pub mod scanner;

/// LoxError is the top-level error type for the Lox interpreter.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal interpreter error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Scanner errors encountered during scanning
	#[error("Generated {0} scanner errors")]
	ScannerErrors(usize),
	/// Parser errors encountered during parsing
	#[error("Generated {0} parser errors")]
	ParserErrors(usize),
	/// Runtime errors encountered during interpretation
	#[error("Runtime error:\n{0}")]
	RuntimeError(#[from] interpreter::InterpreterError),
}

impl From<parser::ParserError> for LoxError {
	fn from(error: parser::ParserError) -> Self {
		match error {
			parser::ParserError::InternalError(e) => LoxError::InternalError(e),
			parser::ParserError::ParseError(_) => LoxError::ParserErrors(1),
		}
	}
}

impl LoxError {
	/// Process exit status for one-shot runs, following `sysexits.h`.
	pub fn exit_code(&self) -> u8 {
		match self {
			LoxError::ScannerErrors(_) | LoxError::ParserErrors(_) => 65,
			LoxError::RuntimeError(_) => 70,
			LoxError::InternalError(_) => 74,
		}
	}
}
