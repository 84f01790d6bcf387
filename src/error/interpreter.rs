#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Errors that can occur during interpretation, each names the operator and
/// the line it was applied on.
pub enum InterpreterError {
	/// Unary `-` applied to a non-number
	#[error("Operand of '{operator}' must be a number.\n[line {line}]")]
	OperandMustBeNumber { operator: String, line: usize },
	/// Arithmetic or comparison on non-numbers
	#[error("Operands of '{operator}' must be numbers.\n[line {line}]")]
	OperandsMustBeNumbers { operator: String, line: usize },
	/// `+` on anything but two numbers or two strings
	#[error("Operands of '{operator}' must be two numbers or two strings.\n[line {line}]")]
	OperandsMustBeNumbersOrStrings { operator: String, line: usize },
	/// An operator token the evaluator has no rule for
	#[error("Unknown operator '{operator}'.\n[line {line}]")]
	UnknownOperator { operator: String, line: usize },
}

impl InterpreterError {
	pub fn line(&self) -> usize {
		use InterpreterError::*;
		match self {
			OperandMustBeNumber { line, .. }
			| OperandsMustBeNumbers { line, .. }
			| OperandsMustBeNumbersOrStrings { line, .. }
			| UnknownOperator { line, .. } => *line,
		}
	}
}
