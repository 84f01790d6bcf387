#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use pretty_assertions::assert_eq;
	use treelox::{InterpreterError, LoxError, Loxer, RunMode};

	fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

	fn run_script(mode: RunMode, name: &str) -> (String, Result<(), LoxError>) {
		let mut loxer = Loxer::new(mode, Vec::new());
		let result = loxer.run_file(script(name));
		(String::from_utf8(loxer.into_inner()).unwrap(), result)
	}

	#[test]
	fn test_lox_file() {
		let (output, result) = run_script(RunMode::Eval, "test.lox");
		assert!(result.is_ok());
		assert_eq!(output, "7\n9\n2.5\n2\ntreelox\ntrue\ntrue\nfalse\nfalse\nnil\n0.30000000000000004\n");
	}

	#[test]
	fn test_lox_file_ast() {
		let (output, result) = run_script(RunMode::Ast, "test.lox");
		assert!(result.is_ok());
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.len(), 12);
		assert_eq!(lines[0], "(print (+ 1 (* 2 3)))");
		assert_eq!(lines[3], "(print (- (group (- 3 5))))");
		assert_eq!(lines[5], "(print (== (< 1 2) true))");
		assert_eq!(lines[9], "(print nil)");
		assert_eq!(lines[10], "(+ discarded  value)");
	}

	#[test]
	fn test_syntax_errors() {
		let (output, result) = run_script(RunMode::Both, "syntax_errors.lox");
		assert_eq!(output, "");
		let error = result.unwrap_err();
		assert!(matches!(error, LoxError::ParserErrors(2)));
		assert_eq!(error.exit_code(), 65);
	}

	#[test]
	fn test_runtime_error() {
		let (output, result) = run_script(RunMode::Eval, "runtime_error.lox");
		assert_eq!(output, "start\n");
		let error = result.unwrap_err();
		assert_eq!(error.exit_code(), 70);
		let LoxError::RuntimeError(runtime) = error else { panic!("expected a runtime error") };
		assert_eq!(runtime, InterpreterError::OperandsMustBeNumbersOrStrings { operator: "+".to_string(), line: 2 });
	}

	#[test]
	fn test_diagnostics_are_line_keyed() {
		let mut loxer = Loxer::new(RunMode::Eval, Vec::new());
		assert!(loxer.run_file(script("syntax_errors.lox")).is_err());
		let rendered: Vec<String> = loxer.reporter().diagnostics().iter().map(ToString::to_string).collect();
		assert_eq!(rendered, vec![
			"[line 2] Error at ';': Expect expression.".to_string(),
			"[line 3] Error at ';': Expect ')' after expression.".to_string(),
		]);
	}
}
