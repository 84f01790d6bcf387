use std::{
	fs::read_to_string,
	io::{BufRead, Stdout, Write},
	path::Path,
};

use anyhow::Context;
use tracing::debug;

use crate::{
	LoxError,
	error::report::{ErrorKind, Reporter},
	interpreter::Interpreter,
	parser::Parser,
	printer::AstPrinter,
	scanner::Scanner,
};

/// What to do with a program that scanned and parsed cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
	/// Evaluate it.
	#[default]
	Eval,
	/// Print its syntax tree only.
	Ast,
	/// Print its syntax tree, then evaluate it.
	Both,
}

impl RunMode {
	pub fn from_flags(ast: bool, no_eval: bool) -> Self {
		match (ast, no_eval) {
			(_, true) => RunMode::Ast,
			(true, false) => RunMode::Both,
			(false, false) => RunMode::Eval,
		}
	}

	fn prints_ast(self) -> bool { matches!(self, RunMode::Ast | RunMode::Both) }

	fn evaluates(self) -> bool { matches!(self, RunMode::Eval | RunMode::Both) }
}

/// Loxer drives source text through scanner, parser, printer and interpreter.
///
/// Program and syntax tree output go to `out`, diagnostics go to stderr.
pub struct Loxer<W> {
	mode:     RunMode,
	out:      W,
	reporter: Reporter,
}

impl Loxer<Stdout> {
	pub fn stdout(mode: RunMode) -> Self { Self::new(mode, std::io::stdout()) }
}

impl<W: Write> Loxer<W> {
	pub fn new(mode: RunMode, out: W) -> Self { Self { mode, out, reporter: Reporter::new() } }

	/// Run a whole script file.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoxError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.run(&source)
	}

	/// Run the REPL prompt, one line per submission, until `input` is exhausted.
	///
	/// Errors never end the session. Lexical and syntax errors are forgotten
	/// after each line.
	pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<(), LoxError> {
		let mut line = String::new();
		loop {
			line.clear();
			write!(self.out, "> ").and_then(|_| self.out.flush()).context("Failed write prompt")?;
			if input.read_line(&mut line).context("Failed read line")? == 0 {
				writeln!(self.out, "\nExited treelox repl").context("Failed write prompt")?;
				break;
			}
			if let Err(e) = self.run(line.trim_end()) {
				debug!("submission failed: {e}");
				if let LoxError::InternalError(e) = e {
					eprintln!("Failed run prompt: {e:#}");
				}
			}
			self.reporter.reset();
		}
		Ok(())
	}

	/// Run the Loxer on the given source code.
	///
	/// Nothing is evaluated if scanning or parsing reported an error.
	#[tracing::instrument(level = "debug", skip_all, fields(mode = ?self.mode))]
	pub fn run(&mut self, source: &str) -> Result<(), LoxError> {
		let reported = self.reporter.diagnostics().len();
		let tokens = Scanner::new(source).scan_tokens(&mut self.reporter)?;
		let statements = Parser::new(tokens).parse(&mut self.reporter)?;

		for diagnostic in &self.reporter.diagnostics()[reported..] {
			eprintln!("{diagnostic}");
		}
		if self.reporter.had_error() {
			let lexical = self.reporter.count(ErrorKind::Lexical);
			if lexical > 0 {
				return Err(LoxError::ScannerErrors(lexical));
			}
			return Err(LoxError::ParserErrors(self.reporter.count(ErrorKind::Syntax)));
		}

		if self.mode.prints_ast() {
			writeln!(self.out, "{}", AstPrinter.print(&statements)).context("Failed write syntax tree")?;
		}
		if self.mode.evaluates() {
			if let Err(error) = Interpreter::new(&mut self.out).interpret(&statements) {
				if let LoxError::RuntimeError(runtime) = &error {
					eprintln!("{runtime}");
					self.reporter.runtime_error(runtime.clone());
				}
				return Err(error);
			}
		}
		Ok(())
	}

	pub fn reporter(&self) -> &Reporter { &self.reporter }

	pub fn into_inner(self) -> W { self.out }
}
