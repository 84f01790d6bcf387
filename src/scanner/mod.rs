//! Represents a lexical token in the Lox language.
//!
//! Keywords are part of the shape of the language’s grammar, so the parser
//! often has code like, “If the next token is `print` then do . . . ” That
//! means the parser wants to know not just that it has a lexeme for some
//! identifier, but that it has a reserved word, and which keyword it is.
//!
//! There are lexemes for literal values, numbers and strings. Since the scanner
//! has to walk each character in the literal to correctly identify it, it also
//! converts that textual representation to the value the interpreter uses later.
//!
//! We can’t easily detect a `reserved word` until we’ve reached the end of what
//! might instead be an identifier, this is `maximal munch`. The same rule makes
//! `!=` a single token rather than `!` followed by `=`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;
use tracing::debug;

use crate::{
	LoxError,
	error::{
		report::Reporter,
		scanner::{ScanError, ScanErrorType, ScannerError},
	},
};

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `current` is on so we can produce tokens that know
	/// their location.
	line:        usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Scan all tokens from the source code.
	///
	/// Lexical errors are recorded in `reporter` and scanning carries on past
	/// them. The returned tokens always end with a single `Eof` token on the last
	/// line of the source.
	pub fn scan_tokens(&mut self, reporter: &mut Reporter) -> Result<Vec<Token<'a>>, LoxError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token(&mut tokens) {
				Err(ScannerError::ScanError(e)) => reporter.scan_error(&e),
				Err(ScannerError::InternalError(e)) => {
					return Err(e.into());
				}
				Ok(_) => {}
			}
		}
		tokens.push(Token::new(Eof, "", self.line));
		debug!(tokens = tokens.len(), lines = self.line, "scanned source");
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				Comment
			} else { Slash },
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => { self.line += 1; NewLine }
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.line));
		}

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal, there are no escape sequences.
	fn string(&mut self) -> Result<TokenType<'a>, ScannerError> {
		let start_line = self.line;
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(start_line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(String(value))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// A fractional part needs digits on both sides of the dot.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(Number(s.parse().with_context(|| format!("Failed to parse number literal {s}"))?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::report::Diagnostic;

	fn scan(input: &str, ok: bool) {
		let mut reporter = Reporter::new();
		let result = Scanner::new(input).scan_tokens(&mut reporter);
		assert!(result.is_ok());
		assert_eq!(!reporter.had_error(), ok, "input: {input:?}");
	}

	fn types(input: &str) -> Vec<TokenType<'_>> {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new(input).scan_tokens(&mut reporter).unwrap();
		assert!(!reporter.had_error(), "input: {input:?}");
		tokens.into_iter().map(|t| t.r#type).collect()
	}

	fn errors(input: &str) -> Vec<Diagnostic> {
		let mut reporter = Reporter::new();
		Scanner::new(input).scan_tokens(&mut reporter).unwrap();
		reporter.diagnostics().to_vec()
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("(){}", true);
		scan(" ( ) ", true);
		scan("@", false);
		scan("你好", false);
		scan(r#""世界""#, true);
		scan("12345", true);
		scan(
			r#"
            Multi
            Line
                String
            "#,
			true,
		);
		scan(r#"// Comment"#, true);
		scan("user", true);
		scan("return", true);
	}

	#[test]
	fn scan_operators() {
		assert_eq!(types("!"), vec![Bang, Eof]);
		assert_eq!(types("!="), vec![BangEqual, Eof]);
		assert_eq!(types("= =="), vec![Equal, EqualEqual, Eof]);
		assert_eq!(types("< <="), vec![Less, LessEqual, Eof]);
		assert_eq!(types("> >="), vec![Greater, GreaterEqual, Eof]);
		assert_eq!(types("-+*/;,."), vec![Minus, Plus, Star, Slash, Semicolon, Comma, Dot, Eof]);
		assert_eq!(types("!!="), vec![Bang, BangEqual, Eof]);
	}

	#[test]
	fn maximal_munch_lexeme() {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new("1 != 2").scan_tokens(&mut reporter).unwrap();
		assert_eq!(tokens.len(), 4);
		assert_eq!(tokens[1].lexeme, "!=");
	}

	#[test]
	fn scan_numbers() {
		assert_eq!(types("0"), vec![Number(0.0), Eof]);
		assert_eq!(types("2.75"), vec![Number(2.75), Eof]);
		assert_eq!(types("123.456"), vec![Number(123.456), Eof]);
		// No trailing or leading dot.
		assert_eq!(types("1."), vec![Number(1.0), Dot, Eof]);
		assert_eq!(types(".5"), vec![Dot, Number(5.0), Eof]);
		assert_eq!(types("1.2.3"), vec![Number(1.2), Dot, Number(3.0), Eof]);
	}

	#[test]
	fn scan_strings() {
		assert_eq!(types(r#""""#), vec![String(""), Eof]);
		assert_eq!(types(r#""hello world""#), vec![String("hello world"), Eof]);
		assert_eq!(types(r#""a\nb""#), vec![String(r"a\nb"), Eof]);
		scan(r#""escaped\n\"quote\"""#, false);
	}

	#[test]
	fn unterminated_string_reports_start_line() {
		let errors = errors("1;\n\"never\nclosed");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].to_string(), "[line 2] Error: Unterminated string.");
	}

	#[test]
	fn scanning_continues_after_errors() {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new("1 @ 2\n# 3").scan_tokens(&mut reporter).unwrap();
		let lines: Vec<usize> = reporter.diagnostics().iter().map(|d| d.line).collect();
		assert_eq!(lines, vec![1, 2]);
		let types: Vec<_> = tokens.into_iter().map(|t| t.r#type).collect();
		assert_eq!(types, vec![Number(1.0), Number(2.0), Number(3.0), Eof]);
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(types("print nil true false"), vec![Print, Nil, True, False, Eof]);
		assert_eq!(types("and class else for fun if or"), vec![And, Class, Else, For, Fun, If, Or, Eof]);
		assert_eq!(types("return super this var while"), vec![Return, Super, This, Var, While, Eof]);
	}

	#[test]
	fn scan_identifiers() {
		assert_eq!(types("x"), vec![Identifier("x"), Eof]);
		assert_eq!(types("_name"), vec![Identifier("_name"), Eof]);
		assert_eq!(types("myVariable123"), vec![Identifier("myVariable123"), Eof]);
		assert_eq!(types("printer"), vec![Identifier("printer"), Eof]);
		assert_eq!(types("and123"), vec![Identifier("and123"), Eof]);
	}

	#[test]
	fn scan_comments() {
		assert_eq!(types("// single line comment"), vec![Eof]);
		assert_eq!(types("// comment with ()[]{} @#"), vec![Eof]);
		assert_eq!(types("1 // one\n2"), vec![Number(1.0), Number(2.0), Eof]);
		assert_eq!(types("4 / 2"), vec![Number(4.0), Slash, Number(2.0), Eof]);
	}

	#[test]
	fn scan_whitespace() {
		assert_eq!(types(" "), vec![Eof]);
		assert_eq!(types("  \t\r\n  "), vec![Eof]);
	}

	#[test]
	fn eof_on_last_line() {
		for (input, line) in [("", 1), ("1", 1), ("1\n", 2), ("\n\n3;", 3), ("\"a\nb\"", 2), ("// c\n// d", 2)] {
			let mut reporter = Reporter::new();
			let tokens = Scanner::new(input).scan_tokens(&mut reporter).unwrap();
			assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
			let eof = tokens.last().unwrap();
			assert!(eof.is_eof());
			assert_eq!(eof.line, line, "input: {input:?}");
		}
	}

	#[test]
	fn token_lines() {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new("1\n2\n\n3").scan_tokens(&mut reporter).unwrap();
		let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
		assert_eq!(lines, vec![1, 2, 4, 4]);
	}

	#[test]
	fn scan_multiple_tokens() {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new("1 + 2").scan_tokens(&mut reporter).unwrap();
		assert_eq!(tokens.len(), 4);
		assert_eq!(tokens[0].r#type, Number(1.0));
		assert_eq!(tokens[1].r#type, Plus);
		assert_eq!(tokens[2].r#type, Number(2.0));
		assert_eq!(tokens[3].r#type, Eof);
	}

	#[test]
	fn scan_string_with_newlines() {
		let tokens = types(
			r#""hello
world""#,
		);
		assert_eq!(tokens[0], String("hello\nworld"));
	}

	#[test]
	fn scan_number_precision() {
		assert_eq!(types("3.14159265358979323846264338327950288")[0], Number(PI));
	}
}
