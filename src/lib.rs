//! # How bare text becomes a running program
//!
//! User's source code: `print (1 + 2) * 3;`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `;`, numbers `123`,
//! string literals `"hi!"`, keywords `print` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["print", "(", "1", "+", "2", ")", "*", "3", ";"]`.

//! ## Parsing
//!
//! Where our syntax gets `syntactic`. A `parser` builds a tree structure of
//! tokens, the `abstract syntax tree` or `AST`. The `parser` also reports
//! `syntax errors`, and keeps going so one mistake doesn't hide the next.
//!
//! ``` markdown
//! print (Statement::Print)
//! └── * (Expression::Binary)
//!     ├── group (Expression::Grouping)
//!     │   └── + (Expression::Binary)
//!     │       ├── 1 (Expression::Literal)
//!     │       └── 2 (Expression::Literal)
//!     └── 3 (Expression::Literal)
//! ```

//! ## Tree-walk interpreter
//!
//! Execute code right after parsing it to AST. Every value carries its type at
//! runtime, so `"a" + 1` parses fine and fails only when it is evaluated.
//!
//! The same AST can be walked by other visitors, [`AstPrinter`] renders it as
//! `(print (* (group (+ 1 2)) 3))`.

pub mod cli;
mod error;
mod interpreter;
mod loxer;
mod parser;
mod printer;
mod scanner;
mod statement;

pub use error::{
	LoxError,
	interpreter::InterpreterError,
	parser::{ParseError, ParseErrorType},
	report::{Diagnostic, ErrorKind, Location, Reporter},
	scanner::{ScanError, ScanErrorType},
};
pub use interpreter::{Interpreter, value::Value};
pub use loxer::{Loxer, RunMode};
pub use parser::{Expression, ExpressionVisitor, LiteralValue, Parser};
pub use printer::AstPrinter;
pub use scanner::{Scanner, Token, TokenType};
pub use statement::{Statement, StatementVisitor};
