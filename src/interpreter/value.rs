use std::fmt::Display;

use Value::*;

use crate::scanner::TokenType;

/// Value represents a runtime value in Lox.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Nil,
	Bool(bool),
	Num(f64),
	Str(String),
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			// `f64` already drops the `.0` of integral values.
			Num(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl Value {
	/// Performs a binary operation between two values, `None` when the operands
	/// have the wrong types for `op`.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> Option<Value> {
		use TokenType::*;

		let value = match op {
			Plus => self.plus(right)?,
			Minus => Num(self.numbers(right).map(|(l, r)| l - r)?),
			Star => Num(self.numbers(right).map(|(l, r)| l * r)?),
			Slash => Num(self.numbers(right).map(|(l, r)| l / r)?),
			Greater => Bool(self.numbers(right).map(|(l, r)| l > r)?),
			GreaterEqual => Bool(self.numbers(right).map(|(l, r)| l >= r)?),
			Less => Bool(self.numbers(right).map(|(l, r)| l < r)?),
			LessEqual => Bool(self.numbers(right).map(|(l, r)| l <= r)?),
			EqualEqual => Bool(self.equal(right)),
			BangEqual => Bool(!self.equal(right)),
			_ => return None,
		};
		Some(value)
	}

	/// Only `nil` and `false` are falsy, `0` and `""` are truthy.
	pub fn to_bool(&self) -> bool {
		match self {
			Nil => false,
			Bool(b) => *b,
			Num(_) | Str(_) => true,
		}
	}

	/// Adds two numbers or concatenates two strings.
	pub fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l + r)),
			(Str(l), Str(r)) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	/// Equality is defined for every pair of values, different kinds are never
	/// equal.
	pub fn equal(&self, other: &Self) -> bool {
		match (self, other) {
			(Nil, Nil) => true,
			(Bool(l), Bool(r)) => l == r,
			(Num(l), Num(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			_ => false,
		}
	}

	fn numbers(&self, other: &Self) -> Option<(f64, f64)> {
		match (self, other) {
			(Num(l), Num(r)) => Some((*l, *r)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(true).to_string(), "true");
		assert_eq!(Num(3.0).to_string(), "3");
		assert_eq!(Num(-0.5).to_string(), "-0.5");
		assert_eq!(Num(1e21).to_string(), "1000000000000000000000");
		assert_eq!(Str("a \"b\"".to_string()).to_string(), "a \"b\"");
	}

	#[test]
	fn truthiness() {
		assert!(!Nil.to_bool());
		assert!(!Bool(false).to_bool());
		assert!(Bool(true).to_bool());
		assert!(Num(0.0).to_bool());
		assert!(Str(String::new()).to_bool());
	}

	#[test]
	fn equality() {
		assert!(Nil.equal(&Nil));
		assert!(!Nil.equal(&Bool(false)));
		assert!(!Num(1.0).equal(&Str("1".to_string())));
		assert!(Str("a".to_string()).equal(&Str("a".to_string())));
		assert!(!Num(f64::NAN).equal(&Num(f64::NAN)));
	}

	#[test]
	fn operand_types() {
		use TokenType::*;

		assert_eq!(Num(1.0).binary_op(&Plus, &Num(2.0)), Some(Num(3.0)));
		assert_eq!(Str("a".into()).binary_op(&Plus, &Str("b".into())), Some(Str("ab".into())));
		assert_eq!(Str("a".into()).binary_op(&Plus, &Num(1.0)), None);
		assert_eq!(Num(1.0).binary_op(&Slash, &Num(0.0)), Some(Num(f64::INFINITY)));
		assert_eq!(Str("a".into()).binary_op(&Less, &Str("b".into())), None);
		assert_eq!(Value::Nil.binary_op(&BangEqual, &Num(0.0)), Some(Bool(true)));
		assert_eq!(Num(1.0).binary_op(&Comma, &Num(1.0)), None);
	}
}
