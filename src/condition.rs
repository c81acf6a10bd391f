use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::field::{resolve_field, Field};
use crate::filter::FilterError;
use crate::types::PlayerStats;

const FIELD_TOKEN: &str = r"[\w+\-/%]+";
const OPERATOR: &str = r">=|<=|==|!=|>|<";

static STRICT_CLAUSE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!(r"^({})\s*({})\s*(\d+)$", FIELD_TOKEN, OPERATOR)).unwrap()
});

static SIGNED_CLAUSE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!(r"^({})\s*({})\s*(-?\d+(?:\.\d+)?)$", FIELD_TOKEN, OPERATOR)).unwrap()
});

/// Which thresholds a clause may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdSyntax {
	/// Non-negative integers only.
	#[default]
	Strict,
	/// Optional minus sign and fractional part.
	Signed,
}

impl ThresholdSyntax {
	fn pattern(self) -> &'static Regex {
		match self {
			ThresholdSyntax::Strict => &STRICT_CLAUSE,
			ThresholdSyntax::Signed => &SIGNED_CLAUSE,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
	Gt,
	Ge,
	Lt,
	Le,
	Eq,
	Ne,
}

impl CompareOp {
	pub fn as_str(self) -> &'static str {
		match self {
			CompareOp::Gt => ">",
			CompareOp::Ge => ">=",
			CompareOp::Lt => "<",
			CompareOp::Le => "<=",
			CompareOp::Eq => "==",
			CompareOp::Ne => "!=",
		}
	}

	pub fn apply(self, lhs: f64, rhs: f64) -> bool {
		match self {
			CompareOp::Gt => lhs > rhs,
			CompareOp::Ge => lhs >= rhs,
			CompareOp::Lt => lhs < rhs,
			CompareOp::Le => lhs <= rhs,
			CompareOp::Eq => lhs == rhs,
			CompareOp::Ne => lhs != rhs,
		}
	}
}

impl FromStr for CompareOp {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			">" => Ok(CompareOp::Gt),
			">=" => Ok(CompareOp::Ge),
			"<" => Ok(CompareOp::Lt),
			"<=" => Ok(CompareOp::Le),
			"==" => Ok(CompareOp::Eq),
			"!=" => Ok(CompareOp::Ne),
			_ => Err(()),
		}
	}
}

impl fmt::Display for CompareOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A clause as typed, before its field token is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
	pub field: String,
	pub op: CompareOp,
	pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
	pub field: Field,
	pub op: CompareOp,
	pub value: f64,
}

impl Condition {
	pub fn new(field: Field, op: CompareOp, value: f64) -> Self {
		Self { field, op, value }
	}

	pub fn matches(&self, player: &PlayerStats) -> bool {
		self.field
			.value(player)
			.as_number()
			.is_some_and(|v| self.op.apply(v, self.value))
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.field.label(), self.op, self.value)
	}
}

pub fn parse_clause(text: &str, syntax: ThresholdSyntax) -> Result<Clause, FilterError> {
	let text = text.trim();
	let caps = syntax
		.pattern()
		.captures(text)
		.ok_or_else(|| FilterError::InvalidCondition(text.to_string()))?;

	let op = caps[2]
		.parse::<CompareOp>()
		.map_err(|_| FilterError::InvalidCondition(text.to_string()))?;
	let value = caps[3]
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite())
		.ok_or_else(|| FilterError::InvalidValue(text.to_string()))?;

	Ok(Clause {
		field: caps[1].to_string(),
		op,
		value,
	})
}

impl Clause {
	pub fn resolve(self) -> Result<Condition, FilterError> {
		let field = resolve_field(&self.field).ok_or(FilterError::UnknownField(self.field))?;
		if !field.is_numeric() {
			return Err(FilterError::NotNumeric(field.label().to_string()));
		}
		Ok(Condition::new(field, self.op, self.value))
	}
}

/// Splits comma-separated clauses and resolves each. The first bad clause
/// or unknown field fails the whole input.
pub fn parse_conditions(input: &str, syntax: ThresholdSyntax) -> Result<Vec<Condition>, FilterError> {
	let conditions = input
		.split(',')
		.map(str::trim)
		.filter(|c| !c.is_empty())
		.map(|c| parse_clause(c, syntax)?.resolve())
		.collect::<Result<Vec<_>, _>>()?;

	if conditions.is_empty() {
		return Err(FilterError::NoConditions);
	}
	Ok(conditions)
}
