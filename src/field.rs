use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{FieldValue, PlayerStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Player,
	Team,
	Pos,
	GP,
	G,
	A,
	P,
	PlusMinus,
	PIM,
	PenaltiesPerGame,
	PPG,
	PPP,
	SHG,
	SHP,
	GWG,
	OTG,
	S,
	Spercentage,
	FOW,
}

/// Column order of the stats export and of the rendered table.
pub const FIELDS: [Field; 19] = [
	Field::Player,
	Field::Team,
	Field::Pos,
	Field::GP,
	Field::G,
	Field::A,
	Field::P,
	Field::PlusMinus,
	Field::PIM,
	Field::PenaltiesPerGame,
	Field::PPG,
	Field::PPP,
	Field::SHG,
	Field::SHP,
	Field::GWG,
	Field::OTG,
	Field::S,
	Field::Spercentage,
	Field::FOW,
];

/// Column labels that are not valid identifiers. Matched exactly.
pub static ALIASES: [(&str, Field); 4] = [
	("+/-", Field::PlusMinus),
	("P/GP", Field::PenaltiesPerGame),
	("S%", Field::Spercentage),
	("FOW%", Field::FOW),
];

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid field: {0}")]
pub struct UnknownField(pub String);

/// Resolves a user-typed token: alias table first, then canonical names
/// ignoring case. No partial matches.
pub fn resolve_field(token: &str) -> Option<Field> {
	if let Some((_, field)) = ALIASES.iter().find(|(alias, _)| *alias == token) {
		return Some(*field);
	}

	FIELDS
		.iter()
		.copied()
		.find(|f| f.name().eq_ignore_ascii_case(token))
}

impl Field {
	pub fn name(self) -> &'static str {
		match self {
			Field::Player => "Player",
			Field::Team => "Team",
			Field::Pos => "Pos",
			Field::GP => "GP",
			Field::G => "G",
			Field::A => "A",
			Field::P => "P",
			Field::PlusMinus => "PlusMinus",
			Field::PIM => "PIM",
			Field::PenaltiesPerGame => "PenaltiesPerGame",
			Field::PPG => "PPG",
			Field::PPP => "PPP",
			Field::SHG => "SHG",
			Field::SHP => "SHP",
			Field::GWG => "GWG",
			Field::OTG => "OTG",
			Field::S => "S",
			Field::Spercentage => "Spercentage",
			Field::FOW => "FOW",
		}
	}

	/// Header shown in the table.
	pub fn label(self) -> &'static str {
		match self {
			Field::Player => "Name",
			Field::PlusMinus => "+/-",
			Field::PenaltiesPerGame => "P/GP",
			Field::Spercentage => "S%",
			Field::FOW => "FOW%",
			other => other.name(),
		}
	}

	pub fn width(self) -> usize {
		match self {
			Field::Player => 25,
			Field::Team => 10,
			Field::Pos | Field::GP | Field::G | Field::A | Field::P | Field::PlusMinus | Field::PIM => 3,
			_ => 5,
		}
	}

	pub fn is_numeric(self) -> bool {
		!matches!(self, Field::Player | Field::Team | Field::Pos)
	}

	pub fn is_fractional(self) -> bool {
		matches!(
			self,
			Field::PenaltiesPerGame | Field::PPG | Field::PPP | Field::Spercentage | Field::FOW
		)
	}

	pub fn aliases(self) -> impl Iterator<Item = &'static str> {
		ALIASES
			.iter()
			.filter(move |(_, f)| *f == self)
			.map(|(alias, _)| *alias)
	}

	pub fn value(self, p: &PlayerStats) -> FieldValue<'_> {
		match self {
			Field::Player => FieldValue::Text(&p.player),
			Field::Team => FieldValue::Text(&p.team),
			Field::Pos => FieldValue::Text(&p.pos),
			Field::GP => FieldValue::Number(p.gp.into()),
			Field::G => FieldValue::Number(p.g.into()),
			Field::A => FieldValue::Number(p.a.into()),
			Field::P => FieldValue::Number(p.p.into()),
			Field::PlusMinus => FieldValue::Number(p.plus_minus.into()),
			Field::PIM => FieldValue::Number(p.pim.into()),
			Field::PenaltiesPerGame => FieldValue::Number(p.penalties_per_game),
			Field::PPG => FieldValue::Number(p.ppg),
			Field::PPP => FieldValue::Number(p.ppp),
			Field::SHG => FieldValue::Number(p.shg.into()),
			Field::SHP => FieldValue::Number(p.shp.into()),
			Field::GWG => FieldValue::Number(p.gwg.into()),
			Field::OTG => FieldValue::Number(p.otg.into()),
			Field::S => FieldValue::Number(p.s.into()),
			Field::Spercentage => FieldValue::Number(p.s_percentage),
			Field::FOW => FieldValue::Number(p.fow),
		}
	}

	/// Stores a raw cell from the export. Unparseable numbers become zero.
	pub fn set(self, p: &mut PlayerStats, raw: &str) {
		let raw = raw.trim();
		match self {
			Field::Player => p.player = raw.to_string(),
			Field::Team => p.team = raw.to_string(),
			Field::Pos => p.pos = raw.to_string(),
			Field::GP => p.gp = parse_int(raw),
			Field::G => p.g = parse_int(raw),
			Field::A => p.a = parse_int(raw),
			Field::P => p.p = parse_int(raw),
			Field::PlusMinus => p.plus_minus = parse_int(raw),
			Field::PIM => p.pim = parse_int(raw),
			Field::PenaltiesPerGame => p.penalties_per_game = parse_float(raw),
			Field::PPG => p.ppg = parse_float(raw),
			Field::PPP => p.ppp = parse_float(raw),
			Field::SHG => p.shg = parse_int(raw),
			Field::SHP => p.shp = parse_int(raw),
			Field::GWG => p.gwg = parse_int(raw),
			Field::OTG => p.otg = parse_int(raw),
			Field::S => p.s = parse_int(raw),
			Field::Spercentage => p.s_percentage = parse_float(raw),
			Field::FOW => p.fow = parse_float(raw),
		}
	}
}

fn parse_int(raw: &str) -> i32 {
	raw.parse::<i32>()
		.ok()
		.or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i32))
		.unwrap_or(0)
}

fn parse_float(raw: &str) -> f64 {
	raw.parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0)
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Field {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		resolve_field(s).ok_or_else(|| UnknownField(s.to_string()))
	}
}
