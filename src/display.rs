use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::field::{Field, FIELDS};
use crate::types::{FieldValue, PlayerStats};

pub fn format_value(field: Field, player: &PlayerStats, config: &DisplayConfig) -> String {
	match field.value(player) {
		FieldValue::Text(s) => s.to_string(),
		FieldValue::Number(n) if field.is_fractional() => match config.decimals {
			Some(d) => format!("{:.*}", d, n),
			None => n.to_string(),
		},
		FieldValue::Number(n) => format!("{}", n as i64),
	}
}

fn format_line<F>(cell: F) -> String
where
	F: Fn(Field) -> String,
{
	FIELDS
		.iter()
		.map(|&f| format!("{:<width$}", cell(f), width = f.width()))
		.collect::<Vec<_>>()
		.join(" ")
		.trim_end()
		.to_string()
}

pub fn format_header() -> String {
	format_line(|f| f.label().to_string())
}

pub fn format_row(player: &PlayerStats, config: &DisplayConfig) -> String {
	format_line(|f| format_value(f, player, config))
}

/// Header row, then one row per player in the order given.
pub fn write_table<'a, W, I>(out: &mut W, players: I, config: &DisplayConfig) -> io::Result<()>
where
	W: Write,
	I: IntoIterator<Item = &'a PlayerStats>,
{
	writeln!(out)?;
	writeln!(out, "--- Player Stats ---")?;
	writeln!(out, "{}", format_header())?;
	for player in players {
		writeln!(out, "{}", format_row(player, config))?;
	}
	Ok(())
}

pub fn write_json<'a, W, I>(out: &mut W, players: I) -> io::Result<()>
where
	W: Write,
	I: IntoIterator<Item = &'a PlayerStats>,
{
	let players: Vec<&PlayerStats> = players.into_iter().collect();
	serde_json::to_writer_pretty(&mut *out, &players)?;
	writeln!(out)
}

pub fn write_fields<W: Write>(out: &mut W) -> io::Result<()> {
	writeln!(out, "{:<18} {:<6} {:<8} {}", "FIELD", "LABEL", "KIND", "ALIASES")?;
	for field in FIELDS {
		let kind = if !field.is_numeric() {
			"text"
		} else if field.is_fractional() {
			"decimal"
		} else {
			"integer"
		};
		let aliases = field.aliases().collect::<Vec<_>>().join(", ");
		writeln!(out, "{:<18} {:<6} {:<8} {}", field.name(), field.label(), kind, aliases)?;
	}
	Ok(())
}
