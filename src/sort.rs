use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::field::{resolve_field, Field};
use crate::types::{FieldValue, PlayerStats};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
	#[error("Invalid field: {0}")]
	UnknownField(String),
	#[error("No sort direction entered")]
	MissingDirection,
	#[error("Invalid sort direction: {0} (expected asc or desc)")]
	InvalidDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl FromStr for SortDirection {
	type Err = SortError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(SortError::MissingDirection);
		}
		if s.eq_ignore_ascii_case("asc") {
			Ok(SortDirection::Asc)
		} else if s.eq_ignore_ascii_case("desc") {
			Ok(SortDirection::Desc)
		} else {
			Err(SortError::InvalidDirection(s.to_string()))
		}
	}
}

fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
	match (a, b) {
		(FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
		(FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
		(FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
		(FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
	}
}

/// Stable: equal keys keep their input order in either direction.
pub fn sort_players<'a, I>(players: I, field: Field, direction: SortDirection) -> Vec<&'a PlayerStats>
where
	I: IntoIterator<Item = &'a PlayerStats>,
{
	let mut sorted: Vec<&PlayerStats> = players.into_iter().collect();
	sorted.sort_by(|a, b| {
		let ord = compare_values(field.value(a), field.value(b));
		match direction {
			SortDirection::Asc => ord,
			SortDirection::Desc => ord.reverse(),
		}
	});
	sorted
}

pub fn sort_by_tokens<'a, I>(
	players: I,
	field: &str,
	direction: &str,
) -> Result<Vec<&'a PlayerStats>, SortError>
where
	I: IntoIterator<Item = &'a PlayerStats>,
{
	let field = resolve_field(field.trim()).ok_or_else(|| SortError::UnknownField(field.trim().to_string()))?;
	let direction = direction.parse::<SortDirection>()?;
	Ok(sort_players(players, field, direction))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn player(name: &str, g: i32) -> PlayerStats {
		let mut p = PlayerStats::new(name, "EDM", "C");
		p.g = g;
		p.gp = 1;
		p
	}

	fn goals(players: &[&PlayerStats]) -> Vec<i32> {
		players.iter().map(|p| p.g).collect()
	}

	#[test]
	fn test_parse_direction() {
		assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
		assert_eq!("  DESC ".parse::<SortDirection>(), Ok(SortDirection::Desc));
		assert_eq!("Asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
		assert_eq!("".parse::<SortDirection>(), Err(SortError::MissingDirection));
		assert_eq!("   ".parse::<SortDirection>(), Err(SortError::MissingDirection));
		assert_eq!(
			"down".parse::<SortDirection>(),
			Err(SortError::InvalidDirection("down".into()))
		);
	}

	#[test]
	fn test_sort_numeric() {
		let players = vec![player("A", 10), player("B", 30), player("C", 20)];

		let desc = sort_players(&players, Field::G, SortDirection::Desc);
		assert_eq!(goals(&desc), vec![30, 20, 10]);

		let asc = sort_players(&players, Field::G, SortDirection::Asc);
		assert_eq!(goals(&asc), vec![10, 20, 30]);

		// Base set untouched
		assert_eq!(players.iter().map(|p| p.g).collect::<Vec<_>>(), vec![10, 30, 20]);
	}

	#[test]
	fn test_sort_text() {
		let players = vec![player("Matthews", 1), player("Draisaitl", 2), player("McDavid", 3)];
		let sorted = sort_players(&players, Field::Player, SortDirection::Asc);
		let names: Vec<&str> = sorted.iter().map(|p| p.player.as_str()).collect();
		assert_eq!(names, vec!["Draisaitl", "Matthews", "McDavid"]);
	}

	#[test]
	fn test_sort_is_stable_and_idempotent() {
		let players = vec![player("A", 5), player("B", 9), player("C", 5), player("D", 9)];

		let once = sort_players(&players, Field::G, SortDirection::Desc);
		let names: Vec<&str> = once.iter().map(|p| p.player.as_str()).collect();
		assert_eq!(names, vec!["B", "D", "A", "C"]);

		let twice = sort_players(once.clone(), Field::G, SortDirection::Desc);
		assert_eq!(once, twice);
	}

	#[test]
	fn test_sort_by_tokens() {
		let players = vec![player("A", 10), player("B", 30), player("C", 20)];

		let sorted = sort_by_tokens(&players, "g", "desc").unwrap();
		assert_eq!(goals(&sorted), vec![30, 20, 10]);

		assert_eq!(
			sort_by_tokens(&players, "Goals", "asc"),
			Err(SortError::UnknownField("Goals".into()))
		);
		assert_eq!(sort_by_tokens(&players, "G", ""), Err(SortError::MissingDirection));
	}

	#[test]
	fn test_sort_by_alias() {
		let mut a = player("A", 1);
		a.s_percentage = 12.5;
		let mut b = player("B", 1);
		b.s_percentage = 8.25;
		let players = vec![a, b];

		let sorted = sort_by_tokens(&players, "S%", "asc").unwrap();
		assert_eq!(sorted[0].player, "B");
	}
}
