use thiserror::Error;

use crate::condition::{parse_conditions, Condition, ThresholdSyntax};
use crate::types::PlayerStats;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
	#[error("No conditions entered")]
	NoConditions,
	#[error("Invalid condition: {0}")]
	InvalidCondition(String),
	#[error("Invalid value in condition: {0}")]
	InvalidValue(String),
	#[error("Invalid field: {0}")]
	UnknownField(String),
	#[error("Field is not numeric: {0}")]
	NotNumeric(String),
}

/// Keeps the players satisfying every condition, in their original order.
pub fn filter_players<'a, I>(players: I, conditions: &[Condition]) -> Vec<&'a PlayerStats>
where
	I: IntoIterator<Item = &'a PlayerStats>,
{
	players
		.into_iter()
		.filter(|p| conditions.iter().all(|c| c.matches(p)))
		.collect()
}

/// Parses `input` (e.g. `G > 50, GP > 10`) and filters `players` by it.
/// An empty match is `Ok`, not an error.
pub fn apply_filter<'a, I>(
	players: I,
	input: &str,
	syntax: ThresholdSyntax,
) -> Result<Vec<&'a PlayerStats>, FilterError>
where
	I: IntoIterator<Item = &'a PlayerStats>,
{
	let conditions = parse_conditions(input, syntax)?;
	log::debug!(
		"Filtering by {}",
		conditions.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" AND ")
	);
	Ok(filter_players(players, &conditions))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::condition::CompareOp;
	use crate::field::Field;

	fn player(name: &str, g: i32, gp: i32) -> PlayerStats {
		let mut p = PlayerStats::new(name, "EDM", "C");
		p.g = g;
		p.gp = gp;
		p
	}

	fn sample() -> Vec<PlayerStats> {
		vec![player("A", 60, 20), player("B", 40, 5), player("C", 55, 15)]
	}

	fn names(players: &[&PlayerStats]) -> Vec<String> {
		players.iter().map(|p| p.player.clone()).collect()
	}

	#[test]
	fn test_conjunctive_filter() {
		let players = sample();
		let result = apply_filter(&players, "G > 50, GP > 10", ThresholdSyntax::Strict).unwrap();
		assert_eq!(names(&result), vec!["A", "C"]);
	}

	#[test]
	fn test_filter_to_empty_is_ok() {
		let players = sample();
		let result = apply_filter(&players, "G > 50, GP < 10", ThresholdSyntax::Strict).unwrap();
		assert!(result.is_empty());
	}

	#[test]
	fn test_filter_matching_all_keeps_order() {
		let players = sample();
		let result = apply_filter(&players, "GP >= 0", ThresholdSyntax::Strict).unwrap();
		assert_eq!(result.len(), players.len());
		for (got, want) in result.iter().zip(&players) {
			assert_eq!(*got, want);
		}
	}

	#[test]
	fn test_filter_errors_return_nothing() {
		let players = sample();
		assert_eq!(
			apply_filter(&players, "G > 50, Goals > 1", ThresholdSyntax::Strict),
			Err(FilterError::UnknownField("Goals".into()))
		);
		assert_eq!(
			apply_filter(&players, "G > 50, G >> 1", ThresholdSyntax::Strict),
			Err(FilterError::InvalidCondition("G >> 1".into()))
		);
		assert_eq!(apply_filter(&players, "", ThresholdSyntax::Strict), Err(FilterError::NoConditions));
	}

	#[test]
	fn test_filter_view_again() {
		let players = sample();
		let first = filter_players(&players, &[Condition::new(Field::G, CompareOp::Gt, 50.0)]);
		let second = filter_players(first, &[Condition::new(Field::GP, CompareOp::Lt, 16.0)]);
		assert_eq!(names(&second), vec!["C"]);
		assert_eq!(players.len(), 3);
	}

	#[test]
	fn test_no_conditions_keeps_everything() {
		let players = sample();
		assert_eq!(filter_players(&players, &[]).len(), 3);
	}
}
