use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::condition::ThresholdSyntax;
use crate::config::Config;
use crate::display::write_table;
use crate::field::{resolve_field, Field};
use crate::filter::apply_filter;
use crate::sort::{sort_players, SortDirection, SortError};
use crate::types::PlayerStats;

pub const NO_MATCHES: &str = "No players found matching the filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
	ShowAll,
	Filter,
	Sort,
	Exit,
}

impl MenuChoice {
	pub const ALL: [MenuChoice; 4] = [
		MenuChoice::ShowAll,
		MenuChoice::Filter,
		MenuChoice::Sort,
		MenuChoice::Exit,
	];

	pub fn number(self) -> u8 {
		match self {
			MenuChoice::ShowAll => 1,
			MenuChoice::Filter => 2,
			MenuChoice::Sort => 3,
			MenuChoice::Exit => 4,
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			MenuChoice::ShowAll => "Show All Data",
			MenuChoice::Filter => "Filter Data",
			MenuChoice::Sort => "Sort Data",
			MenuChoice::Exit => "Exit",
		}
	}
}

impl FromStr for MenuChoice {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let n = s.trim().parse::<u8>().map_err(|_| ())?;
		Self::ALL.into_iter().find(|c| c.number() == n).ok_or(())
	}
}

/// Interactive menu loop over a loaded player set. The set is only ever
/// borrowed; each operation renders a fresh view of it.
pub struct Session<'a, R, W> {
	players: &'a [PlayerStats],
	config: &'a Config,
	thresholds: ThresholdSyntax,
	input: R,
	output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
	pub fn new(players: &'a [PlayerStats], config: &'a Config, input: R, output: W) -> Self {
		Self {
			players,
			config,
			thresholds: config.filter.thresholds,
			input,
			output,
		}
	}

	pub fn thresholds(mut self, syntax: ThresholdSyntax) -> Self {
		self.thresholds = syntax;
		self
	}

	pub fn into_output(self) -> W {
		self.output
	}

	pub fn run(&mut self) -> io::Result<()> {
		loop {
			self.write_menu()?;
			let choice = match self.read_line()? {
				Some(line) => line.parse::<MenuChoice>(),
				None => Ok(MenuChoice::Exit),
			};

			match choice {
				Ok(MenuChoice::ShowAll) => self.show_all()?,
				Ok(MenuChoice::Filter) => self.filter()?,
				Ok(MenuChoice::Sort) => self.sort()?,
				Ok(MenuChoice::Exit) => {
					writeln!(self.output, "Goodbye!")?;
					return Ok(());
				}
				Err(()) => writeln!(self.output, "Invalid option. Try again.")?,
			}
		}
	}

	fn write_menu(&mut self) -> io::Result<()> {
		writeln!(self.output)?;
		writeln!(self.output, "--- NHL Player Stats ---")?;
		for choice in MenuChoice::ALL {
			writeln!(self.output, "{}. {}", choice.number(), choice.title())?;
		}
		self.prompt("Choose an option: ")
	}

	fn prompt(&mut self, text: &str) -> io::Result<()> {
		write!(self.output, "{}", text)?;
		self.output.flush()
	}

	/// `None` once input is exhausted.
	fn read_line(&mut self) -> io::Result<Option<String>> {
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
	}

	fn show_all(&mut self) -> io::Result<()> {
		write_table(&mut self.output, self.players, &self.config.display)
	}

	fn filter(&mut self) -> io::Result<()> {
		writeln!(self.output, "Enter the conditions to filter (G > 50, GP > 10):")?;
		let input = self.read_line()?.unwrap_or_default();

		match apply_filter(self.players, &input, self.thresholds) {
			Ok(view) if view.is_empty() => writeln!(self.output, "{}", NO_MATCHES),
			Ok(view) => write_table(&mut self.output, view, &self.config.display),
			Err(e) => {
				log::debug!("Filter aborted: {:?}", e);
				writeln!(self.output, "{}", e)
			}
		}
	}

	fn sort(&mut self) -> io::Result<()> {
		self.prompt("Enter the field to sort by: ")?;
		let token = self.read_line()?.unwrap_or_default();
		let field = match resolve_field(token.trim()) {
			Some(f) => f,
			None => {
				let e = SortError::UnknownField(token.trim().to_string());
				return writeln!(self.output, "{}", e);
			}
		};

		self.prompt("Enter the direction (asc/desc): ")?;
		let direction = self.read_line()?.unwrap_or_default();
		match direction.parse::<SortDirection>() {
			Ok(direction) => self.show_sorted(field, direction),
			Err(e) => writeln!(self.output, "{}", e),
		}
	}

	fn show_sorted(&mut self, field: Field, direction: SortDirection) -> io::Result<()> {
		let view = sort_players(self.players, field, direction);
		write_table(&mut self.output, view, &self.config.display)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_menu_choice_parse() {
		assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::ShowAll));
		assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::Filter));
		assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Sort));
		assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
	}

	#[test]
	fn test_menu_choice_rejects_garbage() {
		assert!("0".parse::<MenuChoice>().is_err());
		assert!("5".parse::<MenuChoice>().is_err());
		assert!("abc".parse::<MenuChoice>().is_err());
		assert!("".parse::<MenuChoice>().is_err());
		assert!("-1".parse::<MenuChoice>().is_err());
		assert!("999999".parse::<MenuChoice>().is_err());
	}

	fn run(players: &[PlayerStats], input: &str) -> String {
		let config = Config::default();
		let mut session = Session::new(players, &config, input.as_bytes(), Vec::new());
		session.run().unwrap();
		String::from_utf8(session.into_output()).unwrap()
	}

	fn sample() -> Vec<PlayerStats> {
		let mut a = PlayerStats::new("Alpha", "EDM", "C");
		a.gp = 20;
		a.g = 60;
		let mut b = PlayerStats::new("Bravo", "TOR", "L");
		b.gp = 5;
		b.g = 40;
		vec![a, b]
	}

	#[test]
	fn test_invalid_menu_input_keeps_looping() {
		let out = run(&sample(), "banana\n9\n4\n");
		assert_eq!(out.matches("Invalid option. Try again.").count(), 2);
		assert!(out.ends_with("Goodbye!\n"));
	}

	#[test]
	fn test_eof_exits() {
		let out = run(&sample(), "");
		assert!(out.ends_with("Goodbye!\n"));
	}

	#[test]
	fn test_filter_messages() {
		let out = run(&sample(), "2\n\n2\nG > 100\n2\nGoals > 1\n2\nG > -5\n4\n");
		assert!(out.contains("No conditions entered"));
		assert!(out.contains(NO_MATCHES));
		assert!(out.contains("Invalid field: Goals"));
		assert!(out.contains("Invalid condition: G > -5"));
	}

	#[test]
	fn test_filter_non_numeric_threshold() {
		let out = run(&sample(), "2\nG > \u{0665}\n4\n");
		assert!(out.contains("Invalid value in condition: G > \u{0665}"));
		assert!(!out.contains("--- Player Stats ---"));
	}

	#[test]
	fn test_sort_messages() {
		let out = run(&sample(), "3\nGoals\n3\nG\n\n3\nG\nsideways\n4\n");
		assert!(out.contains("Invalid field: Goals"));
		assert!(out.contains("No sort direction entered"));
		assert!(out.contains("Invalid sort direction: sideways"));
		assert!(!out.contains("--- Player Stats ---"));
	}
}
