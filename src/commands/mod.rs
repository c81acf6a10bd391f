pub mod fields;
pub mod filter;
pub mod interactive;
pub mod show;
pub mod sort;

use std::io::{self, Write};
use std::path::Path;

use crate::parse::{load_players_nonempty, LoadError};
use crate::types::PlayerStats;

/// Loads the data file for a one-shot command. An export with no usable rows
/// ends the command cleanly; an unreadable one exits with an error.
pub fn load_or_exit(data_file: &Path) -> Vec<PlayerStats> {
	match load_players_nonempty(data_file) {
		Ok(players) => players,
		Err(e @ LoadError::NoData) => {
			println!("{}", e);
			std::process::exit(0);
		}
		Err(e) => {
			eprintln!("Error reading {}: {}", data_file.display(), e);
			std::process::exit(1);
		}
	}
}

/// Runs `f` against a locked stdout. A closed pipe ends the process quietly.
pub fn with_stdout<F>(f: F)
where
	F: FnOnce(&mut io::StdoutLock<'_>) -> io::Result<()>,
{
	let stdout = io::stdout();
	let mut out = stdout.lock();
	let result = f(&mut out).and_then(|_| out.flush());
	if let Err(e) = result {
		if e.kind() != io::ErrorKind::BrokenPipe {
			eprintln!("Error writing output: {}", e);
			std::process::exit(1);
		}
		std::process::exit(0);
	}
}
