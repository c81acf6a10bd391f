use std::io;
use std::path::Path;

use crate::condition::ThresholdSyntax;
use crate::config::Config;
use crate::parse::{load_players_nonempty, LoadError};
use crate::session::Session;

/// A missing or unreadable file is "no data", not a failure.
pub fn run_interactive(data_file: &Path, syntax: ThresholdSyntax, config: &Config) {
	let players = match load_players_nonempty(data_file) {
		Ok(p) => p,
		Err(e @ LoadError::NoData) => {
			println!("{}", e);
			return;
		}
		Err(e) => {
			println!("Error reading the CSV file: {}", e);
			println!("{}", LoadError::NoData);
			return;
		}
	};

	let stdin = io::stdin();
	let stdout = io::stdout();
	let mut session = Session::new(&players, config, stdin.lock(), stdout.lock()).thresholds(syntax);

	if let Err(e) = session.run() {
		if e.kind() != io::ErrorKind::BrokenPipe {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
