use std::io::Write;
use std::path::Path;

use crate::commands::{load_or_exit, with_stdout};
use crate::condition::ThresholdSyntax;
use crate::config::Config;
use crate::display::{write_json, write_table};
use crate::filter::apply_filter;
use crate::session::NO_MATCHES;

pub fn run_filter(data_file: &Path, conditions: &str, syntax: ThresholdSyntax, config: &Config, json: bool) {
	let players = load_or_exit(data_file);

	let view = match apply_filter(&players, conditions, syntax) {
		Ok(v) => v,
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	};

	with_stdout(|out| {
		if json {
			write_json(out, view)
		} else if view.is_empty() {
			writeln!(out, "{}", NO_MATCHES)
		} else {
			write_table(out, view, &config.display)
		}
	});
}
