use std::path::Path;

use crate::commands::{load_or_exit, with_stdout};
use crate::config::Config;
use crate::display::{write_json, write_table};
use crate::sort::sort_by_tokens;

pub fn run_sort(data_file: &Path, field: &str, direction: &str, config: &Config, json: bool) {
	let players = load_or_exit(data_file);

	let view = match sort_by_tokens(&players, field, direction) {
		Ok(v) => v,
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	};

	with_stdout(|out| {
		if json {
			write_json(out, view)
		} else {
			write_table(out, view, &config.display)
		}
	});
}
