use std::path::Path;

use crate::commands::{load_or_exit, with_stdout};
use crate::config::Config;
use crate::display::{write_json, write_table};

pub fn run_show(data_file: &Path, config: &Config, json: bool) {
	let players = load_or_exit(data_file);

	with_stdout(|out| {
		if json {
			write_json(out, &players)
		} else {
			write_table(out, &players, &config.display)
		}
	});
}
