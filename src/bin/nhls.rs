use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nhlstats::commands;
use nhlstats::{resolve_data_file, Config, ThresholdSyntax};

#[derive(Parser)]
#[command(name = "nhls")]
#[command(about = "NHL player stats - view, filter and sort a stats export")]
#[command(version)]
struct Cli {
	/// Stats export to load (defaults to players.csv)
	#[arg(long, short, global = true, value_name = "PATH")]
	file: Option<PathBuf>,

	#[arg(long, global = true, help = "Accept negative and decimal filter thresholds")]
	signed_thresholds: bool,

	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the interactive menu (default)
	Interactive,

	/// Print every player
	Show {
		#[arg(long)]
		json: bool,
	},

	/// Print players matching all conditions
	Filter {
		#[arg(help = "Comma-separated conditions (e.g., \"G > 50, GP > 10\")")]
		conditions: String,
		#[arg(long)]
		json: bool,
	},

	/// Print players ordered by a field
	Sort {
		field: String,
		#[arg(help = "asc or desc")]
		direction: String,
		#[arg(long)]
		json: bool,
	},

	/// List field names and their aliases
	Fields,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();
	let config = Config::load();
	let data_file = resolve_data_file(cli.file.as_ref(), &config);

	let syntax = if cli.signed_thresholds {
		ThresholdSyntax::Signed
	} else {
		config.filter.thresholds
	};

	match cli.command.unwrap_or(Commands::Interactive) {
		Commands::Interactive => commands::interactive::run_interactive(&data_file, syntax, &config),
		Commands::Show { json } => commands::show::run_show(&data_file, &config, json),
		Commands::Filter { conditions, json } => {
			commands::filter::run_filter(&data_file, &conditions, syntax, &config, json)
		}
		Commands::Sort { field, direction, json } => {
			commands::sort::run_sort(&data_file, &field, &direction, &config, json)
		}
		Commands::Fields => commands::fields::run_fields(),
	}
}
