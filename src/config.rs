use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::condition::ThresholdSyntax;

pub const DEFAULT_DATA_FILE: &str = "players.csv";
pub const DATA_FILE_ENV: &str = "NHLS_DATA_FILE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub data_file: Option<PathBuf>,
	pub filter: FilterConfig,
	pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
	pub thresholds: ThresholdSyntax,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
	/// Fixed precision for fractional columns. Shortest form when unset.
	pub decimals: Option<usize>,
}

impl Config {
	pub fn load() -> Self {
		let path = config_path();
		if path.exists() {
			match fs::read_to_string(&path) {
				Ok(content) => match Self::from_toml(&content) {
					Ok(config) => return config,
					Err(e) => {
						log::warn!("Failed to parse config {}: {}", path.display(), e);
					}
				},
				Err(e) => {
					log::warn!("Failed to read config {}: {}", path.display(), e);
				}
			}
		}
		Config::default()
	}

	pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}
}

fn config_path() -> PathBuf {
	if let Some(config_dir) = dirs::config_dir() {
		config_dir.join("nhls").join("config.toml")
	} else {
		PathBuf::from(".nhls.toml")
	}
}

pub fn resolve_data_file(cli_arg: Option<&PathBuf>, config: &Config) -> PathBuf {
	let env_value = std::env::var(DATA_FILE_ENV).ok();
	resolve_data_file_with(cli_arg, env_value.as_deref(), config)
}

/// Flag, then `NHLS_DATA_FILE`, then the config file, then `players.csv`.
fn resolve_data_file_with(cli_arg: Option<&PathBuf>, env_value: Option<&str>, config: &Config) -> PathBuf {
	if let Some(path) = cli_arg {
		return path.clone();
	}

	if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
		return PathBuf::from(path);
	}

	config
		.data_file
		.clone()
		.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
