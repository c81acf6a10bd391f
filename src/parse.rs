use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::field::{resolve_field, Field};
use crate::types::PlayerStats;

#[derive(Error, Debug)]
pub enum LoadError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	#[error("No data found in the file")]
	NoData,
}

pub fn load_players<P: AsRef<Path>>(path: P) -> Result<Vec<PlayerStats>, LoadError> {
	let path = path.as_ref();
	let file = File::open(path)?;
	let players = read_players(file)?;
	log::info!("Loaded {} players from {}", players.len(), path.display());
	Ok(players)
}

/// Like [`load_players`], but a file with no usable rows is `LoadError::NoData`.
pub fn load_players_nonempty<P: AsRef<Path>>(path: P) -> Result<Vec<PlayerStats>, LoadError> {
	let players = load_players(path)?;
	if players.is_empty() {
		return Err(LoadError::NoData);
	}
	Ok(players)
}

/// Reads a stats export with a header row. Columns are matched by label or
/// canonical name; missing or malformed cells fall back to zero, and
/// placeholder rows (blank name, no games played) are dropped.
pub fn read_players<R: Read>(reader: R) -> Result<Vec<PlayerStats>, LoadError> {
	let mut rdr = csv::ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.trim(csv::Trim::All)
		.from_reader(reader);

	let columns = header_columns(rdr.headers()?);

	let mut players = Vec::new();
	for (line, result) in rdr.records().enumerate() {
		let record = match result {
			Ok(r) => r,
			Err(e) => {
				log::warn!("Skipping unreadable row {}: {}", line + 2, e);
				continue;
			}
		};

		let mut player = PlayerStats::default();
		for (cell, field) in record.iter().zip(&columns) {
			if let Some(field) = field {
				field.set(&mut player, cell);
			}
		}

		if player.is_valid() {
			players.push(player);
		} else {
			log::debug!("Dropping row {}: blank name or no games played", line + 2);
		}
	}

	Ok(players)
}

fn header_columns(headers: &csv::StringRecord) -> Vec<Option<Field>> {
	headers
		.iter()
		.map(|h| {
			let field = resolve_field(h.trim());
			if field.is_none() {
				log::debug!("Ignoring unknown column: {}", h);
			}
			field
		})
		.collect()
}
