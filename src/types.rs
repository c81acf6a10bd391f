use serde::Serialize;

/// One skater row from the stats export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStats {
	#[serde(rename = "Player")]
	pub player: String,
	#[serde(rename = "Team")]
	pub team: String,
	#[serde(rename = "Pos")]
	pub pos: String,
	#[serde(rename = "GP")]
	pub gp: i32,
	#[serde(rename = "G")]
	pub g: i32,
	#[serde(rename = "A")]
	pub a: i32,
	#[serde(rename = "P")]
	pub p: i32,
	#[serde(rename = "+/-")]
	pub plus_minus: i32,
	#[serde(rename = "PIM")]
	pub pim: i32,
	#[serde(rename = "P/GP")]
	pub penalties_per_game: f64,
	#[serde(rename = "PPG")]
	pub ppg: f64,
	#[serde(rename = "PPP")]
	pub ppp: f64,
	#[serde(rename = "SHG")]
	pub shg: i32,
	#[serde(rename = "SHP")]
	pub shp: i32,
	#[serde(rename = "GWG")]
	pub gwg: i32,
	#[serde(rename = "OTG")]
	pub otg: i32,
	#[serde(rename = "S")]
	pub s: i32,
	#[serde(rename = "S%")]
	pub s_percentage: f64,
	#[serde(rename = "FOW%")]
	pub fow: f64,
}

impl PlayerStats {
	pub fn new(player: &str, team: &str, pos: &str) -> Self {
		Self {
			player: player.to_string(),
			team: team.to_string(),
			pos: pos.to_string(),
			..Self::default()
		}
	}

	/// Rows without a name or without a game played are placeholders in the export.
	pub fn is_valid(&self) -> bool {
		!self.player.trim().is_empty() && self.gp > 0
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
	Number(f64),
	Text(&'a str),
}

impl FieldValue<'_> {
	pub fn as_number(&self) -> Option<f64> {
		match self {
			FieldValue::Number(n) => Some(*n),
			FieldValue::Text(_) => None,
		}
	}
}
