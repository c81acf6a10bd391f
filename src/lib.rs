pub mod commands;
pub mod condition;
pub mod config;
pub mod display;
pub mod field;
pub mod filter;
pub mod parse;
pub mod session;
pub mod sort;
pub mod types;

pub use condition::{parse_clause, parse_conditions, Clause, CompareOp, Condition, ThresholdSyntax};
pub use config::{resolve_data_file, Config, DisplayConfig, FilterConfig};
pub use display::{format_header, format_row, format_value, write_fields, write_json, write_table};
pub use field::{resolve_field, Field, UnknownField, ALIASES, FIELDS};
pub use filter::{apply_filter, filter_players, FilterError};
pub use parse::{load_players, load_players_nonempty, read_players, LoadError};
pub use session::{MenuChoice, Session};
pub use sort::{sort_by_tokens, sort_players, SortDirection, SortError};
pub use types::*;
