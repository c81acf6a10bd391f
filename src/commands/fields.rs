use crate::commands::with_stdout;
use crate::display::write_fields;

pub fn run_fields() {
	with_stdout(|out| write_fields(out));
}
