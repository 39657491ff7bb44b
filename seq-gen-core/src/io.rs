use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::GenerationError;

const BUFFER_SIZE: usize = 1024 * 1024;

/// Formats `values` as newline-delimited decimal records.
///
/// This is the output-formatting pass: every value equal to `highlight` is
/// written to `report` (one line per occurrence, left to right) as it is
/// formatted.
pub fn render<W: Write>(values: &[i64], highlight: Option<i64>, report: &mut W) -> io::Result<String> {
	// Up to 20 digits plus sign and newline per record, most are far shorter.
	let mut text = String::with_capacity(values.len() * 3);
	let mut buffer = itoa::Buffer::new();

	for value in values {
		let digits = buffer.format(*value);
		if highlight == Some(*value) {
			report.write_all(digits.as_bytes())?;
			report.write_all(b"\n")?;
		}
		text.push_str(digits);
		text.push('\n');
	}

	report.flush()?;
	Ok(text)
}

/// Appends `text` to the file at `path`, creating it if needed.
///
/// Existing content is never truncated.
pub fn append_lines<P: AsRef<Path>>(path: P, text: &str) -> io::Result<()> {
	let file = OpenOptions::new().create(true).append(true).open(path)?;
	let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);
	writer.write_all(text.as_bytes())?;
	writer.flush()
}

/// Renders `values` and appends them to `path`.
///
/// The artifact is only touched once rendering (and highlight reporting)
/// succeeded. Returns the number of records written.
///
/// # Errors
/// - `GenerationError::Report` if the highlight stream fails
/// - `GenerationError::Persistence` if the file cannot be opened or written
pub fn write_sequence<P, W>(path: P, values: &[i64], highlight: Option<i64>, report: &mut W) -> Result<usize, GenerationError>
where
	P: AsRef<Path>,
	W: Write,
{
	let path = path.as_ref();
	let text = render(values, highlight, report).map_err(|source| GenerationError::Report { source })?;
	append_lines(path, &text).map_err(|source| GenerationError::Persistence {
		path: path.to_path_buf(),
		source,
	})?;
	info!("appended {} records to {}", values.len(), path.display());
	Ok(values.len())
}
