use crate::model::Record;
use std::io::{self, Write};

/// Write `records` as a JSON array indented with two spaces, followed by a
/// newline.
pub fn display_records<W: Write>(records: &[Record], mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()
}
