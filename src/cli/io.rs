//! JSON I/O handling for CLI
//!
//! - Input: raw bytes from a file or stdin, or one payload per line
//! - Output: one envelope per line on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::api::Envelope;

use super::errors::CliResult;

/// Read a whole payload from `file`, or stdin when absent
pub fn read_input(file: Option<&Path>) -> CliResult<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write one envelope as a single JSON line
pub fn write_envelope<W: Write>(writer: &mut W, envelope: &Envelope) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, envelope)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
