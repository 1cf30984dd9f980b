//! Line-oriented reading of plain or gzip-compressed text files.
//!
//! Frequency tables and knowledge files can be gigabytes, so everything is
//! streamed through a `BufReader` line by line.

use crate::error::Result;
use flate2::read::GzDecoder;
use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a text file for buffered line reading, decompressing on the fly
/// when the path carries a `.gz` suffix.
pub fn open_lines(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Calls `handle(line_number, line)` for every line of the file.
///
/// Lines that fail to decode as UTF-8 are skipped with a warning; any other
/// read failure aborts. Line numbers are 1-based.
pub fn for_each_line<F>(path: &Path, mut handle: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let reader = open_lines(path)?;
    for (index, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => handle(index + 1, &line)?,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("{}:{}: skipping undecodable line: {e}", path.display(), index + 1);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
