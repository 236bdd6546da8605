use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MergeError, Result};
use crate::model::{BinKey, Record};

/// Reads every record from a histogram text file.
///
/// Each line must hold at least two whitespace-separated tokens: an energy
/// (floating point) followed by a count (integer). Any extra tokens on a
/// line are ignored. A line that does not fit this shape aborts the read
/// with a [`MergeError::MalformedLine`] naming the file, line number, and
/// offending content.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(MergeError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| MergeError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MergeError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let record = parse_line(&line).map_err(|reason| MergeError::MalformedLine {
            file: path.to_path_buf(),
            line: index as u64 + 1,
            content: line.clone(),
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

fn parse_line(line: &str) -> std::result::Result<Record, String> {
    let mut tokens = line.split_whitespace();
    let energy = tokens.next().ok_or_else(|| "missing energy field".to_string())?;
    let counts = tokens.next().ok_or_else(|| "missing counts field".to_string())?;

    let energy: f64 = energy
        .parse()
        .map_err(|_| format!("invalid energy '{energy}'"))?;
    let counts: i64 = counts
        .parse()
        .map_err(|_| format!("invalid counts '{counts}'"))?;

    Ok(Record {
        energy: BinKey::new(energy),
        counts,
    })
}
