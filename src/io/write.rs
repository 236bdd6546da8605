use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MergeError, Result};
use crate::model::Spectrum;

/// Writes the combined spectrum to `path`, creating or truncating it.
///
/// One row per bin in ascending energy order, tab separated:
/// `<energy>\t<counts>`. No header row and no trailing summary, so the
/// output is itself a valid input for a later merge.
pub fn write_spectrum(path: &Path, spectrum: &Spectrum) -> Result<()> {
    let file = File::create(path).map_err(|source| write_error(path, source))?;
    let mut out = BufWriter::new(file);

    for (key, counts) in spectrum.rows() {
        writeln!(out, "{key}\t{counts}").map_err(|source| write_error(path, source))?;
    }

    out.flush().map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: std::io::Error) -> MergeError {
    MergeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    }
}
