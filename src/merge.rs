use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::read;
use crate::io::write;
use crate::model::Spectrum;

/// Merges the given histogram files into one in-memory spectrum.
///
/// Inputs are read in the given order; bins that appear in several files get
/// their counts summed. Any read or parse failure aborts the whole merge.
#[instrument(level = "info", skip_all, fields(input_count = inputs.len()))]
pub fn merge_spectra(inputs: &[PathBuf]) -> Result<Spectrum> {
    let mut spectrum = Spectrum::new();

    for input in inputs {
        let records = read::read_records(input)?;
        debug!(
            input = %input.display(),
            record_count = records.len(),
            "merged input file"
        );
        for record in records {
            spectrum.add(record);
        }
    }

    info!(bin_count = spectrum.len(), "merged all input files");
    Ok(spectrum)
}

/// Merges the given histogram files and writes the combined spectrum to
/// `output`. The output file is only touched after every input has been
/// read and merged successfully, so a failing input never leaves a partial
/// result behind.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub fn merge_to_file(inputs: &[PathBuf], output: &Path) -> Result<Spectrum> {
    let spectrum = merge_spectra(inputs)?;
    write::write_spectrum(output, &spectrum)?;
    info!(bin_count = spectrum.len(), "wrote combined spectrum");
    Ok(spectrum)
}

/// Merges the given histogram files and sums the counts of every bin whose
/// energy lies inside the inclusive window `[lower, upper]`.
#[instrument(level = "info", skip(inputs), fields(input_count = inputs.len()))]
pub fn integrate(inputs: &[PathBuf], lower: f64, upper: f64) -> Result<i64> {
    let spectrum = merge_spectra(inputs)?;
    let total = spectrum.integrate(lower, upper);
    debug!(total, "integrated energy window");
    Ok(total)
}
