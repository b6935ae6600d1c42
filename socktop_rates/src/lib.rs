//! Library surface for socktop_rates, kept public for the binary and tests.

pub mod config;
pub mod csvio;
pub mod error;
pub mod paths;
pub mod rates;
pub mod timeparse;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::info;

pub use error::{RatesError, Result};

/// Read `input`, compute rates and write them next to it. Returns the output path.
pub fn convert_file(input: &Path, extra_gauges: &[String]) -> Result<PathBuf> {
    let out = paths::output_path(input);
    let samples = csvio::read_samples(input)?;
    let table = rates::compute_rates(&samples, extra_gauges)?;
    csvio::write_rates(&out, &table.plan, &table.records)?;
    info!(
        "{} -> {}: {} records, {} pairs skipped",
        input.display(),
        out.display(),
        table.records.len(),
        table.skipped
    );
    Ok(out)
}
