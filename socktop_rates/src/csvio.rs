//! CSV in/out: load every sample up front, write the rate table in one go.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::Result;
use crate::types::{ColumnPlan, RateRecord, SampleRow, SampleSet};

pub fn read_samples(path: &Path) -> Result<SampleSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        // ragged rows: short ones read as empty cells, long ones are cut to the header
        .flexible(true)
        .from_path(path)?;

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let width = header.len();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(sample_row(&rec?, width));
    }
    debug!(
        "read {} samples x {} columns from {}",
        rows.len(),
        width,
        path.display()
    );
    Ok(SampleSet { header, rows })
}

fn sample_row(rec: &StringRecord, width: usize) -> SampleRow {
    SampleRow {
        values: rec.iter().take(width).map(str::to_string).collect(),
    }
}

pub fn write_rates(path: &Path, plan: &ColumnPlan, records: &[RateRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(path)?;
    wtr.write_record(&plan.output_header)?;
    for rec in records {
        wtr.write_record(rec.fields())?;
    }
    wtr.flush()?;
    Ok(())
}
