//! Error taxonomy for the rate transform.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatesError {
    /// A rate needs at least two samples.
    #[error("not enough samples to compute rates (need >= 2, got {rows})")]
    InsufficientData { rows: usize },

    #[error("input header has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("bad time_utc value {value:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    Timestamp {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RatesError>;
