//! `time_utc` parsing: `YYYY-MM-DDTHH:MM:SSZ` -> Unix seconds.

use chrono::{NaiveDateTime, Timelike};

use crate::error::{RatesError, Result};

pub const TIME_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn parse_time_utc(s: &str) -> Result<i64> {
    let dt = NaiveDateTime::parse_from_str(s, TIME_UTC_FORMAT).map_err(|source| {
        RatesError::Timestamp {
            value: s.to_string(),
            source: Some(source),
        }
    })?;
    // chrono parses :60 as a leap second (nanos >= 1e9); seconds must stay in 0..=59
    if dt.nanosecond() >= 1_000_000_000 {
        return Err(RatesError::Timestamp {
            value: s.to_string(),
            source: None,
        });
    }
    Ok(dt.and_utc().timestamp())
}
