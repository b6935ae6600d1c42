//! Pairwise differencing of cumulative counters into per-second rates.

use tracing::{debug, trace};

use crate::error::{RatesError, Result};
use crate::timeparse::parse_time_utc;
use crate::types::{ColumnPlan, RateRecord, RateTable, SampleRow, SampleSet, TIME_COL};

/// Counter cell as an integer; empty, missing or non-numeric cells read as 0.
pub fn counter_value(raw: &str) -> i128 {
    let v = raw.trim();
    if v.is_empty() {
        return 0;
    }
    match v.parse::<i128>() {
        Ok(n) => n,
        Err(_) => {
            trace!("non-numeric counter value {v:?}, using 0");
            0
        }
    }
}

/// `cur - prev`; pairs whose exact difference leaves i128 are differenced as floats.
pub fn counter_delta(cur: i128, prev: i128) -> f64 {
    cur.checked_sub(prev)
        .map(|d| d as f64)
        .unwrap_or_else(|| cur as f64 - prev as f64)
}

pub fn format_rate(delta: f64, elapsed: i64) -> String {
    format!("{:.2}", delta / elapsed as f64)
}

pub fn compute_rates(samples: &SampleSet, extra_gauges: &[String]) -> Result<RateTable> {
    if samples.rows.len() < 2 {
        return Err(RatesError::InsufficientData {
            rows: samples.rows.len(),
        });
    }
    let plan = ColumnPlan::from_header(&samples.header, extra_gauges)
        .ok_or(RatesError::MissingColumn(TIME_COL))?;

    let mut records = Vec::with_capacity(samples.rows.len() - 1);
    let mut skipped = 0usize;

    let mut prev = &samples.rows[0];
    let mut prev_t = parse_time_utc(prev.get(plan.time))?;
    for cur in &samples.rows[1..] {
        let cur_t = parse_time_utc(cur.get(plan.time))?;
        let elapsed = cur_t - prev_t;
        if elapsed <= 0 {
            debug!(
                "skipping pair {} -> {} (elapsed {elapsed}s)",
                prev.get(plan.time),
                cur.get(plan.time)
            );
            skipped += 1;
        } else {
            records.push(rate_record(&plan, prev, cur, elapsed));
        }
        prev = cur;
        prev_t = cur_t;
    }

    Ok(RateTable {
        plan,
        records,
        skipped,
    })
}

fn rate_record(plan: &ColumnPlan, prev: &SampleRow, cur: &SampleRow, elapsed: i64) -> RateRecord {
    RateRecord {
        time_utc: cur.get(plan.time).to_string(),
        iface: plan
            .iface
            .map(|i| cur.get(i).to_string())
            .unwrap_or_default(),
        rates: plan
            .counters
            .iter()
            .map(|&c| {
                let delta = counter_delta(counter_value(cur.get(c)), counter_value(prev.get(c)));
                format_rate(delta, elapsed)
            })
            .collect(),
        gauges: plan.gauges.iter().map(|&g| cur.get(g).to_string()).collect(),
    }
}
