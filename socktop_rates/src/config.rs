//! Runtime knobs read from the environment (once).

use once_cell::sync::OnceCell;

pub const LOG_ENV: &str = "SOCKTOP_RATES_LOG";
pub const EXTRA_GAUGES_ENV: &str = "SOCKTOP_RATES_EXTRA_GAUGES";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn log_filter() -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Additional column names to treat as gauges. Empty unless opted in.
pub fn extra_gauges() -> &'static [String] {
    static GAUGES: OnceCell<Vec<String>> = OnceCell::new();
    GAUGES.get_or_init(|| {
        std::env::var(EXTRA_GAUGES_ENV)
            .map(|v| parse_gauge_list(&v))
            .unwrap_or_default()
    })
}

pub fn parse_gauge_list(v: &str) -> Vec<String> {
    v.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_list_trims_and_drops_blanks() {
        assert_eq!(parse_gauge_list(" load1, ,mem_used ,"), vec!["load1", "mem_used"]);
        assert!(parse_gauge_list("").is_empty());
    }
}
