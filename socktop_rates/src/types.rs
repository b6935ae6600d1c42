//! Sample rows, column classification and the output column plan.

pub const TIME_COL: &str = "time_utc";
pub const IFACE_COL: &str = "iface";

/// Gauges carried through unchanged, in output order.
pub const GAUGE_COLS: [&str; 3] = ["tcp_estab", "proc_rss_kb", "proc_vsz_kb"];

pub const RATE_SUFFIX: &str = "_per_s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Time,
    Iface,
    Gauge,
    Counter,
}

impl ColumnKind {
    /// Static name-based classification. `extra_gauges` extends the fixed gauge set.
    pub fn of(name: &str, extra_gauges: &[String]) -> Self {
        match name {
            TIME_COL => ColumnKind::Time,
            IFACE_COL => ColumnKind::Iface,
            _ if GAUGE_COLS.contains(&name) => ColumnKind::Gauge,
            _ if extra_gauges.iter().any(|g| g == name) => ColumnKind::Gauge,
            _ => ColumnKind::Counter,
        }
    }
}

/// One observation; values are aligned to the header of its `SampleSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRow {
    pub values: Vec<String>,
}

impl SampleRow {
    pub fn get(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    pub header: Vec<String>,
    pub rows: Vec<SampleRow>,
}

impl SampleSet {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// Column indices into the input header plus the derived output header.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    pub time: usize,
    pub iface: Option<usize>,
    pub counters: Vec<usize>,
    pub gauges: Vec<usize>,
    pub output_header: Vec<String>,
}

impl ColumnPlan {
    pub fn from_header(header: &[String], extra_gauges: &[String]) -> Option<Self> {
        // a repeated name keeps its first position but reads from its last cell
        let find = |name: &str| header.iter().rposition(|h| h == name);
        let time = find(TIME_COL)?;
        let iface = find(IFACE_COL);
        let names = header
            .iter()
            .enumerate()
            .filter(|(i, h)| header.iter().position(|o| o == *h) == Some(*i))
            .map(|(_, h)| h.as_str());

        let mut counters = Vec::new();
        let mut extras = Vec::new();
        for name in names {
            match ColumnKind::of(name, extra_gauges) {
                ColumnKind::Counter => counters.extend(find(name)),
                ColumnKind::Gauge if !GAUGE_COLS.contains(&name) => extras.extend(find(name)),
                _ => {}
            }
        }

        // fixed gauges in fixed order, then configured extras in header order
        let mut gauges: Vec<usize> = GAUGE_COLS.iter().filter_map(|g| find(g)).collect();
        gauges.extend(extras);

        let mut output_header = vec![TIME_COL.to_string(), IFACE_COL.to_string()];
        output_header.extend(
            counters
                .iter()
                .map(|&i| format!("{}{RATE_SUFFIX}", header[i])),
        );
        output_header.extend(gauges.iter().map(|&i| header[i].clone()));

        Some(Self {
            time,
            iface,
            counters,
            gauges,
            output_header,
        })
    }
}

/// One output line: derived from a (previous, current) sample pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    pub time_utc: String,
    pub iface: String,
    /// Formatted `<counter>_per_s` values, in plan order.
    pub rates: Vec<String>,
    /// Raw gauge strings from the current row, in plan order.
    pub gauges: Vec<String>,
}

impl RateRecord {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [self.time_utc.as_str(), self.iface.as_str()]
            .into_iter()
            .chain(self.rates.iter().map(String::as_str))
            .chain(self.gauges.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone)]
pub struct RateTable {
    pub plan: ColumnPlan,
    pub records: Vec<RateRecord>,
    pub skipped: usize,
}
