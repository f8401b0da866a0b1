//! Output records produced by the pipeline: metric rows, the table that holds
//! them, and the headline summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CompareConfig;

/// Rolling-window columns attached when a rolling window is configured.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollingMetrics {
    /// Annualized BTC growth over the trailing window; `None` until enough history.
    pub btc_cagr: Option<f64>,
    /// Annualized XRP growth over the trailing window; `None` until enough history.
    pub xrp_cagr: Option<f64>,
    /// Mean XRP/BTC ratio over the trailing window; `None` until the window fills.
    pub ratio_mean: Option<f64>,
}

/// Relative decline from the running maximum, always `<= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Drawdown {
    /// BTC drawdown.
    pub btc: f64,
    /// XRP drawdown.
    pub xrp: f64,
}

/// A resampled row with all derived fields.
///
/// Every derived value is relative to the first row of the rebased window.
/// Cells that are undefined for a row (first-row returns, zero-variance
/// z-scores, rolling values without enough history) are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Period end date.
    pub date: NaiveDate,
    /// BTC price.
    pub btc_price: f64,
    /// XRP price.
    pub xrp_price: f64,
    /// BTC price divided by the window's first BTC price.
    pub btc_indexed: f64,
    /// XRP price divided by the window's first XRP price.
    pub xrp_indexed: f64,
    /// XRP price divided by BTC price.
    pub xrp_btc_ratio: f64,
    /// BTC change versus the previous row.
    pub btc_return: Option<f64>,
    /// XRP change versus the previous row.
    pub xrp_return: Option<f64>,
    /// BTC z-score over the whole window.
    pub btc_zscore: Option<f64>,
    /// XRP z-score over the whole window.
    pub xrp_zscore: Option<f64>,
    /// True when `date` is the last calendar day of its month.
    pub is_month_end: bool,
    /// Present only when a rolling window is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling: Option<RollingMetrics>,
    /// Present only when drawdown is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawdown: Option<Drawdown>,
}

/// Values of one named table column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// The `date` column.
    Dates(Vec<NaiveDate>),
    /// Numeric columns; `None` marks an undefined cell.
    Floats(Vec<Option<f64>>),
    /// Boolean flag columns.
    Flags(Vec<bool>),
}

/// Ordered metric rows plus the options that shaped their optional columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricTable {
    /// Rows ordered by date ascending.
    pub rows: Vec<MetricRow>,
    /// Rolling window in days used for the `*_rolling_<N>` columns.
    pub rolling_window_days: Option<u32>,
    /// Whether drawdown columns are present.
    pub include_drawdown: bool,
}

const BASE_COLUMNS: [&str; 11] = [
    "date",
    "btc_price",
    "xrp_price",
    "btc_indexed",
    "xrp_indexed",
    "xrp_btc_ratio",
    "btc_return",
    "xrp_return",
    "btc_zscore",
    "xrp_zscore",
    "is_month_end",
];

impl MetricTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&MetricRow> {
        self.rows.first()
    }

    /// Last row, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MetricRow> {
        self.rows.last()
    }

    /// Column names in presentation order, including optional columns that
    /// this table carries.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = BASE_COLUMNS.iter().map(|s| (*s).to_string()).collect();
        if let Some(n) = self.rolling_window_days {
            names.push(format!("btc_cagr_rolling_{n}"));
            names.push(format!("xrp_cagr_rolling_{n}"));
            names.push(format!("ratio_rolling_{n}"));
        }
        if self.include_drawdown {
            names.push("btc_drawdown".to_string());
            names.push("xrp_drawdown".to_string());
        }
        names
    }

    /// Values of the column called `name`, or `None` if the table has no such column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<ColumnValues> {
        let floats = |f: fn(&MetricRow) -> Option<f64>| {
            Some(ColumnValues::Floats(self.rows.iter().map(f).collect()))
        };
        match name {
            "date" => Some(ColumnValues::Dates(self.rows.iter().map(|r| r.date).collect())),
            "btc_price" => floats(|r| Some(r.btc_price)),
            "xrp_price" => floats(|r| Some(r.xrp_price)),
            "btc_indexed" => floats(|r| Some(r.btc_indexed)),
            "xrp_indexed" => floats(|r| Some(r.xrp_indexed)),
            "xrp_btc_ratio" => floats(|r| Some(r.xrp_btc_ratio)),
            "btc_return" => floats(|r| r.btc_return),
            "xrp_return" => floats(|r| r.xrp_return),
            "btc_zscore" => floats(|r| r.btc_zscore),
            "xrp_zscore" => floats(|r| r.xrp_zscore),
            "is_month_end" => Some(ColumnValues::Flags(
                self.rows.iter().map(|r| r.is_month_end).collect(),
            )),
            "btc_drawdown" if self.include_drawdown => {
                floats(|r| r.drawdown.map(|d| d.btc))
            }
            "xrp_drawdown" if self.include_drawdown => {
                floats(|r| r.drawdown.map(|d| d.xrp))
            }
            other => {
                let n = self.rolling_window_days?;
                let suffix = format!("_rolling_{n}");
                match other.strip_suffix(suffix.as_str())? {
                    "btc_cagr" => floats(|r| r.rolling.and_then(|m| m.btc_cagr)),
                    "xrp_cagr" => floats(|r| r.rolling.and_then(|m| m.xrp_cagr)),
                    "ratio" => floats(|r| r.rolling.and_then(|m| m.ratio_mean)),
                    _ => None,
                }
            }
        }
    }
}

/// Headline statistics over the final table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Date of the first row.
    pub start_date: NaiveDate,
    /// Date of the last row.
    pub end_date: NaiveDate,
    /// Days between first and last row divided by 365.25.
    pub span_years: f64,
    /// BTC price on the first row.
    pub btc_start_price: f64,
    /// BTC price on the last row.
    pub btc_end_price: f64,
    /// XRP price on the first row.
    pub xrp_start_price: f64,
    /// XRP price on the last row.
    pub xrp_end_price: f64,
    /// BTC compound annual growth rate; `None` when undefined.
    pub btc_cagr: Option<f64>,
    /// XRP compound annual growth rate; `None` when undefined.
    pub xrp_cagr: Option<f64>,
    /// XRP/BTC ratio on the first row.
    pub ratio_start: f64,
    /// XRP/BTC ratio on the last row.
    pub ratio_end: f64,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Configuration the run used.
    pub config: CompareConfig,
    /// Metric-enriched rows.
    pub table: MetricTable,
    /// Headline statistics.
    pub summary: Summary,
}

impl Comparison {
    /// Plain-text rendering of the summary and the run configuration.
    #[must_use]
    pub const fn report(&self) -> SummaryReport<'_> {
        SummaryReport {
            summary: &self.summary,
            config: &self.config,
        }
    }
}

/// `Display` adapter that renders a summary as a short text report.
///
/// ```
/// use chrono::NaiveDate;
/// use pairgrowth_types::{CompareConfig, Summary, SummaryReport};
///
/// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
/// let summary = Summary {
///     start_date: d(1),
///     end_date: d(31),
///     span_years: 30.0 / 365.25,
///     btc_start_price: 100.0,
///     btc_end_price: 110.0,
///     xrp_start_price: 0.2,
///     xrp_end_price: 0.25,
///     btc_cagr: Some(2.1),
///     xrp_cagr: None,
///     ratio_start: 0.002,
///     ratio_end: 0.25 / 110.0,
/// };
/// let cfg = CompareConfig::default();
/// let text = SummaryReport { summary: &summary, config: &cfg }.to_string();
/// assert!(text.contains("BTC CAGR: 210.00%"));
/// assert!(text.contains("XRP CAGR: n/a"));
/// assert!(text.contains("Frequency: Monthly"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SummaryReport<'a> {
    /// Summary to render.
    pub summary: &'a Summary,
    /// Configuration echoed at the end of the report.
    pub config: &'a CompareConfig,
}

struct Percent(Option<f64>);

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) if v.is_finite() => write!(f, "{:.2}%", v * 100.0),
            _ => f.write_str("n/a"),
        }
    }
}

impl std::fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.summary;
        writeln!(f, "XRP vs BTC Summary")?;
        writeln!(f, "====================")?;
        writeln!(f, "Start Date: {}", s.start_date.format("%Y-%m-%d"))?;
        writeln!(f, "End Date: {}", s.end_date.format("%Y-%m-%d"))?;
        writeln!(f, "Span (years): {:.2}", s.span_years)?;
        writeln!(f, "BTC CAGR: {}", Percent(s.btc_cagr))?;
        writeln!(f, "XRP CAGR: {}", Percent(s.xrp_cagr))?;
        writeln!(f, "XRP/BTC Ratio Start: {:.4}", s.ratio_start)?;
        writeln!(f, "XRP/BTC Ratio End: {:.4}", s.ratio_end)?;
        writeln!(f, "Frequency: {}", self.config.frequency)?;
        match self.config.rolling_window() {
            Some(days) => writeln!(f, "Rolling Window: {days}")?,
            None => writeln!(f, "Rolling Window: None")?,
        }
        let log = if self.config.use_log_for_zscore {
            "Yes"
        } else {
            "No"
        };
        write!(f, "Z-Scores via Log Prices: {log}")
    }
}
