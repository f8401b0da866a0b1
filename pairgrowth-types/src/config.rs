//! Per-call configuration for the comparison pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Target cadence of the resampled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    /// One row per aligned date.
    Daily,
    /// One row per calendar week, labelled with the week's Sunday.
    Weekly,
    /// One row per calendar month, labelled with the month's last day.
    #[default]
    Monthly,
}

impl Frequency {
    /// Human-readable label (`Daily`, `Weekly`, `Monthly`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable configuration bundle handed to the pipeline entry point.
///
/// Every field has a default, so partial JSON documents deserialize:
///
/// ```
/// use pairgrowth_types::{CompareConfig, Frequency};
///
/// let cfg: CompareConfig = serde_json::from_str(r#"{"include_drawdown": true}"#).unwrap();
/// assert_eq!(cfg.frequency, Frequency::Monthly);
/// assert!(cfg.include_drawdown);
/// assert_eq!(cfg.rolling_window(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Resampling cadence.
    pub frequency: Frequency,
    /// Inclusive first date of the analysis window; `None` keeps the overlap start.
    pub rebase_date: Option<NaiveDate>,
    /// Compute z-scores on natural-log prices instead of raw prices.
    pub use_log_for_zscore: bool,
    /// Rolling CAGR window expressed in calendar days.
    pub rolling_window_days: Option<u32>,
    /// Attach running-maximum drawdown columns.
    pub include_drawdown: bool,
}

impl CompareConfig {
    /// Effective rolling window in days; `Some(0)` counts as disabled.
    #[must_use]
    pub fn rolling_window(&self) -> Option<u32> {
        self.rolling_window_days.filter(|&d| d > 0)
    }
}
