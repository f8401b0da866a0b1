//! Pairgrowth compares the growth of XRP against BTC from daily price history.
//!
//! Overview
//! - Pulls full daily history for both assets from registered `PriceSource`s.
//! - Normalizes each series to one price per UTC date, inner-joins them, and
//!   downsamples to daily, weekly, or monthly periods.
//! - Optionally rebases the window to a start date and derives indexed growth,
//!   the XRP/BTC ratio, returns, z-scores, rolling CAGR, and drawdown.
//! - Reduces the final table to a headline `Summary`.
//!
//! Key behaviors and trade-offs
//! - Source fallback: sources are tried in registration order and the first
//!   non-empty history wins; fewer calls, but a stale first source shadows a
//!   fresher second one.
//! - Resampling keeps the last observation of each period and labels it with
//!   the period end (Sunday for weekly, the last calendar day for monthly).
//! - Errors stop the run at the first failing stage; no partial table is
//!   returned.
//!
//! Examples
//! Running a comparison against the fixture source:
//! ```rust
//! use std::sync::Arc;
//! use pairgrowth::{Frequency, PairGrowth};
//! use pairgrowth_mock::MockSource;
//!
//! let pg = PairGrowth::builder()
//!     .with_source(Arc::new(MockSource::new()))
//!     .frequency(Frequency::Monthly)
//!     .rolling_window_days(Some(365))
//!     .build()?;
//!
//! let out = pg.run()?;
//! println!("{}", out.report());
//! assert_eq!(out.table.first().map(|r| r.btc_indexed), Some(1.0));
//! # Ok::<(), pairgrowth::PairError>(())
//! ```
//!
//! See `pairgrowth/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{PairGrowth, PairGrowthBuilder, tag_err};

pub use pairgrowth_core::{
    DAYS_PER_YEAR, MIN_SPAN_YEARS, MarketChart, PriceSource, align, calculate_cagr, compute,
    compute_metrics, normalize_series, overlap_window, rebase, resample, summarize,
};
#[cfg(feature = "dataframe")]
pub use pairgrowth_core::ToDataFrame;

// Re-export shared types for convenience
pub use pairgrowth_types::{
    AlignedRow, Asset, ColumnValues, CompareConfig, Comparison, Coverage, Drawdown, Frequency,
    MetricRow, MetricTable, ObservedAt, PairError, PricePoint, RawObservation, RollingMetrics,
    Stage, Summary, SummaryReport,
};
