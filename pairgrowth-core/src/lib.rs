//! pairgrowth-core
//!
//! The alignment-and-metrics pipeline shared across the pairgrowth ecosystem.
//!
//! - `timeseries`: normalize, align, resample, and rebase two daily price series.
//! - `metrics`: indexed growth, ratio, returns, z-scores, rolling CAGR, drawdown.
//! - `summary`: headline statistics over the final table.
//! - `pipeline`: the single entry point chaining every stage.
//! - `source`: the `PriceSource` trait implemented by data providers.
//! - `payload`: decoder for market-chart JSON documents.
//!
//! Execution model
//! ---------------
//! Every stage is a synchronous, pure function of its inputs and the
//! [`CompareConfig`]. There is no shared state between calls, so independent
//! callers may run the pipeline concurrently on their own inputs.
//!
#![warn(missing_docs)]

/// Polars export, enabled by the `dataframe` feature.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Derived per-row metrics.
pub mod metrics;
pub mod payload;
/// Pipeline entry point.
pub mod pipeline;
/// Price source trait.
pub mod source;
/// Headline statistics.
pub mod summary;
/// Time-series stages: normalize, align, resample, rebase, infer.
pub mod timeseries;

pub use pairgrowth_types::{
    AlignedRow, Asset, ColumnValues, CompareConfig, Comparison, Coverage, Drawdown, Frequency,
    MetricRow, MetricTable, ObservedAt, PairError, PricePoint, RawObservation, RollingMetrics,
    Stage, Summary, SummaryReport, is_positive_price,
};

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use metrics::{
    calculate_cagr, compute_drawdown, compute_indexed, compute_metrics, compute_returns,
    compute_rolling_cagr, compute_rolling_mean, compute_z_scores,
};
pub use payload::MarketChart;
pub use pipeline::compute;
pub use source::PriceSource;
pub use summary::{MIN_SPAN_YEARS, summarize};
pub use timeseries::align::{align, overlap_window};
pub use timeseries::infer::{DAYS_PER_YEAR, estimate_period_days, period_years, rolling_periods};
pub use timeseries::normalize::normalize_series;
pub use timeseries::rebase::rebase;
pub use timeseries::resample::{is_month_end, period_end, resample};
