//! Time-series stages of the comparison pipeline.
//!
//! Modules include:
//! - `normalize`: coerce raw observations to one price per UTC date
//! - `align`: inner-join the two series and find their overlap window
//! - `resample`: keep the last observation of each day/week/month
//! - `rebase`: cut the series at the analysis start date
//! - `infer`: estimate the period length of a resampled series
/// Period-length inference and rolling-window sizing.
pub mod infer;
/// Inner join of the BTC and XRP series.
pub mod align;
/// Raw observation normalization.
pub mod normalize;
/// Analysis-window truncation.
pub mod rebase;
/// Last-of-period resampling.
pub mod resample;
