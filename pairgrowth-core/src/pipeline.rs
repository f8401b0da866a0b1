use crate::metrics::compute_metrics;
use crate::summary::summarize;
use crate::timeseries::{align::align, normalize::normalize_series, rebase::rebase, resample::resample};
use crate::{Asset, CompareConfig, Comparison, PairError, RawObservation};

/// Run the full comparison: normalize → align → resample → rebase → metrics → summary.
///
/// Both inputs may be raw observations or already-normalized
/// [`PricePoint`](crate::PricePoint)s. The run stops at the first failing
/// stage; no partial table is returned.
///
/// # Errors
/// - `EmptySeries` if either input has no observations.
/// - `NoOverlap` if the series share no date with positive prices.
/// - `EmptyAfterResample` if resampling leaves no period.
/// - `RebaseOutOfRange` if `config.rebase_date` is after the last period.
///
/// ```
/// use chrono::NaiveDate;
/// use pairgrowth_core::{CompareConfig, Frequency, PricePoint, compute};
///
/// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
/// let btc: Vec<_> = (1..=6).zip([100.0, 105.0, 110.0, 115.0, 120.0, 125.0])
///     .map(|(day, p)| PricePoint::new(d(day), p))
///     .collect();
/// let xrp: Vec<_> = (3..=8).zip([0.20, 0.21, 0.22, 0.23, 0.24, 0.25])
///     .map(|(day, p)| PricePoint::new(d(day), p))
///     .collect();
/// let cfg = CompareConfig { frequency: Frequency::Daily, ..CompareConfig::default() };
///
/// let out = compute(btc, xrp, &cfg).unwrap();
/// assert_eq!(out.table.len(), 4);
/// assert_eq!(out.summary.start_date, d(3));
/// assert_eq!(out.summary.end_date, d(6));
/// assert_eq!(out.table.rows[0].btc_indexed, 1.0);
/// assert_eq!(out.table.rows[0].xrp_btc_ratio, 0.20 / 110.0);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::pipeline::compute",
        skip_all,
        fields(frequency = %config.frequency),
    )
)]
pub fn compute<B, X>(btc: B, xrp: X, config: &CompareConfig) -> Result<Comparison, PairError>
where
    B: IntoIterator,
    B::Item: Into<RawObservation>,
    X: IntoIterator,
    X::Item: Into<RawObservation>,
{
    let btc = normalize_series(Asset::Btc, btc)?;
    let xrp = normalize_series(Asset::Xrp, xrp)?;
    let aligned = align(&btc, &xrp)?;
    let resampled = resample(aligned, config.frequency)?;
    let window = rebase(resampled, config.rebase_date)?;
    let table = compute_metrics(&window, config);
    let summary = summarize(&table.rows)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = table.len(),
        start = %summary.start_date,
        end = %summary.end_date,
        "comparison complete"
    );

    Ok(Comparison {
        config: *config,
        table,
        summary,
    })
}
