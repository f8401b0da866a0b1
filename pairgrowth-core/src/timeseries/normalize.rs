use std::collections::{BTreeMap, btree_map::Entry};

use chrono::NaiveDate;

use crate::{Asset, PairError, PricePoint, RawObservation};

/// Collapse raw observations into one price per UTC calendar date.
///
/// - Timestamps are reduced to their UTC date; the time of day is dropped.
/// - Observations are keyed by date; the last one in input order wins for
///   duplicates. A `NaN` price never replaces an earlier number for the same
///   date, so a trailing gap does not erase the day's last quote.
/// - Points are returned sorted by date, strictly increasing.
///
/// Prices are not validated here; non-positive values are dropped by the aligner.
///
/// # Errors
/// Returns `Err(PairError::EmptySeries)` if `raw` yields no observations.
///
/// ```
/// use chrono::{DateTime, NaiveDate};
/// use pairgrowth_core::{Asset, RawObservation, normalize_series};
///
/// let t = |sec: i64| DateTime::from_timestamp(sec, 0).unwrap();
/// // Two quotes on 1970-01-02, one on 1970-01-01, out of order.
/// let raw = vec![
///     RawObservation::at(t(86_400 + 60), 2.0),
///     RawObservation::at(t(10), 1.0),
///     RawObservation::at(t(86_400 + 30), 3.0),
/// ];
/// let points = normalize_series(Asset::Btc, raw).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].date, NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
/// assert_eq!(points[1].price, 3.0);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::timeseries::normalize_series",
        skip_all,
        fields(asset = %asset),
    )
)]
pub fn normalize_series<I>(asset: Asset, raw: I) -> Result<Vec<PricePoint>, PairError>
where
    I: IntoIterator,
    I::Item: Into<RawObservation>,
{
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    #[cfg(feature = "tracing")]
    let mut seen: usize = 0;

    for obs in raw {
        let obs: RawObservation = obs.into();
        #[cfg(feature = "tracing")]
        {
            seen += 1;
        }
        match by_date.entry(obs.observed_at.utc_date()) {
            Entry::Vacant(v) => {
                v.insert(obs.price);
            }
            Entry::Occupied(mut o) => {
                if !obs.price.is_nan() {
                    o.insert(obs.price);
                }
            }
        }
    }

    if by_date.is_empty() {
        return Err(PairError::empty_series(asset));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(seen, kept = by_date.len(), "normalized daily series");

    Ok(by_date
        .into_iter()
        .map(|(date, price)| PricePoint::new(date, price))
        .collect())
}
