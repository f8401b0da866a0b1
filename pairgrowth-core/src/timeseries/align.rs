use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{AlignedRow, Coverage, PairError, PricePoint};

/// Inner-join BTC and XRP points on exact date equality.
///
/// - Only dates present in both inputs survive.
/// - Rows where either price is not strictly positive (or not finite) are dropped.
/// - Rows are returned sorted by date. Inputs are expected to be normalized;
///   if a date repeats, the later point wins.
///
/// # Errors
/// Returns `Err(PairError::NoOverlap)` if no row survives, carrying the date
/// coverage of both inputs.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::timeseries::align",
        skip_all,
        fields(btc_rows = btc.len(), xrp_rows = xrp.len()),
    )
)]
pub fn align(btc: &[PricePoint], xrp: &[PricePoint]) -> Result<Vec<AlignedRow>, PairError> {
    let xrp_by_date: BTreeMap<NaiveDate, f64> = xrp.iter().map(|p| (p.date, p.price)).collect();
    let btc_by_date: BTreeMap<NaiveDate, f64> = btc.iter().map(|p| (p.date, p.price)).collect();

    let rows: Vec<AlignedRow> = btc_by_date
        .into_iter()
        .filter_map(|(date, btc_price)| {
            xrp_by_date.get(&date).map(|&xrp_price| AlignedRow {
                date,
                btc_price,
                xrp_price,
            })
        })
        .filter(AlignedRow::is_positive)
        .collect();

    if rows.is_empty() {
        return Err(PairError::NoOverlap {
            btc: Coverage::of(btc),
            xrp: Coverage::of(xrp),
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(aligned = rows.len(), "aligned series");

    Ok(rows)
}

/// Inclusive date range covered by both series: from the later first date to
/// the earlier last date.
///
/// Returns `None` if either series is empty or the ranges do not intersect.
/// Useful for bounding a user-selected rebase date before running the pipeline.
#[must_use]
pub fn overlap_window(btc: &[PricePoint], xrp: &[PricePoint]) -> Option<(NaiveDate, NaiveDate)> {
    let btc_first = btc.iter().map(|p| p.date).min()?;
    let btc_last = btc.iter().map(|p| p.date).max()?;
    let xrp_first = xrp.iter().map(|p| p.date).min()?;
    let xrp_last = xrp.iter().map(|p| p.date).max()?;

    let start = btc_first.max(xrp_first);
    let end = btc_last.min(xrp_last);
    (start <= end).then_some((start, end))
}
