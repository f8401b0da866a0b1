use crate::metrics::calculate_cagr;
use crate::timeseries::infer::DAYS_PER_YEAR;
use crate::{MetricRow, PairError, Summary};

/// Floor applied to the span before annualizing, so a single-row window does
/// not divide by zero.
pub const MIN_SPAN_YEARS: f64 = 1e-9;

/// Reduce the final metric rows to headline statistics.
///
/// `span_years` reports the raw first-to-last distance in years; the CAGR
/// figures annualize over `max(span_years, MIN_SPAN_YEARS)`.
///
/// # Errors
/// Returns `Err(PairError::InvalidArg)` if `rows` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn summarize(rows: &[MetricRow]) -> Result<Summary, PairError> {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Err(PairError::InvalidArg(
            "cannot summarize an empty series".into(),
        ));
    };

    let span_days = (last.date - first.date).num_days();
    let span_years = span_days as f64 / DAYS_PER_YEAR;
    let cagr_years = span_years.max(MIN_SPAN_YEARS);

    Ok(Summary {
        start_date: first.date,
        end_date: last.date,
        span_years,
        btc_start_price: first.btc_price,
        btc_end_price: last.btc_price,
        xrp_start_price: first.xrp_price,
        xrp_end_price: last.xrp_price,
        btc_cagr: calculate_cagr(first.btc_price, last.btc_price, cagr_years),
        xrp_cagr: calculate_cagr(first.xrp_price, last.xrp_price, cagr_years),
        ratio_start: first.xrp_btc_ratio,
        ratio_end: last.xrp_btc_ratio,
    })
}
