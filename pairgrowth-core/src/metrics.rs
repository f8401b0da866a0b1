//! Derived metrics over a rebased series.
//!
//! Every function here is a pure transformation of a price column. Undefined
//! cells are `None`; nothing is back-filled or replaced with zero.

use crate::timeseries::infer::{estimate_period_days, period_years, rolling_periods};
use crate::timeseries::resample::is_month_end;
use crate::{AlignedRow, CompareConfig, Drawdown, MetricRow, MetricTable, RollingMetrics};

/// Compound annual growth rate between two prices `years` apart.
///
/// Returns `None` if either price is not strictly positive, if `years` is not
/// strictly positive, or if the result does not fit in an `f64`.
///
/// ```
/// use pairgrowth_core::calculate_cagr;
///
/// let r = calculate_cagr(100.0, 121.0, 2.0).unwrap();
/// assert!((r - 0.1).abs() < 1e-12);
/// assert_eq!(calculate_cagr(0.0, 121.0, 2.0), None);
/// ```
#[must_use]
pub fn calculate_cagr(start_price: f64, end_price: f64, years: f64) -> Option<f64> {
    if !(start_price > 0.0 && end_price > 0.0 && years > 0.0) {
        return None;
    }
    let cagr = (end_price / start_price).powf(1.0 / years) - 1.0;
    cagr.is_finite().then_some(cagr)
}

/// Each price divided by the first price; the first element is exactly `1.0`.
#[must_use]
pub fn compute_indexed(prices: &[f64]) -> Vec<f64> {
    let Some(&base) = prices.first() else {
        return Vec::new();
    };
    prices.iter().map(|&p| p / base).collect()
}

/// Change versus the previous element: `p[i] / p[i-1] - 1`, `None` at index 0.
#[must_use]
pub fn compute_returns(prices: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(prices.len());
    if !prices.is_empty() {
        out.push(None);
    }
    out.extend(prices.windows(2).map(|w| Some(w[1] / w[0] - 1.0)));
    out
}

/// Standardize prices with the population mean and standard deviation of the
/// whole slice, optionally on natural-log prices.
///
/// If every value is equal (or the standard deviation is within rounding of
/// zero relative to the mean) every element is `None`.
///
/// ```
/// use pairgrowth_core::compute_z_scores;
///
/// let z = compute_z_scores(&[1.0, 2.0, 3.0], false);
/// assert_eq!(z[1], Some(0.0));
/// assert!(compute_z_scores(&[5.0, 5.0], false).iter().all(Option::is_none));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_z_scores(prices: &[f64], use_log: bool) -> Vec<Option<f64>> {
    if prices.is_empty() {
        return Vec::new();
    }
    let values: Vec<f64> = if use_log {
        prices.iter().map(|p| p.ln()).collect()
    } else {
        prices.to_vec()
    };

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    // A flat series can leave a rounding-sized std behind.
    if values.iter().all(|v| *v == values[0]) || std <= f64::EPSILON * mean.abs() {
        return vec![None; values.len()];
    }
    values.iter().map(|v| Some((v - mean) / std)).collect()
}

/// Relative decline from the running maximum, computed left to right.
///
/// Every value is `<= 0` and exactly `0` at a new high.
///
/// ```
/// use pairgrowth_core::compute_drawdown;
///
/// let dd = compute_drawdown(&[100.0, 120.0, 90.0, 130.0]);
/// assert_eq!(dd, vec![0.0, 0.0, 90.0 / 120.0 - 1.0, 0.0]);
/// ```
#[must_use]
pub fn compute_drawdown(prices: &[f64]) -> Vec<f64> {
    let mut running_max = f64::NEG_INFINITY;
    prices
        .iter()
        .map(|&p| {
            running_max = running_max.max(p);
            p / running_max - 1.0
        })
        .collect()
}

/// Annualized growth over the trailing `periods` rows.
///
/// The first `periods` elements are `None`; a zero window yields all `None`.
#[must_use]
pub fn compute_rolling_cagr(prices: &[f64], periods: usize, years: f64) -> Vec<Option<f64>> {
    if periods == 0 {
        return vec![None; prices.len()];
    }
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            i.checked_sub(periods)
                .and_then(|j| calculate_cagr(prices[j], p, years))
        })
        .collect()
}

/// Mean of the trailing `window` values.
///
/// The first `window - 1` elements are `None`; a zero window yields all `None`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut out = vec![None; (window - 1).min(values.len())];
    out.extend(
        values
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );
    out
}

/// Rolling column set for both assets and the ratio.
struct RollingColumns {
    btc_cagr: Vec<Option<f64>>,
    xrp_cagr: Vec<Option<f64>>,
    ratio_mean: Vec<Option<f64>>,
}

impl RollingColumns {
    fn build(rows: &[AlignedRow], btc: &[f64], xrp: &[f64], ratio: &[f64], days: u32) -> Self {
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        let period_days = estimate_period_days(&dates);
        let periods = rolling_periods(days, period_days);
        let years = period_years(periods, period_days);

        #[cfg(feature = "tracing")]
        tracing::debug!(window_days = days, period_days, periods, years, "rolling window");

        Self {
            btc_cagr: compute_rolling_cagr(btc, periods, years),
            xrp_cagr: compute_rolling_cagr(xrp, periods, years),
            ratio_mean: compute_rolling_mean(ratio, periods),
        }
    }

    fn at(&self, i: usize) -> RollingMetrics {
        RollingMetrics {
            btc_cagr: self.btc_cagr[i],
            xrp_cagr: self.xrp_cagr[i],
            ratio_mean: self.ratio_mean[i],
        }
    }
}

/// Derive the metric table for a rebased series.
///
/// - Indexed levels and returns are relative to `rows[0]`.
/// - Z-scores use population statistics over all rows.
/// - Rolling columns are attached when `config.rolling_window()` is set; the
///   day window is converted to a row count using the median row spacing.
/// - Drawdown columns are attached when `config.include_drawdown` is set.
/// - `is_month_end` is set from the row date regardless of frequency.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::metrics::compute_metrics",
        skip_all,
        fields(rows = rows.len()),
    )
)]
#[must_use]
pub fn compute_metrics(rows: &[AlignedRow], config: &CompareConfig) -> MetricTable {
    let btc: Vec<f64> = rows.iter().map(|r| r.btc_price).collect();
    let xrp: Vec<f64> = rows.iter().map(|r| r.xrp_price).collect();
    let ratio: Vec<f64> = rows.iter().map(AlignedRow::ratio).collect();

    let btc_indexed = compute_indexed(&btc);
    let xrp_indexed = compute_indexed(&xrp);
    let btc_return = compute_returns(&btc);
    let xrp_return = compute_returns(&xrp);
    let btc_zscore = compute_z_scores(&btc, config.use_log_for_zscore);
    let xrp_zscore = compute_z_scores(&xrp, config.use_log_for_zscore);

    let rolling_window_days = config.rolling_window();
    let rolling = rolling_window_days
        .map(|days| RollingColumns::build(rows, &btc, &xrp, &ratio, days));
    let drawdown = config
        .include_drawdown
        .then(|| (compute_drawdown(&btc), compute_drawdown(&xrp)));

    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, r)| MetricRow {
            date: r.date,
            btc_price: r.btc_price,
            xrp_price: r.xrp_price,
            btc_indexed: btc_indexed[i],
            xrp_indexed: xrp_indexed[i],
            xrp_btc_ratio: ratio[i],
            btc_return: btc_return[i],
            xrp_return: xrp_return[i],
            btc_zscore: btc_zscore[i],
            xrp_zscore: xrp_zscore[i],
            is_month_end: is_month_end(r.date),
            rolling: rolling.as_ref().map(|c| c.at(i)),
            drawdown: drawdown.as_ref().map(|(b, x)| Drawdown {
                btc: b[i],
                xrp: x[i],
            }),
        })
        .collect();

    MetricTable {
        rows,
        rolling_window_days,
        include_drawdown: config.include_drawdown,
    }
}
