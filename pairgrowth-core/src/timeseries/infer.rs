use chrono::NaiveDate;

/// Days per year used for every annualization in the pipeline.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Estimate the representative spacing (in days) of a date-sorted series.
///
/// Uses the median of adjacent date deltas; with an even number of deltas the
/// two middle values are averaged. Returns `1.0` when fewer than two dates are
/// present, so a single-row window behaves like a daily one.
///
/// ```
/// use chrono::NaiveDate;
/// use pairgrowth_core::estimate_period_days;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2021, m, day).unwrap();
/// // Month ends: deltas 28, 31, 30 => median 30
/// let dates = [d(1, 31), d(2, 28), d(3, 31), d(4, 30)];
/// assert_eq!(estimate_period_days(&dates), 30.0);
/// assert_eq!(estimate_period_days(&dates[..1]), 1.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_period_days(dates: &[NaiveDate]) -> f64 {
    if dates.len() < 2 {
        return 1.0;
    }

    let mut deltas: Vec<i64> = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .collect();
    deltas.sort_unstable();

    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        deltas[mid] as f64
    } else {
        (deltas[mid - 1] + deltas[mid]) as f64 / 2.0
    }
}

/// Number of rows spanned by a rolling window of `window_days` calendar days
/// on a series whose rows are `period_days` apart.
///
/// Rounds half to even and never returns less than one row, so a window
/// shorter than the period length degrades to a one-period window.
///
/// ```
/// use pairgrowth_core::rolling_periods;
///
/// assert_eq!(rolling_periods(90, 1.0), 90);
/// assert_eq!(rolling_periods(90, 30.0), 3);
/// assert_eq!(rolling_periods(7, 30.0), 1);
/// // 45 / 30 = 1.5 rounds to the even neighbour
/// assert_eq!(rolling_periods(45, 30.0), 2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rolling_periods(window_days: u32, period_days: f64) -> usize {
    let periods = (f64::from(window_days) / period_days.max(1e-9)).round_ties_even();
    (periods as usize).max(1)
}

/// Length in years covered by `periods` rows spaced `period_days` apart.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn period_years(periods: usize, period_days: f64) -> f64 {
    periods as f64 * period_days / DAYS_PER_YEAR
}
