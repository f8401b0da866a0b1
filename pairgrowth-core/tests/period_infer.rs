use chrono::{Days, NaiveDate};
use pairgrowth_core::{DAYS_PER_YEAR, estimate_period_days, period_years, rolling_periods};
use proptest::prelude::*;

fn dates_every(step: u64, count: u64) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    (0..count)
        .map(|i| start.checked_add_days(Days::new(i * step)).unwrap())
        .collect()
}

#[test]
fn regular_spacing_is_recovered() {
    assert_eq!(estimate_period_days(&dates_every(1, 10)), 1.0);
    assert_eq!(estimate_period_days(&dates_every(7, 10)), 7.0);
}

#[test]
fn even_count_of_deltas_averages_middle_pair() {
    // Deltas 1, 3 => 2.0
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let dates = [
        start,
        start.checked_add_days(Days::new(1)).unwrap(),
        start.checked_add_days(Days::new(4)).unwrap(),
    ];
    assert_eq!(estimate_period_days(&dates), 2.0);
}

#[test]
fn short_series_defaults_to_one_day() {
    assert_eq!(estimate_period_days(&[]), 1.0);
    assert_eq!(estimate_period_days(&dates_every(30, 1)), 1.0);
}

#[test]
fn monthly_window_conversion() {
    // 365 days on ~30 day rows => 12 periods
    assert_eq!(rolling_periods(365, 30.0), 12);
    assert_eq!(rolling_periods(365, 7.0), 52);
    assert!((period_years(12, 30.0) - 360.0 / DAYS_PER_YEAR).abs() < 1e-12);
}

proptest! {
    #[test]
    fn estimate_ignores_outliers(step in 1u64..40, count in 5u64..60) {
        let mut dates = dates_every(step, count);
        // One large gap at the end does not move the median
        let last = *dates.last().unwrap();
        dates.push(last.checked_add_days(Days::new(step * 50)).unwrap());
        prop_assert_eq!(estimate_period_days(&dates), step as f64);
    }

    #[test]
    fn rolling_periods_at_least_one(window in 0u32..5000, period in 0.5f64..400.0) {
        prop_assert!(rolling_periods(window, period) >= 1);
    }

    #[test]
    fn daily_rows_map_window_to_days(window in 1u32..5000) {
        prop_assert_eq!(rolling_periods(window, 1.0), window as usize);
    }
}
