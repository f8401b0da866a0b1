use chrono::{DateTime, NaiveDate, Utc};
use pairgrowth_core::{
    Asset, CompareConfig, Frequency, PairError, PricePoint, RawObservation, Stage, compute,
};

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, m, day).unwrap()
}

fn points(month: u32, days: std::ops::RangeInclusive<u32>, prices: &[f64]) -> Vec<PricePoint> {
    days.zip(prices)
        .map(|(day, &p)| PricePoint::new(d(month, day), p))
        .collect()
}

fn shifted_pair() -> (Vec<PricePoint>, Vec<PricePoint>) {
    (
        points(1, 1..=6, &[100.0, 105.0, 110.0, 115.0, 120.0, 125.0]),
        points(1, 3..=8, &[0.20, 0.21, 0.22, 0.23, 0.24, 0.25]),
    )
}

fn daily() -> CompareConfig {
    CompareConfig {
        frequency: Frequency::Daily,
        ..CompareConfig::default()
    }
}

#[test]
fn daily_overlap_produces_four_rows() {
    let (btc, xrp) = shifted_pair();
    let out = compute(btc, xrp, &daily()).unwrap();

    let dates: Vec<NaiveDate> = out.table.rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d(1, 3), d(1, 4), d(1, 5), d(1, 6)]);

    let first = out.table.first().unwrap();
    assert_eq!(first.btc_indexed, 1.0);
    assert_eq!(first.xrp_indexed, 1.0);
    assert_eq!(first.xrp_btc_ratio, 0.20 / 110.0);
    assert_eq!(first.btc_return, None);

    let last = out.table.last().unwrap();
    assert_eq!(last.btc_indexed, 125.0 / 110.0);
    assert_eq!(last.xrp_indexed, 0.23 / 0.20);

    assert_eq!(out.summary.start_date, d(1, 3));
    assert_eq!(out.summary.end_date, d(1, 6));
    assert_eq!(out.summary.span_years, 3.0 / 365.25);
    assert_eq!(out.summary.ratio_end, 0.23 / 125.0);
    assert!(out.summary.btc_cagr.unwrap() > 0.0);
    assert_eq!(out.config, daily());
}

#[test]
fn flat_xrp_leg_has_no_z_scores() {
    let btc: Vec<PricePoint> = (1..=10)
        .map(|day| PricePoint::new(d(1, day), 100.0 + f64::from(day)))
        .collect();
    let xrp: Vec<PricePoint> = (1..=10).map(|day| PricePoint::new(d(1, day), 0.1)).collect();
    let out = compute(btc, xrp, &daily()).unwrap();

    assert_eq!(out.table.len(), 10);
    assert!(out.table.rows.iter().all(|r| r.xrp_zscore.is_none()));
    assert!(out.table.rows.iter().all(|r| r.btc_zscore.is_some()));
}

#[test]
fn rebase_to_first_date_is_a_no_op() {
    let (btc, xrp) = shifted_pair();
    let plain = compute(btc.clone(), xrp.clone(), &daily()).unwrap();
    let cfg = CompareConfig {
        rebase_date: Some(d(1, 3)),
        ..daily()
    };
    let rebased = compute(btc, xrp, &cfg).unwrap();
    assert_eq!(plain.table, rebased.table);
    assert_eq!(plain.summary, rebased.summary);
}

#[test]
fn rebase_moves_the_index_base() {
    let (btc, xrp) = shifted_pair();
    let cfg = CompareConfig {
        rebase_date: Some(d(1, 5)),
        ..daily()
    };
    let out = compute(btc, xrp, &cfg).unwrap();
    assert_eq!(out.table.len(), 2);
    assert_eq!(out.table.rows[0].date, d(1, 5));
    assert_eq!(out.table.rows[0].btc_indexed, 1.0);
    assert_eq!(out.table.rows[1].btc_indexed, 125.0 / 120.0);
}

#[test]
fn rebase_between_rows_starts_at_next_row() {
    let btc = vec![PricePoint::new(d(1, 1), 1.0), PricePoint::new(d(1, 10), 2.0)];
    let xrp = btc.clone();
    let cfg = CompareConfig {
        rebase_date: Some(d(1, 5)),
        ..daily()
    };
    let out = compute(btc, xrp, &cfg).unwrap();
    assert_eq!(out.summary.start_date, d(1, 10));
    assert_eq!(out.summary.span_years, 0.0);
    assert_eq!(out.summary.btc_cagr, Some(0.0));
}

#[test]
fn rebase_after_last_row_is_rejected() {
    let (btc, xrp) = shifted_pair();
    let cfg = CompareConfig {
        rebase_date: Some(d(2, 1)),
        ..daily()
    };
    let err = compute(btc, xrp, &cfg).unwrap_err();
    assert_eq!(
        err,
        PairError::RebaseOutOfRange {
            rebase_date: d(2, 1),
            last_date: d(1, 6),
        }
    );
    assert_eq!(err.stage(), Stage::Rebase);
}

#[test]
fn monthly_default_uses_month_end_labels() {
    let btc: Vec<RawObservation> = (1..=90)
        .map(|n| {
            let date = NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(n - 1))
                .unwrap();
            RawObservation::on(date, 100.0 + n as f64)
        })
        .collect();
    let xrp: Vec<RawObservation> = btc
        .iter()
        .map(|o| RawObservation { price: o.price / 100.0, ..*o })
        .collect();

    let out = compute(btc, xrp, &CompareConfig::default()).unwrap();
    let dates: Vec<NaiveDate> = out.table.rows.iter().map(|r| r.date).collect();
    let d21 = |m, day| NaiveDate::from_ymd_opt(2021, m, day).unwrap();
    assert_eq!(dates, vec![d21(1, 31), d21(2, 28), d21(3, 31)]);
    assert!(out.table.rows.iter().all(|r| r.is_month_end));
    // Last observation of March is day 90
    assert_eq!(out.table.rows[2].btc_price, 190.0);
}

#[test]
fn stage_errors_surface_unchanged() {
    let (btc, xrp) = shifted_pair();

    let err = compute(Vec::<PricePoint>::new(), xrp.clone(), &daily()).unwrap_err();
    assert_eq!(err, PairError::empty_series(Asset::Btc));
    assert_eq!(err.stage(), Stage::Normalize);

    let err = compute(btc.clone(), Vec::<PricePoint>::new(), &daily()).unwrap_err();
    assert_eq!(err, PairError::empty_series(Asset::Xrp));

    let late = points(6, 1..=2, &[0.3, 0.4]);
    let err = compute(btc, late, &daily()).unwrap_err();
    assert!(matches!(err, PairError::NoOverlap { .. }));
    assert_eq!(err.stage(), Stage::Align);
    assert!(err.is_validation());
}

#[test]
fn raw_timestamps_collapse_to_days() {
    let ts = |s: &str| {
        DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc)
    };
    let btc = vec![
        RawObservation::at(ts("2020-01-01T00:00:00Z"), 100.0),
        RawObservation::at(ts("2020-01-01T18:00:00Z"), 101.0),
        RawObservation::at(ts("2020-01-02T00:00:00Z"), 102.0),
    ];
    let xrp = vec![
        RawObservation::at(ts("2020-01-01T00:00:00Z"), 0.2),
        RawObservation::at(ts("2020-01-02T00:00:00Z"), 0.3),
    ];
    let out = compute(btc, xrp, &daily()).unwrap();
    assert_eq!(out.table.len(), 2);
    assert_eq!(out.summary.btc_start_price, 101.0);
}

#[test]
fn summary_report_renders_headline() {
    let (btc, xrp) = shifted_pair();
    let cfg = CompareConfig {
        rolling_window_days: Some(2),
        use_log_for_zscore: true,
        ..daily()
    };
    let out = compute(btc, xrp, &cfg).unwrap();
    let text = out.report().to_string();
    assert!(text.starts_with("XRP vs BTC Summary\n"));
    assert!(text.contains("Start Date: 2020-01-03"));
    assert!(text.contains("End Date: 2020-01-06"));
    assert!(text.contains("Frequency: Daily"));
    assert!(text.contains("Rolling Window: 2"));
    assert!(text.contains("Z-Scores via Log Prices: Yes"));
}
