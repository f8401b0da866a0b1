mod helpers;

use std::sync::Arc;

use helpers::{FixedSource, d, daily};
use pairgrowth::{Asset, CompareConfig, Frequency, PairError, PairGrowth, Stage};
use pairgrowth_mock::{Dataset, MockSource};

fn mock() -> PairGrowth {
    PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap()
}

#[test]
fn build_requires_a_source() {
    let err = PairGrowth::builder().build().err().unwrap();
    assert!(matches!(err, PairError::InvalidArg(_)));
    assert_eq!(err.stage(), Stage::Config);
}

#[test]
fn builder_modifiers_fill_the_config() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .frequency(Frequency::Weekly)
        .rebase_date(Some(d(2020, 1, 1)))
        .use_log_for_zscore(true)
        .rolling_window_days(Some(90))
        .include_drawdown(true)
        .build()
        .unwrap();
    assert_eq!(
        *pg.config(),
        CompareConfig {
            frequency: Frequency::Weekly,
            rebase_date: Some(d(2020, 1, 1)),
            use_log_for_zscore: true,
            rolling_window_days: Some(90),
            include_drawdown: true,
        }
    );
    assert_eq!(pg.source_names(), vec!["pairgrowth-mock"]);
}

#[test]
fn config_replaces_previous_modifiers() {
    let cfg = CompareConfig {
        frequency: Frequency::Daily,
        ..CompareConfig::default()
    };
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .include_drawdown(true)
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(*pg.config(), cfg);
}

#[test]
fn default_run_is_monthly_over_the_overlap() {
    let out = mock().run().unwrap();
    assert_eq!(out.config.frequency, Frequency::Monthly);
    assert_eq!(out.summary.start_date, d(2019, 2, 28));
    assert_eq!(out.summary.end_date, d(2021, 12, 31));
    assert_eq!(out.table.rows[0].btc_indexed, 1.0);
    assert_eq!(out.table.rows[0].xrp_indexed, 1.0);
}

#[test]
fn overlap_reports_the_shared_range() {
    assert_eq!(
        mock().overlap().unwrap(),
        Some((d(2019, 2, 15), d(2021, 12, 31)))
    );
}

#[test]
fn rebase_inside_range_moves_the_start() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .rebase_date(Some(d(2020, 6, 15)))
        .build()
        .unwrap();
    let out = pg.run().unwrap();
    assert_eq!(out.summary.start_date, d(2020, 6, 30));
    assert_eq!(out.table.len(), 19);
}

#[test]
fn rebase_after_range_fails_at_rebase() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .rebase_date(Some(d(2023, 1, 1)))
        .build()
        .unwrap();
    let err = pg.run().unwrap_err();
    assert_eq!(err.stage(), Stage::Rebase);
    assert!(err.is_validation());
}

#[test]
fn rolling_and_drawdown_columns_on_weekly_rows() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::new()))
        .frequency(Frequency::Weekly)
        .rolling_window_days(Some(28))
        .include_drawdown(true)
        .build()
        .unwrap();
    let out = pg.run().unwrap();

    // 28 days on 7-day rows => 4 periods
    let rolling: Vec<_> = out.table.rows.iter().map(|r| r.rolling.unwrap()).collect();
    assert!(rolling[..4].iter().all(|m| m.btc_cagr.is_none()));
    assert!(rolling[4].btc_cagr.is_some());
    assert!(rolling[2].ratio_mean.is_none());
    assert!(rolling[3].ratio_mean.is_some());

    assert!(out.table.rows.iter().all(|r| r.drawdown.unwrap().btc <= 0.0));
    assert!(out.table.column_names().contains(&"xrp_cagr_rolling_28".to_string()));
}

#[test]
fn compare_runs_on_supplied_series() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(FixedSource::empty("unused")))
        .frequency(Frequency::Daily)
        .build()
        .unwrap();
    let btc = daily(d(2020, 1, 1), &[100.0, 105.0, 110.0, 115.0, 120.0, 125.0]);
    let xrp = daily(d(2020, 1, 3), &[0.20, 0.21, 0.22, 0.23, 0.24, 0.25]);

    let out = pg.compare(btc, xrp).unwrap();
    assert_eq!(out.table.len(), 4);
    assert_eq!(out.summary.start_date, d(2020, 1, 3));
    assert_eq!(out.summary.end_date, d(2020, 1, 6));
    assert_eq!(out.summary.ratio_start, 0.20 / 110.0);
}

#[test]
fn chart_dataset_runs_end_to_end() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(MockSource::with_dataset(Dataset::Chart)))
        .frequency(Frequency::Daily)
        .build()
        .unwrap();
    let out = pg.run().unwrap();
    assert_eq!(out.table.len(), 6);
    let text = out.report().to_string();
    assert!(text.contains("Start Date: 2020-01-02"));
    assert!(text.contains("Rolling Window: None"));
}

#[test]
fn empty_source_reports_empty_series() {
    let pg = PairGrowth::builder()
        .with_source(Arc::new(FixedSource::empty("empty")))
        .build()
        .unwrap();
    assert_eq!(pg.run().unwrap_err(), PairError::empty_series(Asset::Btc));
}
