use chrono::NaiveDate;
use pairgrowth_types::{Asset, Coverage, Frequency, PairError, Stage};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn validation_errors_roundtrip_and_keep_context() {
    let errors = vec![
        PairError::empty_series(Asset::Xrp),
        PairError::NoOverlap {
            btc: Coverage {
                first: Some(d(2020, 1, 1)),
                last: Some(d(2020, 1, 6)),
                rows: 6,
            },
            xrp: Coverage {
                first: Some(d(2021, 1, 1)),
                last: Some(d(2021, 1, 3)),
                rows: 3,
            },
        },
        PairError::EmptyAfterResample {
            frequency: Frequency::Weekly,
        },
        PairError::RebaseOutOfRange {
            rebase_date: d(2030, 1, 1),
            last_date: d(2024, 12, 31),
        },
    ];

    for e in errors {
        assert!(e.is_validation());
        let json = serde_json::to_string(&e).expect("serialize error");
        let de: PairError = serde_json::from_str(&json).expect("deserialize error");
        assert_eq!(de, e);
    }
}

#[test]
fn stages_identify_the_failing_step() {
    assert_eq!(PairError::empty_series(Asset::Btc).stage(), Stage::Normalize);
    assert_eq!(
        PairError::EmptyAfterResample {
            frequency: Frequency::Monthly
        }
        .stage(),
        Stage::Resample
    );
    assert_eq!(
        PairError::RebaseOutOfRange {
            rebase_date: d(2030, 1, 1),
            last_date: d(2024, 12, 31),
        }
        .stage(),
        Stage::Rebase
    );
    let src = PairError::source("fixture", "offline");
    assert_eq!(src.stage(), Stage::Source);
    assert!(!src.is_validation());
}

#[test]
fn messages_name_the_asset_and_dates() {
    let msg = PairError::empty_series(Asset::Xrp).to_string();
    assert!(msg.contains("XRP"), "{msg}");

    let msg = PairError::RebaseOutOfRange {
        rebase_date: d(2030, 1, 1),
        last_date: d(2024, 12, 31),
    }
    .to_string();
    assert!(msg.contains("2030-01-01") && msg.contains("2024-12-31"), "{msg}");
}

#[test]
fn nested_source_failures_flatten() {
    let nested = PairError::AllSourcesFailed(vec![
        PairError::source("a", "timeout"),
        PairError::AllSourcesFailed(vec![PairError::source("b", "http 500")]),
    ]);
    assert_eq!(nested.stage(), Stage::Source);
    assert!(!nested.is_validation());

    let json = serde_json::to_string(&nested).unwrap();
    let de: PairError = serde_json::from_str(&json).unwrap();
    assert_eq!(de, nested);

    let flat = nested.flatten();
    assert_eq!(
        flat,
        vec![PairError::source("a", "timeout"), PairError::source("b", "http 500")]
    );
}
