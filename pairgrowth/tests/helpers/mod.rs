// Re-export helpers so tests can `use helpers::*;`
use chrono::NaiveDate;
use pairgrowth::{Asset, PairError, PriceSource, RawObservation};

/// Construct a `NaiveDate` from components for readability in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Consecutive daily observations starting at `start`.
pub fn daily(start: NaiveDate, prices: &[f64]) -> Vec<RawObservation> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let date = start
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap();
            RawObservation::on(date, p)
        })
        .collect()
}

/// A source answering every asset with a fixed outcome.
pub struct FixedSource {
    pub name: &'static str,
    pub btc: Result<Vec<RawObservation>, PairError>,
    pub xrp: Result<Vec<RawObservation>, PairError>,
}

impl FixedSource {
    pub fn failing(name: &'static str, err: PairError) -> Self {
        Self {
            name,
            btc: Err(err.clone()),
            xrp: Err(err),
        }
    }

    #[allow(dead_code)]
    pub const fn empty(name: &'static str) -> Self {
        Self {
            name,
            btc: Ok(Vec::new()),
            xrp: Ok(Vec::new()),
        }
    }
}

impl PriceSource for FixedSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn daily_history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError> {
        match asset {
            Asset::Btc => self.btc.clone(),
            Asset::Xrp => self.xrp.clone(),
        }
    }
}
