//! Mock price sources for CI-safe tests and examples.
//!
//! - [`MockSource`] serves deterministic fixture data without touching the network.
//! - [`DynamicMockSource`] defers every call to a [`DynamicMockController`],
//!   so tests can script failures, empty payloads, or custom series per asset.
use chrono::NaiveDate;
use pairgrowth_core::{Asset, MarketChart, PairError, PriceSource, RawObservation};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Fixture set served by a [`MockSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    /// Three years of synthetic daily history.
    ///
    /// BTC covers 2019-01-01..=2021-12-31 and XRP covers 2019-02-15..=2022-01-15.
    /// Every fifth day carries a superseded midnight quote before the 23:00
    /// close, and XRP has a single zero print.
    #[default]
    Generated,
    /// One week of 12-hourly samples decoded from canned market-chart
    /// documents. XRP starts one day after BTC.
    Chart,
}

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource {
    dataset: Dataset,
}

impl MockSource {
    /// Source serving [`Dataset::Generated`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_dataset(Dataset::Generated)
    }

    /// Source serving the given fixture set.
    #[must_use]
    pub const fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Fixture set this source serves.
    #[must_use]
    pub const fn dataset(&self) -> Dataset {
        self.dataset
    }

    /// Closing price of the generated fixture on `date`, for test oracles.
    #[must_use]
    pub fn generated_close(asset: Asset, date: NaiveDate) -> Option<f64> {
        fixtures::history::close_on(asset, date)
    }
}

impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "pairgrowth-mock"
    }

    fn daily_history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError> {
        match self.dataset {
            Dataset::Generated => Ok(fixtures::history::daily(asset)),
            Dataset::Chart => {
                MarketChart::from_json(fixtures::chart::document(asset))?.into_observations()
            }
        }
    }
}
