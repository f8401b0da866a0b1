//! Decoder for market-chart JSON documents.
//!
//! The fetch layer stores raw documents of the form
//! `{"prices": [[unix_ms, price], ...], ...}`; other top-level keys
//! (market caps, volumes) are ignored.

use serde::Deserialize;

use crate::{PairError, RawObservation};

#[derive(Debug, Deserialize)]
struct RawChart {
    prices: Option<Vec<(f64, f64)>>,
}

/// Price samples of a market-chart document.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketChart {
    /// `(unix_ms, price)` samples in document order.
    pub prices: Vec<(i64, f64)>,
}

impl MarketChart {
    /// Decode a market-chart document.
    ///
    /// # Errors
    /// - Returns `Err(PairError::Data)` if the text is not valid JSON or has no
    ///   `prices` array.
    ///
    /// ```
    /// use pairgrowth_core::payload::MarketChart;
    ///
    /// let chart = MarketChart::from_json(r#"{"prices": [[1577836800000, 7200.5]]}"#).unwrap();
    /// assert_eq!(chart.prices, vec![(1_577_836_800_000, 7200.5)]);
    /// assert!(MarketChart::from_json(r#"{"total_volumes": []}"#).is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, PairError> {
        let raw: RawChart = serde_json::from_str(text)
            .map_err(|e| PairError::Data(format!("malformed market chart: {e}")))?;
        let Some(prices) = raw.prices else {
            return Err(PairError::Data(
                "unexpected payload structure: missing 'prices'".into(),
            ));
        };
        #[allow(clippy::cast_possible_truncation)]
        let prices = prices
            .into_iter()
            .map(|(ts, price)| (ts as i64, price))
            .collect();
        Ok(Self { prices })
    }

    /// Convert the samples into raw observations.
    ///
    /// # Errors
    /// Returns `Err(PairError::Data)` if a timestamp is outside the representable range.
    pub fn into_observations(self) -> Result<Vec<RawObservation>, PairError> {
        self.prices
            .into_iter()
            .map(|(ms, price)| {
                RawObservation::at_millis(ms, price)
                    .ok_or_else(|| PairError::Data(format!("timestamp out of range: {ms}")))
            })
            .collect()
    }
}
