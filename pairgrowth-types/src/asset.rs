//! The two assets compared by the pipeline.

use serde::{Deserialize, Serialize};

/// One side of the comparison.
///
/// The pipeline is fixed to two series: BTC is always the denominator of the
/// ratio and XRP the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    /// Bitcoin.
    Btc,
    /// XRP.
    Xrp,
}

impl Asset {
    /// Market-data identifier of the coin (`bitcoin`, `ripple`).
    #[must_use]
    pub const fn coin_id(self) -> &'static str {
        match self {
            Self::Btc => "bitcoin",
            Self::Xrp => "ripple",
        }
    }

    /// Ticker used in human-readable output.
    #[must_use]
    pub const fn ticker(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Xrp => "XRP",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ticker())
    }
}
