//! Price observations and aligned rows flowing between pipeline stages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// When a raw observation was taken: either an instant or an already-dated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservedAt {
    /// Instant in UTC; the time of day is discarded during normalization.
    Timestamp(DateTime<Utc>),
    /// Calendar date already in UTC.
    Date(NaiveDate),
}

impl ObservedAt {
    /// UTC calendar date of the observation.
    #[must_use]
    pub fn utc_date(&self) -> NaiveDate {
        match *self {
            Self::Timestamp(ts) => ts.date_naive(),
            Self::Date(d) => d,
        }
    }
}

/// A single price as delivered by a source, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Timestamp or date of the observation.
    pub observed_at: ObservedAt,
    /// Quoted price.
    pub price: f64,
}

impl RawObservation {
    /// Observation taken at a UTC instant.
    #[must_use]
    pub const fn at(ts: DateTime<Utc>, price: f64) -> Self {
        Self {
            observed_at: ObservedAt::Timestamp(ts),
            price,
        }
    }

    /// Observation keyed by a calendar date.
    #[must_use]
    pub const fn on(date: NaiveDate, price: f64) -> Self {
        Self {
            observed_at: ObservedAt::Date(date),
            price,
        }
    }

    /// Observation keyed by a unix timestamp in milliseconds.
    ///
    /// Returns `None` when the timestamp is outside chrono's representable range.
    #[must_use]
    pub fn at_millis(ms: i64, price: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(|ts| Self::at(ts, price))
    }
}

/// One price per UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// UTC calendar date.
    pub date: NaiveDate,
    /// Price on that date.
    pub price: f64,
}

impl PricePoint {
    /// Build a point from a date and price.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

impl From<PricePoint> for RawObservation {
    fn from(p: PricePoint) -> Self {
        Self::on(p.date, p.price)
    }
}

/// A date present in both series with both prices strictly positive.
///
/// Resampled rows reuse this shape with `date` set to the period end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Observation date, or period end after resampling.
    pub date: NaiveDate,
    /// BTC price in the quote currency.
    pub btc_price: f64,
    /// XRP price in the quote currency.
    pub xrp_price: f64,
}

impl AlignedRow {
    /// XRP price expressed in BTC.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.xrp_price / self.btc_price
    }

    /// True when both prices are finite and strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        is_positive_price(self.btc_price) && is_positive_price(self.xrp_price)
    }
}

/// Usable price: finite and strictly greater than zero.
#[must_use]
pub fn is_positive_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Date span and row count of a normalized series, carried in error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coverage {
    /// First date, if any rows exist.
    pub first: Option<NaiveDate>,
    /// Last date, if any rows exist.
    pub last: Option<NaiveDate>,
    /// Number of rows.
    pub rows: usize,
}

impl Coverage {
    /// Coverage of a date-ordered series.
    #[must_use]
    pub fn of(points: &[PricePoint]) -> Self {
        Self {
            first: points.first().map(|p| p.date),
            last: points.last().map(|p| p.date),
            rows: points.len(),
        }
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.first, self.last) {
            (Some(first), Some(last)) => write!(f, "{first}..={last}, {} rows", self.rows),
            _ => f.write_str("no rows"),
        }
    }
}
