use crate::{Asset, PairError, RawObservation};

/// A provider of full daily price history for the compared assets.
///
/// Implementations own retrieval and caching; the pipeline only sees the
/// returned observations. Calls are synchronous.
pub trait PriceSource: Send + Sync {
    /// A stable identifier used when tagging failures (e.g. "pairgrowth-mock").
    fn name(&self) -> &'static str;

    /// Fetch every available observation for `asset`, in any order and with
    /// any number of entries per day.
    ///
    /// # Errors
    /// Returns an error if the source cannot deliver the series.
    fn daily_history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError>;
}
