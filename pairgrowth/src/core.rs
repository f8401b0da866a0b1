use std::sync::Arc;

use chrono::NaiveDate;
use pairgrowth_core::{PriceSource, compute, normalize_series, overlap_window};
use pairgrowth_types::{Asset, CompareConfig, Comparison, Frequency, PairError, RawObservation};

/// Runs the XRP-versus-BTC comparison against registered price sources.
pub struct PairGrowth {
    pub(crate) sources: Vec<Arc<dyn PriceSource>>,
    pub(crate) cfg: CompareConfig,
}

/// Builder for constructing a `PairGrowth` runner with custom configuration.
pub struct PairGrowthBuilder {
    sources: Vec<Arc<dyn PriceSource>>,
    cfg: CompareConfig,
}

impl Default for PairGrowthBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PairGrowthBuilder {
    /// Create a new builder with default comparison settings.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; you must register at least one via [`with_source`](Self::with_source).
    /// - Defaults: monthly frequency, no rebase, z-scores on raw prices, no
    ///   rolling window, no drawdown columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: CompareConfig::default(),
        }
    }

    /// Register a price source.
    ///
    /// Behavior and trade-offs:
    /// - Sources are tried in registration order for each asset; the first one
    ///   returning a non-empty history wins.
    /// - Duplicates are not deduplicated; avoid registering the same source twice.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the whole comparison configuration.
    #[must_use]
    pub const fn config(mut self, cfg: CompareConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the output frequency.
    ///
    /// Behavior and trade-offs:
    /// - `Daily` keeps every aligned date; most detail, noisiest metrics.
    /// - `Weekly` and `Monthly` keep the last observation of each period,
    ///   labelled with the period end. A partial trailing period still gets the
    ///   period-end label.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.cfg.frequency = frequency;
        self
    }

    /// Start the comparison window at `date` (inclusive).
    ///
    /// Behavior and trade-offs:
    /// - Rows before the first period on or after `date` are dropped and every
    ///   indexed level is re-based to that row.
    /// - A date after the last available period fails the run with
    ///   `RebaseOutOfRange`.
    #[must_use]
    pub const fn rebase_date(mut self, date: Option<NaiveDate>) -> Self {
        self.cfg.rebase_date = date;
        self
    }

    /// Compute z-scores on natural-log prices instead of raw prices.
    #[must_use]
    pub const fn use_log_for_zscore(mut self, yes: bool) -> Self {
        self.cfg.use_log_for_zscore = yes;
        self
    }

    /// Attach rolling CAGR and rolling ratio columns over `days` calendar days.
    ///
    /// Behavior and trade-offs:
    /// - The window is converted to a row count using the median row spacing;
    ///   a window shorter than one period still spans one row.
    /// - `None` or `Some(0)` disables the rolling columns.
    #[must_use]
    pub const fn rolling_window_days(mut self, days: Option<u32>) -> Self {
        self.cfg.rolling_window_days = days;
        self
    }

    /// Attach drawdown-from-peak columns for both assets.
    #[must_use]
    pub const fn include_drawdown(mut self, yes: bool) -> Self {
        self.cfg.include_drawdown = yes;
        self
    }

    /// Build the `PairGrowth` runner.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered via [`with_source`](Self::with_source).
    pub fn build(self) -> Result<PairGrowth, PairError> {
        if self.sources.is_empty() {
            return Err(PairError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        Ok(PairGrowth {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Attribute a source failure to the source that raised it.
///
/// Pipeline validation errors and already-tagged failures pass through unchanged.
pub fn tag_err(source_name: &str, e: PairError) -> PairError {
    match e {
        e @ (PairError::Source { .. } | PairError::AllSourcesFailed(_)) => e,
        e if e.is_validation() => e,
        other => PairError::source(source_name, other.to_string()),
    }
}

impl PairGrowth {
    /// Start building a new `PairGrowth` instance.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pairgrowth::{Frequency, PairGrowth};
    /// use pairgrowth_mock::MockSource;
    ///
    /// let pg = PairGrowth::builder()
    ///     .with_source(Arc::new(MockSource::new()))
    ///     .frequency(Frequency::Weekly)
    ///     .include_drawdown(true)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(pg.config().frequency, Frequency::Weekly);
    /// ```
    #[must_use]
    pub fn builder() -> PairGrowthBuilder {
        PairGrowthBuilder::new()
    }

    /// Active comparison configuration.
    #[must_use]
    pub const fn config(&self) -> &CompareConfig {
        &self.cfg
    }

    /// Names of the registered sources in priority order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetch the raw daily history of `asset` from the registered sources.
    ///
    /// Behavior:
    /// - Sources are tried in registration order; the first non-empty history wins.
    /// - If some source answered with an empty history and none had data, the
    ///   empty history is returned and the pipeline reports `EmptySeries`.
    /// - If every source failed, a single failure is returned as-is and several
    ///   are wrapped in `AllSourcesFailed`.
    ///
    /// # Errors
    /// Returns the tagged source failure(s) when no source could answer.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pairgrowth::core::history",
            skip_all,
            fields(asset = %asset, sources = self.sources.len()),
        )
    )]
    pub fn history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError> {
        let mut errors: Vec<PairError> = Vec::new();
        let mut answered_empty = false;

        for source in &self.sources {
            match source.daily_history(asset) {
                Ok(obs) if !obs.is_empty() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(source = source.name(), rows = obs.len(), "history fetched");
                    return Ok(obs);
                }
                Ok(_) => answered_empty = true,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(source = source.name(), error = %e, "source failed");
                    errors.push(tag_err(source.name(), e));
                }
            }
        }

        if answered_empty || errors.is_empty() {
            return Ok(Vec::new());
        }
        if errors.len() == 1 {
            return Err(errors.remove(0));
        }
        Err(PairError::AllSourcesFailed(errors))
    }

    /// Fetch both assets and run the full comparison with the configured settings.
    ///
    /// # Errors
    /// Returns a source failure from [`history`](Self::history) or the first
    /// pipeline stage error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pairgrowth::core::run",
            skip_all,
            fields(frequency = %self.cfg.frequency),
        )
    )]
    pub fn run(&self) -> Result<Comparison, PairError> {
        let btc = self.history(Asset::Btc)?;
        let xrp = self.history(Asset::Xrp)?;
        compute(btc, xrp, &self.cfg)
    }

    /// Run the comparison on caller-supplied series with the configured settings.
    ///
    /// # Errors
    /// Returns the first pipeline stage error.
    pub fn compare<B, X>(&self, btc: B, xrp: X) -> Result<Comparison, PairError>
    where
        B: IntoIterator,
        B::Item: Into<RawObservation>,
        X: IntoIterator,
        X::Item: Into<RawObservation>,
    {
        compute(btc, xrp, &self.cfg)
    }

    /// First and last date covered by both normalized series, before alignment
    /// and resampling.
    ///
    /// Returns `Ok(None)` when the series do not overlap.
    ///
    /// # Errors
    /// Returns a source failure or `EmptySeries` if an asset has no history.
    pub fn overlap(&self) -> Result<Option<(NaiveDate, NaiveDate)>, PairError> {
        let btc = normalize_series(Asset::Btc, self.history(Asset::Btc)?)?;
        let xrp = normalize_series(Asset::Xrp, self.history(Asset::Xrp)?)?;
        Ok(overlap_window(&btc, &xrp))
    }
}
