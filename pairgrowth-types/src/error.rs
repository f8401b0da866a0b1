use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asset::Asset;
use crate::config::Frequency;
use crate::series::Coverage;

/// Pipeline stage that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Fetching raw observations from a price source.
    Source,
    /// Coercing raw observations into one price per UTC date.
    Normalize,
    /// Inner-joining the two normalized series.
    Align,
    /// Downsampling the aligned series to the requested frequency.
    Resample,
    /// Truncating the resampled series at the rebase date.
    Rebase,
    /// Configuration or argument validation outside the data path.
    Config,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Source => "source",
            Self::Normalize => "normalize",
            Self::Align => "align",
            Self::Resample => "resample",
            Self::Rebase => "rebase",
            Self::Config => "config",
        };
        f.write_str(s)
    }
}

/// Unified error type for the pairgrowth workspace.
///
/// The first four variants are the data-validation failures of the pipeline;
/// each one stops the run before any partial table is produced. The rest
/// cover malformed payloads, invalid arguments, and tagged source failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum PairError {
    /// An input series carried no observations.
    #[error("empty series: no observations for {asset}")]
    EmptySeries {
        /// Asset whose series was empty.
        asset: Asset,
    },

    /// The two series share no date on which both prices are positive.
    #[error("no overlapping positive price data between assets (btc: {btc}, xrp: {xrp})")]
    NoOverlap {
        /// Date coverage of the normalized BTC series.
        btc: Coverage,
        /// Date coverage of the normalized XRP series.
        xrp: Coverage,
    },

    /// Resampling left no complete period.
    #[error("resampled data is empty after cleaning (frequency: {frequency})")]
    EmptyAfterResample {
        /// Frequency that was requested.
        frequency: Frequency,
    },

    /// The rebase date lies after the last available period.
    #[error("rebase date {rebase_date} is after available data range (last: {last_date})")]
    RebaseOutOfRange {
        /// Requested inclusive lower bound.
        rebase_date: NaiveDate,
        /// Last date present in the resampled series.
        last_date: NaiveDate,
    },

    /// Issues with a decoded payload (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A price source failed to deliver a series.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Every registered source failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<PairError>),
}

impl PairError {
    /// Helper: build an `EmptySeries` error for an asset.
    #[must_use]
    pub const fn empty_series(asset: Asset) -> Self {
        Self::EmptySeries { asset }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Stage of the pipeline that raised this error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::EmptySeries { .. } | Self::Data(_) => Stage::Normalize,
            Self::NoOverlap { .. } => Stage::Align,
            Self::EmptyAfterResample { .. } => Stage::Resample,
            Self::RebaseOutOfRange { .. } => Stage::Rebase,
            Self::InvalidArg(_) => Stage::Config,
            Self::Source { .. } | Self::AllSourcesFailed(_) => Stage::Source,
        }
    }

    /// Returns true for the data-validation failures a caller should present
    /// to the user as "adjust the inputs" rather than as a malfunction.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries { .. }
                | Self::NoOverlap { .. }
                | Self::EmptyAfterResample { .. }
                | Self::RebaseOutOfRange { .. }
        )
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
