//! Pairgrowth-specific records and configuration primitives shared by the
//! pipeline, the fixture source, and the facade.
#![warn(missing_docs)]

mod asset;
mod config;
mod error;
mod reports;
mod series;

pub use asset::Asset;
pub use config::{CompareConfig, Frequency};
pub use error::{PairError, Stage};
pub use reports::{
    ColumnValues, Comparison, Drawdown, MetricRow, MetricTable, RollingMetrics, Summary,
    SummaryReport,
};
pub use series::{
    AlignedRow, Coverage, ObservedAt, PricePoint, RawObservation, is_positive_price,
};
