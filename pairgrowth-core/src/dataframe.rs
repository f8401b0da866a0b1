//! Polars export of metric tables.

use polars::prelude::{Column, DataFrame, PolarsResult};

use crate::{ColumnValues, MetricTable};

/// Conversion of a record collection into a Polars `DataFrame`.
pub trait ToDataFrame {
    /// Build a `DataFrame` whose columns follow the table's column names.
    ///
    /// # Errors
    /// Returns a Polars error if the columns cannot be assembled.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for MetricTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::new();
        for name in self.column_names() {
            let Some(values) = self.column(&name) else {
                continue;
            };
            let col = match values {
                ColumnValues::Dates(v) => Column::new(name.as_str().into(), v),
                ColumnValues::Floats(v) => Column::new(name.as_str().into(), v),
                ColumnValues::Flags(v) => Column::new(name.as_str().into(), v),
            };
            columns.push(col);
        }
        DataFrame::new(columns)
    }
}
