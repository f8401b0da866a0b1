use chrono::NaiveDate;

use crate::{AlignedRow, PairError};

/// Drop every row dated strictly before `rebase_date`.
///
/// `None` keeps the series as-is, so the window starts at the first row.
/// Rebasing to the first date is a no-op. Input rows must be sorted by date,
/// as produced by [`resample`](crate::resample).
///
/// # Errors
/// - Returns `Err(PairError::RebaseOutOfRange)` if `rebase_date` is after the last row.
/// - Returns `Err(PairError::InvalidArg)` if `rows` is empty.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::timeseries::rebase",
        skip_all,
        fields(rows = rows.len(), rebase_date = ?rebase_date),
    )
)]
pub fn rebase(
    mut rows: Vec<AlignedRow>,
    rebase_date: Option<NaiveDate>,
) -> Result<Vec<AlignedRow>, PairError> {
    let Some(last_date) = rows.last().map(|r| r.date) else {
        return Err(PairError::InvalidArg("cannot rebase an empty series".into()));
    };
    let Some(rebase_date) = rebase_date else {
        return Ok(rows);
    };
    if rebase_date > last_date {
        return Err(PairError::RebaseOutOfRange {
            rebase_date,
            last_date,
        });
    }

    let start = rows.partition_point(|r| r.date < rebase_date);
    rows.drain(..start);

    #[cfg(feature = "tracing")]
    tracing::debug!(dropped = start, kept = rows.len(), "rebased series");

    Ok(rows)
}
