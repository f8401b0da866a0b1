use chrono::{Datelike, Days, NaiveDate};

use crate::{AlignedRow, Frequency, PairError};

/// Sunday closing the Monday-to-Sunday week that contains `date`.
fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    let days_to_sunday = 6 - u64::from(date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(days_to_sunday))
}

/// Last calendar day of the month that contains `date`.
fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// True when `date` is the last calendar day of its month.
#[must_use]
pub fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// Period end date of `date` for the given frequency.
///
/// Daily periods end on the date itself, weekly periods on Sunday, and
/// monthly periods on the last day of the month.
#[must_use]
pub fn period_end(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => Some(date),
        Frequency::Weekly => week_end(date),
        Frequency::Monthly => month_end(date),
    }
}

/// Generic resampler that groups date-sorted rows by a bucket function and
/// keeps the last usable row of each bucket, relabelled with the bucket date.
fn resample_by<F>(mut rows: Vec<AlignedRow>, bucket_of: F) -> Vec<AlignedRow>
where
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    // Stable: for equal dates the later input row stays last.
    rows.sort_by_key(|r| r.date);

    let mut out: Vec<AlignedRow> = Vec::new();
    let mut current: Option<(NaiveDate, AlignedRow)> = None;

    for row in rows {
        if !row.is_positive() {
            continue;
        }
        let Some(bucket) = bucket_of(row.date) else {
            continue;
        };
        match current {
            Some((cur_bucket, last)) if cur_bucket != bucket => {
                out.push(AlignedRow {
                    date: cur_bucket,
                    ..last
                });
                current = Some((bucket, row));
            }
            _ => current = Some((bucket, row)),
        }
    }

    if let Some((cur_bucket, last)) = current {
        out.push(AlignedRow {
            date: cur_bucket,
            ..last
        });
    }
    out
}

/// Downsample aligned rows to `frequency` using the last observation of each period.
///
/// - `Daily` keeps one row per date.
/// - `Weekly` groups Monday..Sunday and labels each row with the Sunday.
/// - `Monthly` groups calendar months and labels each row with the month's last day.
/// - Within a period the latest-dated row with both prices positive wins;
///   periods without such a row are dropped rather than filled.
///
/// Output is sorted by period end ascending.
///
/// # Errors
/// Returns `Err(PairError::EmptyAfterResample)` if no period survives.
///
/// ```
/// use chrono::NaiveDate;
/// use pairgrowth_core::{AlignedRow, Frequency, resample};
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2021, m, day).unwrap();
/// let row = |date, btc| AlignedRow { date, btc_price: btc, xrp_price: 0.5 };
/// let rows = vec![row(d(1, 5), 1.0), row(d(1, 20), 2.0), row(d(2, 3), 3.0)];
/// let monthly = resample(rows, Frequency::Monthly).unwrap();
/// assert_eq!(monthly.len(), 2);
/// assert_eq!(monthly[0].date, d(1, 31));
/// assert_eq!(monthly[0].btc_price, 2.0);
/// assert_eq!(monthly[1].date, d(2, 28));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pairgrowth_core::timeseries::resample",
        skip_all,
        fields(rows = rows.len(), frequency = %frequency),
    )
)]
pub fn resample(rows: Vec<AlignedRow>, frequency: Frequency) -> Result<Vec<AlignedRow>, PairError> {
    let out = resample_by(rows, move |date| period_end(date, frequency));
    if out.is_empty() {
        return Err(PairError::EmptyAfterResample { frequency });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(periods = out.len(), "resampled series");

    Ok(out)
}
