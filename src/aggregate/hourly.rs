//! Total request duration per hour bucket.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::record::Record;

/// Hour bucket to summed duration, ascending by hour.
///
/// Sums are `u128` so any number of `u64` durations adds up exactly.
pub type HourlyTotals = BTreeMap<NaiveDateTime, u128>;

/// Bucket a timestamp belongs to: one hour later, truncated to the hour.
///
/// `10:45` and `10:00:00.000` both land in the `11:00` bucket.
pub fn bucket_for(timestamp: NaiveDateTime) -> NaiveDateTime {
    let shifted = timestamp + Duration::hours(1);
    shifted
        .date()
        .and_hms_opt(shifted.hour(), 0, 0)
        .unwrap_or(shifted)
}

/// Sum durations per hour bucket.
pub fn duration_sum_by_hour(records: &[Record]) -> HourlyTotals {
    let mut totals = HourlyTotals::new();
    for record in records {
        *totals.entry(bucket_for(record.timestamp())).or_insert(0) +=
            u128::from(record.duration_millis());
    }
    totals
}
