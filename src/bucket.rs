//! Calendar-month bucketing.
//!
//! Every timestamp is converted into the timezone of the caller-supplied `now`
//! before it is bucketed, so "this month" and the completion buckets always
//! agree. The service passes `Local::now()`; tests pass fixed instants.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Zero-padded `YYYY-MM` key; string order equals chronological order.
pub fn month_key<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

pub fn this_month<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    month_key(now)
}

/// Bucket of a stored instant as seen from `now`'s timezone.
pub fn bucket_for<Tz: TimeZone>(ts: &DateTime<Utc>, now: &DateTime<Tz>) -> String {
    month_key(&ts.with_timezone(&now.timezone()))
}
