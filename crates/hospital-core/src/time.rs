//! Appointment timestamp normalization.
//!
//! SQLite has no zone-aware datetime type, so appointment times are persisted
//! as naive UTC. The zoned value the caller sent is only kept for the echo in
//! the creation response.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Convert a zoned datetime to its storage form: the same instant in UTC with
/// the offset dropped.
pub fn to_storage(local: &DateTime<FixedOffset>) -> NaiveDateTime {
    local.with_timezone(&Utc).naive_utc()
}
