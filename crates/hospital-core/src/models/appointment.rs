//! Appointment models.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fields a caller supplies for one appointment. Patient and specialist come
/// from the request path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentCreate {
    /// Scheduled time with an explicit UTC offset
    pub datetime: DateTime<FixedOffset>,
    /// Free-text status (e.g., "scheduled")
    pub status: String,
}

/// The scheduled time of an appointment as it appears in a response.
///
/// A freshly created appointment echoes the caller's instant and offset
/// (re-serialized as RFC 3339, so `Z` comes back as `+00:00`); one read back
/// from storage carries the normalized UTC value without an offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AppointmentTime {
    Zoned(DateTime<FixedOffset>),
    Utc(NaiveDateTime),
}

/// A stored appointment with optional display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub specialist_id: i64,
    pub datetime: AppointmentTime,
    pub status: String,
    /// Filled by joined reads only
    pub patient_name: Option<String>,
    /// Filled by joined reads only
    pub specialist_name: Option<String>,
}

impl Appointment {
    /// Build the creation echo: the caller's original datetime, no display names.
    pub fn from_create(
        id: i64,
        patient_id: i64,
        specialist_id: i64,
        create: &AppointmentCreate,
    ) -> Self {
        Self {
            id,
            patient_id,
            specialist_id,
            datetime: AppointmentTime::Zoned(create.datetime),
            status: create.status.clone(),
            patient_name: None,
            specialist_name: None,
        }
    }
}
