//! Diagnosis models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields a caller supplies for a diagnosis. Appointment and patient come from
/// the request path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisCreate {
    pub description: String,
    pub diagnosis_date: NaiveDate,
}

/// A stored diagnosis, scoped to one appointment of one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagnosis {
    pub id: i64,
    pub appointment_id: i64,
    pub patient_id: i64,
    pub description: String,
    pub diagnosis_date: NaiveDate,
    pub patient_name: Option<String>,
    /// Specialist who ran the appointment
    pub specialist_name: Option<String>,
}

impl Diagnosis {
    pub fn from_create(
        id: i64,
        appointment_id: i64,
        patient_id: i64,
        create: &DiagnosisCreate,
    ) -> Self {
        Self {
            id,
            appointment_id,
            patient_id,
            description: create.description.clone(),
            diagnosis_date: create.diagnosis_date,
            patient_name: None,
            specialist_name: None,
        }
    }
}
