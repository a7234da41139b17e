//! Formula (prescription) models.

use serde::{Deserialize, Serialize};

/// Fields a caller supplies for one prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormulaCreate {
    pub diagnosis_id: i64,
    pub medication_id: i64,
    /// Free-form dosage (e.g., "500mg every 8h")
    pub dosage: String,
    /// Treatment length in days
    pub duration: i32,
}

/// A stored prescription linking a diagnosis to a medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formula {
    pub id: i64,
    pub diagnosis_id: i64,
    pub medication_id: i64,
    pub dosage: String,
    pub duration: i32,
    pub medication_name: Option<String>,
    pub diagnosis_description: Option<String>,
}

impl Formula {
    pub fn from_create(id: i64, create: &FormulaCreate) -> Self {
        Self {
            id,
            diagnosis_id: create.diagnosis_id,
            medication_id: create.medication_id,
            dosage: create.dosage.clone(),
            duration: create.duration,
            medication_name: None,
            diagnosis_description: None,
        }
    }
}
