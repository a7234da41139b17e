//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields a caller supplies to register a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientCreate {
    /// National document number (natural identifier, not authoritative)
    pub document: String,
    /// Full name
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Contact phone
    pub phone: String,
}

/// A stored patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Database-assigned identifier
    pub id: i64,
    pub document: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
}

impl Patient {
    /// Attach an assigned identifier to the fields it was created with.
    pub fn from_create(id: i64, create: &PatientCreate) -> Self {
        Self {
            id,
            document: create.document.clone(),
            name: create.name.clone(),
            birth_date: create.birth_date,
            phone: create.phone.clone(),
        }
    }
}
