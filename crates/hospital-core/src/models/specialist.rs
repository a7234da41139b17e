//! Specialist models.

use serde::{Deserialize, Serialize};

/// Fields a caller supplies to register a specialist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialistCreate {
    pub document: String,
    pub name: String,
    /// Medical specialty (e.g., "cardiology")
    pub specialty: String,
}

/// A stored specialist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specialist {
    pub id: i64,
    pub document: String,
    pub name: String,
    pub specialty: String,
}

impl Specialist {
    pub fn from_create(id: i64, create: &SpecialistCreate) -> Self {
        Self {
            id,
            document: create.document.clone(),
            name: create.name.clone(),
            specialty: create.specialty.clone(),
        }
    }
}
