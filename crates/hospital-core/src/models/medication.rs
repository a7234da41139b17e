//! Medication models.

use serde::{Deserialize, Serialize};

/// Fields a caller supplies to register a medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationCreate {
    pub name: String,
    pub description: String,
    /// Units on hand. Prescriptions do not decrement it.
    pub stock: u32,
}

/// A stored medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub stock: u32,
}

impl Medication {
    pub fn from_create(id: i64, create: &MedicationCreate) -> Self {
        Self {
            id,
            name: create.name.clone(),
            description: create.description.clone(),
            stock: create.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_stock_is_rejected() {
        let json = r#"{"name":"Ibuprofen","description":"NSAID","stock":-3}"#;
        assert!(serde_json::from_str::<MedicationCreate>(json).is_err());
    }
}
