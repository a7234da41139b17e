//! Medication database operations.

use rusqlite::{params, Row};

use super::bulk::insert_each;
use super::{Database, DbResult};
use crate::models::{Medication, MedicationCreate};

impl Database {
    /// Insert medications as one unit of work.
    pub fn create_medications(
        &mut self,
        medications: &[MedicationCreate],
    ) -> DbResult<Vec<Medication>> {
        if medications.is_empty() {
            return Ok(Vec::new());
        }

        self.in_transaction("create_medications", |tx| {
            let ids = insert_each(
                tx,
                "INSERT INTO medications (name, description, stock) VALUES (?1, ?2, ?3)",
                medications,
                |stmt, medication| {
                    Ok(stmt.execute(params![
                        medication.name,
                        medication.description,
                        medication.stock,
                    ])?)
                },
            )?;
            tracing::debug!(count = ids.len(), "inserted medications");

            Ok(ids
                .into_iter()
                .zip(medications)
                .map(|(id, medication)| Medication::from_create(id, medication))
                .collect())
        })
    }

    /// List all medications by name.
    pub fn list_medications(&self) -> DbResult<Vec<Medication>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, description, stock
            FROM medications
            ORDER BY name ASC, id ASC
            "#,
        )?;

        let rows = stmt.query_map([], medication_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn medication_from_row(row: &Row<'_>) -> rusqlite::Result<Medication> {
    Ok(Medication {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        stock: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_list() {
        let mut db = Database::open_in_memory().unwrap();
        let created = db
            .create_medications(&[
                MedicationCreate {
                    name: "Losartan".into(),
                    description: "Antihypertensive".into(),
                    stock: 40,
                },
                MedicationCreate {
                    name: "Amoxicillin".into(),
                    description: "Antibiotic".into(),
                    stock: 0,
                },
            ])
            .unwrap();
        assert_eq!(created[0].stock, 40);
        assert_eq!(created[1].stock, 0);

        let listed = db.list_medications().unwrap();
        assert_eq!(listed[0].name, "Amoxicillin");
        assert_eq!(listed[1].name, "Losartan");
        assert_eq!(listed[1].stock, 40);
    }
}
