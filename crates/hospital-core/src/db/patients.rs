//! Patient database operations.

use rusqlite::{params, Row};

use super::bulk::insert_each;
use super::{Database, DbResult};
use crate::models::{Patient, PatientCreate};

impl Database {
    /// Insert patients as one unit of work, returning them with their ids in
    /// input order.
    pub fn create_patients(&mut self, patients: &[PatientCreate]) -> DbResult<Vec<Patient>> {
        if patients.is_empty() {
            return Ok(Vec::new());
        }

        self.in_transaction("create_patients", |tx| {
            let ids = insert_each(
                tx,
                r#"
                INSERT INTO patients (document, name, birth_date, phone)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                patients,
                |stmt, patient| {
                    Ok(stmt.execute(params![
                        patient.document,
                        patient.name,
                        patient.birth_date,
                        patient.phone,
                    ])?)
                },
            )?;
            tracing::debug!(count = ids.len(), "inserted patients");

            Ok(ids
                .into_iter()
                .zip(patients)
                .map(|(id, patient)| Patient::from_create(id, patient))
                .collect())
        })
    }

    /// List all patients by name.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, document, name, birth_date, phone
            FROM patients
            ORDER BY name ASC, id ASC
            "#,
        )?;

        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        document: row.get(1)?,
        name: row.get(2)?,
        birth_date: row.get(3)?,
        phone: row.get(4)?,
    })
}
