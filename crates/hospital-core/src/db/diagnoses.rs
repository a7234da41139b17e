//! Diagnosis database operations.

use rusqlite::{params, Row};

use super::references::require_appointment_for_patient;
use super::{Database, DbError, DbResult, EntityKind};
use crate::models::{Diagnosis, DiagnosisCreate};

const SELECT_DIAGNOSES: &str = r#"
    SELECT d.id, d.appointment_id, d.patient_id, d.description, d.diagnosis_date,
           p.name, s.name
    FROM diagnoses d
    JOIN patients p ON p.id = d.patient_id
    JOIN appointments a ON a.id = d.appointment_id
    JOIN specialists s ON s.id = a.specialist_id
"#;

impl Database {
    /// Record a diagnosis for an appointment of the given patient.
    pub fn create_diagnosis(
        &mut self,
        appointment_id: i64,
        patient_id: i64,
        diagnosis: &DiagnosisCreate,
    ) -> DbResult<Diagnosis> {
        self.in_transaction("create_diagnosis", |tx| {
            require_appointment_for_patient(tx, appointment_id, patient_id)?;

            tx.execute(
                r#"
                INSERT INTO diagnoses (appointment_id, patient_id, description, diagnosis_date)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    appointment_id,
                    patient_id,
                    diagnosis.description,
                    diagnosis.diagnosis_date,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, appointment_id, patient_id, "inserted diagnosis");

            Ok(Diagnosis::from_create(
                id,
                appointment_id,
                patient_id,
                diagnosis,
            ))
        })
    }

    /// List all diagnoses, most recent first.
    pub fn list_diagnoses(&self) -> DbResult<Vec<Diagnosis>> {
        let sql = format!("{SELECT_DIAGNOSES} ORDER BY d.diagnosis_date DESC, d.id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], diagnosis_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List one patient's diagnoses, most recent first.
    ///
    /// An empty result is reported as [`DbError::EmptyScope`], whether or not
    /// the patient exists.
    pub fn list_diagnoses_by_patient(&self, patient_id: i64) -> DbResult<Vec<Diagnosis>> {
        let sql = format!(
            "{SELECT_DIAGNOSES} WHERE d.patient_id = ?1 ORDER BY d.diagnosis_date DESC, d.id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let diagnoses = stmt
            .query_map([patient_id], diagnosis_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        if diagnoses.is_empty() {
            return Err(DbError::EmptyScope {
                kind: EntityKind::Diagnosis,
                scope: EntityKind::Patient,
                id: patient_id,
            });
        }
        Ok(diagnoses)
    }
}

fn diagnosis_from_row(row: &Row<'_>) -> rusqlite::Result<Diagnosis> {
    Ok(Diagnosis {
        id: row.get(0)?,
        appointment_id: row.get(1)?,
        patient_id: row.get(2)?,
        description: row.get(3)?,
        diagnosis_date: row.get(4)?,
        patient_name: row.get(5)?,
        specialist_name: row.get(6)?,
    })
}
