//! Formula (prescription) database operations.

use rusqlite::{params, Row};

use super::bulk::insert_each;
use super::references::require;
use super::{Database, DbError, DbResult, EntityKind};
use crate::models::{Formula, FormulaCreate};

const SELECT_FORMULAS: &str = r#"
    SELECT f.id, f.diagnosis_id, f.medication_id, f.dosage, f.duration,
           m.name, d.description
    FROM formulas f
    JOIN medications m ON m.id = f.medication_id
    JOIN diagnoses d ON d.id = f.diagnosis_id
"#;

impl Database {
    /// Insert prescriptions as one unit of work.
    ///
    /// Each row's diagnosis and medication are checked right before that row
    /// is inserted; the first missing reference aborts and rolls back the
    /// whole batch.
    pub fn create_formulas(&mut self, formulas: &[FormulaCreate]) -> DbResult<Vec<Formula>> {
        if formulas.is_empty() {
            return Ok(Vec::new());
        }

        self.in_transaction("create_formulas", |tx| {
            let ids = insert_each(
                tx,
                r#"
                INSERT INTO formulas (diagnosis_id, medication_id, dosage, duration)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                formulas,
                |stmt, formula| {
                    require(tx, EntityKind::Diagnosis, formula.diagnosis_id)?;
                    require(tx, EntityKind::Medication, formula.medication_id)?;
                    Ok(stmt.execute(params![
                        formula.diagnosis_id,
                        formula.medication_id,
                        formula.dosage,
                        formula.duration,
                    ])?)
                },
            )?;
            tracing::debug!(count = ids.len(), "inserted formulas");

            Ok(ids
                .into_iter()
                .zip(formulas)
                .map(|(id, formula)| Formula::from_create(id, formula))
                .collect())
        })
    }

    /// List all prescriptions, newest first, with medication name and
    /// diagnosis description.
    pub fn list_formulas(&self) -> DbResult<Vec<Formula>> {
        let sql = format!("{SELECT_FORMULAS} ORDER BY f.id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], formula_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List the prescriptions written for one diagnosis, newest first.
    ///
    /// An empty result is reported as [`DbError::EmptyScope`].
    pub fn list_formulas_by_diagnosis(&self, diagnosis_id: i64) -> DbResult<Vec<Formula>> {
        let sql = format!("{SELECT_FORMULAS} WHERE f.diagnosis_id = ?1 ORDER BY f.id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let formulas = stmt
            .query_map([diagnosis_id], formula_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        if formulas.is_empty() {
            return Err(DbError::EmptyScope {
                kind: EntityKind::Formula,
                scope: EntityKind::Diagnosis,
                id: diagnosis_id,
            });
        }
        Ok(formulas)
    }
}

fn formula_from_row(row: &Row<'_>) -> rusqlite::Result<Formula> {
    Ok(Formula {
        id: row.get(0)?,
        diagnosis_id: row.get(1)?,
        medication_id: row.get(2)?,
        dosage: row.get(3)?,
        duration: row.get(4)?,
        medication_name: row.get(5)?,
        diagnosis_description: row.get(6)?,
    })
}
