//! Specialist database operations.

use rusqlite::{params, Row};

use super::bulk::insert_each;
use super::{Database, DbResult};
use crate::models::{Specialist, SpecialistCreate};

impl Database {
    /// Insert specialists as one unit of work.
    pub fn create_specialists(
        &mut self,
        specialists: &[SpecialistCreate],
    ) -> DbResult<Vec<Specialist>> {
        if specialists.is_empty() {
            return Ok(Vec::new());
        }

        self.in_transaction("create_specialists", |tx| {
            let ids = insert_each(
                tx,
                "INSERT INTO specialists (document, name, specialty) VALUES (?1, ?2, ?3)",
                specialists,
                |stmt, specialist| {
                    Ok(stmt.execute(params![
                        specialist.document,
                        specialist.name,
                        specialist.specialty,
                    ])?)
                },
            )?;
            tracing::debug!(count = ids.len(), "inserted specialists");

            Ok(ids
                .into_iter()
                .zip(specialists)
                .map(|(id, specialist)| Specialist::from_create(id, specialist))
                .collect())
        })
    }

    /// List all specialists by name.
    pub fn list_specialists(&self) -> DbResult<Vec<Specialist>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, document, name, specialty
            FROM specialists
            ORDER BY name ASC, id ASC
            "#,
        )?;

        let rows = stmt.query_map([], specialist_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn specialist_from_row(row: &Row<'_>) -> rusqlite::Result<Specialist> {
    Ok(Specialist {
        id: row.get(0)?,
        document: row.get(1)?,
        name: row.get(2)?,
        specialty: row.get(3)?,
    })
}
