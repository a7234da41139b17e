//! Appointment database operations.

use rusqlite::{params, Row};

use super::bulk::insert_each;
use super::references::require;
use super::{Database, DbResult, EntityKind};
use crate::models::{Appointment, AppointmentCreate, AppointmentTime};
use crate::time::to_storage;

impl Database {
    /// Book appointments between one patient and one specialist.
    ///
    /// Both parents are checked before anything is written. Stored times are
    /// normalized to UTC, while the returned records echo the caller's zoned
    /// values.
    pub fn create_appointments(
        &mut self,
        patient_id: i64,
        specialist_id: i64,
        appointments: &[AppointmentCreate],
    ) -> DbResult<Vec<Appointment>> {
        self.in_transaction("create_appointments", |tx| {
            require(tx, EntityKind::Patient, patient_id)?;
            require(tx, EntityKind::Specialist, specialist_id)?;

            if appointments.is_empty() {
                return Ok(Vec::new());
            }

            let ids = insert_each(
                tx,
                r#"
                INSERT INTO appointments (patient_id, specialist_id, scheduled_at, status)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                appointments,
                |stmt, appointment| {
                    Ok(stmt.execute(params![
                        patient_id,
                        specialist_id,
                        to_storage(&appointment.datetime),
                        appointment.status,
                    ])?)
                },
            )?;
            tracing::debug!(
                patient_id,
                specialist_id,
                count = ids.len(),
                "inserted appointments"
            );

            Ok(ids
                .into_iter()
                .zip(appointments)
                .map(|(id, appointment)| {
                    Appointment::from_create(id, patient_id, specialist_id, appointment)
                })
                .collect())
        })
    }

    /// List all appointments, earliest first, with patient and specialist names.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT a.id, a.patient_id, a.specialist_id, a.scheduled_at, a.status,
                   p.name, s.name
            FROM appointments a
            JOIN patients p ON p.id = a.patient_id
            JOIN specialists s ON s.id = a.specialist_id
            ORDER BY a.scheduled_at ASC, a.id ASC
            "#,
        )?;

        let rows = stmt.query_map([], appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        specialist_id: row.get(2)?,
        datetime: AppointmentTime::Utc(row.get(3)?),
        status: row.get(4)?,
        patient_name: row.get(5)?,
        specialist_name: row.get(6)?,
    })
}
