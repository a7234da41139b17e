//! Reference validation: a dependent row may only be written once every
//! parent it points at exists.

use std::fmt;

use rusqlite::Connection;

use super::{Database, DbError, DbResult};

/// The six record kinds, used to name tables and to label missing references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Patient,
    Specialist,
    Appointment,
    Diagnosis,
    Medication,
    Formula,
}

impl EntityKind {
    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Specialist => "specialists",
            EntityKind::Appointment => "appointments",
            EntityKind::Diagnosis => "diagnoses",
            EntityKind::Medication => "medications",
            EntityKind::Formula => "formulas",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Specialist => "specialist",
            EntityKind::Appointment => "appointment",
            EntityKind::Diagnosis => "diagnosis",
            EntityKind::Medication => "medication",
            EntityKind::Formula => "formula",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn exists(conn: &Connection, kind: EntityKind, id: i64) -> DbResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", kind.table());
    let found = conn.prepare_cached(&sql)?.query_row([id], |row| row.get(0))?;
    Ok(found)
}

pub(crate) fn require(conn: &Connection, kind: EntityKind, id: i64) -> DbResult<()> {
    if exists(conn, kind, id)? {
        Ok(())
    } else {
        Err(DbError::NotFound { kind, id })
    }
}

/// One lookup covers both "no such appointment" and "belongs to someone else".
pub(crate) fn require_appointment_for_patient(
    conn: &Connection,
    appointment_id: i64,
    patient_id: i64,
) -> DbResult<()> {
    let found: bool = conn
        .prepare_cached(
            "SELECT EXISTS(SELECT 1 FROM appointments WHERE id = ?1 AND patient_id = ?2)",
        )?
        .query_row([appointment_id, patient_id], |row| row.get(0))?;
    if found {
        Ok(())
    } else {
        Err(DbError::AppointmentNotForPatient {
            appointment_id,
            patient_id,
        })
    }
}

impl Database {
    /// Check whether a row of `kind` with this id exists.
    pub fn exists(&self, kind: EntityKind, id: i64) -> DbResult<bool> {
        exists(&self.conn, kind, id)
    }

    /// Fail with [`DbError::NotFound`] unless the row exists.
    pub fn require(&self, kind: EntityKind, id: i64) -> DbResult<()> {
        require(&self.conn, kind, id)
    }

    /// Fail unless `appointment_id` exists and was booked for `patient_id`.
    pub fn require_appointment_for_patient(
        &self,
        appointment_id: i64,
        patient_id: i64,
    ) -> DbResult<()> {
        require_appointment_for_patient(&self.conn, appointment_id, patient_id)
    }
}
