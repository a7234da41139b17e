//! SQLite schema definition.

/// Complete database schema for hospital records.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients & Specialists
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    document TEXT NOT NULL,
    name TEXT NOT NULL,
    birth_date TEXT NOT NULL,                    -- YYYY-MM-DD
    phone TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

CREATE TABLE IF NOT EXISTS specialists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    document TEXT NOT NULL,
    name TEXT NOT NULL,
    specialty TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_specialists_name ON specialists(name);

-- ============================================================================
-- Appointments
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    specialist_id INTEGER NOT NULL REFERENCES specialists(id),
    scheduled_at TEXT NOT NULL,                  -- naive UTC
    status TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);
CREATE INDEX IF NOT EXISTS idx_appointments_specialist ON appointments(specialist_id);
CREATE INDEX IF NOT EXISTS idx_appointments_scheduled ON appointments(scheduled_at);

-- ============================================================================
-- Diagnoses
-- ============================================================================

CREATE TABLE IF NOT EXISTS diagnoses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    appointment_id INTEGER NOT NULL REFERENCES appointments(id),
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    description TEXT NOT NULL,
    diagnosis_date TEXT NOT NULL                 -- YYYY-MM-DD
);

CREATE INDEX IF NOT EXISTS idx_diagnoses_patient ON diagnoses(patient_id);
CREATE INDEX IF NOT EXISTS idx_diagnoses_appointment ON diagnoses(appointment_id);

-- ============================================================================
-- Medications & Formulas
-- ============================================================================

CREATE TABLE IF NOT EXISTS medications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    stock INTEGER NOT NULL CHECK (stock >= 0)
);

CREATE TABLE IF NOT EXISTS formulas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    diagnosis_id INTEGER NOT NULL REFERENCES diagnoses(id),
    medication_id INTEGER NOT NULL REFERENCES medications(id),
    dosage TEXT NOT NULL,
    duration INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_formulas_diagnosis ON formulas(diagnosis_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        assert!(conn.execute_batch(SCHEMA).is_ok());
    }

    #[test]
    fn test_stock_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO medications (name, description, stock) VALUES ('A', 'B', -1)",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO medications (name, description, stock) VALUES ('A', 'B', 0)",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_foreign_key_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        // No patient 1 or specialist 1 yet
        let result = conn.execute(
            "INSERT INTO appointments (patient_id, specialist_id, scheduled_at, status) VALUES (1, 1, '2024-01-01 10:00:00', 'scheduled')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO specialists (document, name, specialty) VALUES ('1', 'A', 'x')",
            [],
        )
        .unwrap();
        let first = conn.last_insert_rowid();
        conn.execute("DELETE FROM specialists", []).unwrap();
        conn.execute(
            "INSERT INTO specialists (document, name, specialty) VALUES ('2', 'B', 'y')",
            [],
        )
        .unwrap();
        assert!(conn.last_insert_rowid() > first);
    }
}
