//! Database layer for hospital records.

mod schema;
mod session;
mod references;
mod bulk;
mod patients;
mod specialists;
mod medications;
mod appointments;
mod diagnoses;
mod formulas;

pub use schema::*;
pub use session::*;
pub use references::*;
pub use rusqlite::Error as SqliteError;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// How long a session waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("appointment {appointment_id} not found for patient {patient_id}")]
    AppointmentNotForPatient { appointment_id: i64, patient_id: i64 },

    #[error("no {kind} records found for {scope} {id}")]
    EmptyScope {
        kind: EntityKind,
        scope: EntityKind,
        id: i64,
    },
}

impl DbError {
    /// True for missing references and empty scoped listings.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DbError::NotFound { .. }
                | DbError::AppointmentNotForPatient { .. }
                | DbError::EmptyScope { .. }
        )
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// One database session. Dropping it releases the connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating the schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let db = Self::connect(path)?;
        db.initialize()?;
        Ok(db)
    }

    /// Open a session on an already initialized database.
    pub fn connect<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        Self::configure(conn)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let db = Self::configure(Connection::open_in_memory()?)?;
        db.initialize()?;
        Ok(db)
    }

    fn configure(conn: Connection) -> DbResult<Self> {
        // foreign_keys is per connection, not per file
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `work` as one unit: commit if it succeeds, roll back otherwise.
    ///
    /// The write lock is taken up front so that a session reading before it
    /// writes waits on `BUSY_TIMEOUT` instead of deadlocking with another.
    pub(crate) fn in_transaction<R, F>(&mut self, label: &str, work: F) -> DbResult<R>
    where
        F: FnOnce(&Transaction<'_>) -> DbResult<R>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        match work(&tx) {
            Ok(out) => {
                tx.commit()?;
                Ok(out)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::error!(label, error = %rollback_err, "rollback failed");
                }
                tracing::warn!(label, error = %err, "transaction rolled back");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        for table in [
            "appointments",
            "diagnoses",
            "formulas",
            "medications",
            "patients",
            "specialists",
        ] {
            assert!(tables.contains(&table.to_string()), "missing {table}");
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_failed_transaction_rolls_back() {
        let mut db = Database::open_in_memory().unwrap();
        let result: DbResult<()> = db.in_transaction("test", |tx| {
            tx.execute(
                "INSERT INTO specialists (document, name, specialty) VALUES ('1', 'Dr. Ruiz', 'cardiology')",
                [],
            )?;
            Err(DbError::NotFound {
                kind: EntityKind::Patient,
                id: 99,
            })
        });
        assert!(result.is_err());

        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM specialists", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_not_found_classification() {
        let missing = DbError::NotFound {
            kind: EntityKind::Medication,
            id: 4,
        };
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "medication 4 not found");

        let mismatch = DbError::AppointmentNotForPatient {
            appointment_id: 1,
            patient_id: 2,
        };
        assert!(mismatch.is_not_found());

        let empty = DbError::EmptyScope {
            kind: EntityKind::Formula,
            scope: EntityKind::Diagnosis,
            id: 3,
        };
        assert!(empty.is_not_found());

        let storage = DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
        assert!(!storage.is_not_found());
    }
}
