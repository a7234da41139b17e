//! Hospital Records Core Library
//!
//! The record-keeping layer behind the hospital API: it validates references
//! between records before writing, inserts batches as one unit of work, and
//! reads records back joined with the names of what they point at.
//!
//! # Architecture
//!
//! ```text
//!   request ──► SessionProvider::acquire ──► Database (one session)
//!                                               │
//!                   ┌───────────────────────────┼───────────────────────────┐
//!                   ▼                           ▼                           ▼
//!          Reference checks              Bulk inserts                 Joined reads
//!      (patient, specialist, ...)   (one transaction, per-row ids)  (display names)
//!                                               │
//!                                   Appointment times → UTC
//! ```
//!
//! Record graph:
//!
//! ```text
//! Patient ──┐
//!           ├──► Appointment ──► Diagnosis ──► Formula ◄── Medication
//! Specialist┘                       ▲
//!                      Patient ─────┘ (must match the appointment's patient)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite sessions, reference validation, bulk writes and joined reads
//! - [`models`]: Create and full shapes for the six record kinds
//! - [`time`]: Appointment timestamp normalization

pub mod db;
pub mod models;
pub mod time;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult, EntityKind, SessionProvider};
pub use models::{
    Appointment, AppointmentCreate, AppointmentTime, Diagnosis, DiagnosisCreate, Formula,
    FormulaCreate, Medication, MedicationCreate, Patient, PatientCreate, Specialist,
    SpecialistCreate,
};
