//! Route handlers, one module per resource.

pub mod appointments;
pub mod diagnoses;
pub mod health;
pub mod medications;
pub mod patients;
pub mod prescriptions;
pub mod specialists;
