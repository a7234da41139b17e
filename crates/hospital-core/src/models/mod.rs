//! Domain models for hospital records.
//!
//! Each entity has a `*Create` shape (caller-supplied fields) and a full shape
//! carrying the database-assigned id plus any joined display fields.

mod appointment;
mod diagnosis;
mod formula;
mod medication;
mod patient;
mod specialist;

pub use appointment::*;
pub use diagnosis::*;
pub use formula::*;
pub use medication::*;
pub use patient::*;
pub use specialist::*;
