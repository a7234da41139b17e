//! HTTP surface for hospital records.
//!
//! Thin axum layer over [`hospital_core`]: every handler opens one database
//! session, delegates to the core, and maps [`hospital_core::DbError`] to a
//! status code (404 for missing references and empty scoped listings, 500 for
//! everything else).

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::api_router;
pub use state::AppState;
