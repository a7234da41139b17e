//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    appointments, diagnoses, health, medications, patients, prescriptions, specialists,
};
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/patients/bulk", post(patients::create_bulk))
        .route("/patients/", get(patients::list))
        .route("/specialists/bulk", post(specialists::create_bulk))
        .route("/specialists/", get(specialists::list))
        .route("/medications/bulk", post(medications::create_bulk))
        .route("/medications/", get(medications::list))
        .route(
            "/appointments/:patient_id/:specialist_id/",
            post(appointments::create),
        )
        .route("/appointments/", get(appointments::list))
        .route(
            "/diagnoses/:appointment_id/:patient_id/",
            post(diagnoses::create),
        )
        .route("/diagnoses/", get(diagnoses::list))
        .route(
            "/diagnoses/by-patient/:patient_id",
            get(diagnoses::by_patient),
        )
        .route("/prescriptions/bulk", post(prescriptions::create_bulk))
        .route("/prescriptions/", get(prescriptions::list))
        .route(
            "/prescriptions/by-diagnosis/:diagnosis_id",
            get(prescriptions::by_diagnosis),
        )
        .with_state(state)
}
