//! Appointment endpoints:
//! - `POST /appointments/:patient_id/:specialist_id/` — book appointments
//! - `GET /appointments/` — list with patient and specialist names

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Appointment, AppointmentCreate};

use crate::error::ApiError;
use crate::state::AppState;

/// Responds with the datetimes exactly as sent; storage holds them in UTC.
pub async fn create(
    State(state): State<AppState>,
    Path((patient_id, specialist_id)): Path<(i64, i64)>,
    Json(appointments): Json<Vec<AppointmentCreate>>,
) -> Result<(StatusCode, Json<Vec<Appointment>>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_appointments(patient_id, specialist_id, &appointments)?;
    tracing::info!(
        patient_id,
        specialist_id,
        count = created.len(),
        "appointments created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_appointments()?))
}
