//! Patient endpoints:
//! - `POST /patients/bulk` — register patients
//! - `GET /patients/` — list patients by name

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Patient, PatientCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_bulk(
    State(state): State<AppState>,
    Json(patients): Json<Vec<PatientCreate>>,
) -> Result<(StatusCode, Json<Vec<Patient>>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_patients(&patients)?;
    tracing::info!(count = created.len(), "patients created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_patients()?))
}
