//! Diagnosis endpoints:
//! - `POST /diagnoses/:appointment_id/:patient_id/` — record one diagnosis
//! - `GET /diagnoses/` — list, most recent first
//! - `GET /diagnoses/by-patient/:patient_id` — one patient's diagnoses (404 if none)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Diagnosis, DiagnosisCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Path((appointment_id, patient_id)): Path<(i64, i64)>,
    Json(diagnosis): Json<DiagnosisCreate>,
) -> Result<(StatusCode, Json<Diagnosis>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_diagnosis(appointment_id, patient_id, &diagnosis)?;
    tracing::info!(id = created.id, appointment_id, patient_id, "diagnosis created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Diagnosis>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_diagnoses()?))
}

pub async fn by_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<Diagnosis>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_diagnoses_by_patient(patient_id)?))
}
