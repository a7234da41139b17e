//! Medication endpoints:
//! - `POST /medications/bulk`
//! - `GET /medications/`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Medication, MedicationCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_bulk(
    State(state): State<AppState>,
    Json(medications): Json<Vec<MedicationCreate>>,
) -> Result<(StatusCode, Json<Vec<Medication>>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_medications(&medications)?;
    tracing::info!(count = created.len(), "medications created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Medication>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_medications()?))
}
