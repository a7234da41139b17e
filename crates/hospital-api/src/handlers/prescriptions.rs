//! Prescription (formula) endpoints:
//! - `POST /prescriptions/bulk`
//! - `GET /prescriptions/` — newest first, with medication and diagnosis
//! - `GET /prescriptions/by-diagnosis/:diagnosis_id` — 404 if none

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Formula, FormulaCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_bulk(
    State(state): State<AppState>,
    Json(formulas): Json<Vec<FormulaCreate>>,
) -> Result<(StatusCode, Json<Vec<Formula>>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_formulas(&formulas)?;
    tracing::info!(count = created.len(), "prescriptions created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Formula>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_formulas()?))
}

pub async fn by_diagnosis(
    State(state): State<AppState>,
    Path(diagnosis_id): Path<i64>,
) -> Result<Json<Vec<Formula>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_formulas_by_diagnosis(diagnosis_id)?))
}
