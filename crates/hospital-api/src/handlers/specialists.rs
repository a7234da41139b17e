//! Specialist endpoints:
//! - `POST /specialists/bulk`
//! - `GET /specialists/`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use hospital_core::{Specialist, SpecialistCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_bulk(
    State(state): State<AppState>,
    Json(specialists): Json<Vec<SpecialistCreate>>,
) -> Result<(StatusCode, Json<Vec<Specialist>>), ApiError> {
    let mut db = state.session()?;
    let created = db.create_specialists(&specialists)?;
    tracing::info!(count = created.len(), "specialists created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Specialist>>, ApiError> {
    let db = state.session()?;
    Ok(Json(db.list_specialists()?))
}
