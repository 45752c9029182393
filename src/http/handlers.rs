use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tracing::info;

use super::AppState;
use crate::error::ApiError;
use crate::models::{ClientPayload, ClientResponse, ClientUpdate, SimulationPayload};
use crate::mortgage;
use crate::validation;

/// POST /clientes
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let new_client = validation::validate_client_payload(payload)?;
    if !validation::is_valid_national_id(&new_client.national_id) {
        return Err(ApiError::InvalidNationalId);
    }

    let client = state.db.create_client(&new_client).await?;
    info!(national_id = %client.national_id, id = client.id, "client created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "client created" })),
    ))
}

/// GET /clientes/{nationalId}
pub async fn get_client(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = state
        .db
        .get_client(&national_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(client.into()))
}

/// PUT /clientes/{nationalId}
pub async fn update_client(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
    payload: Result<Json<ClientUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(update) = payload?;

    let client = state.db.update_client(&national_id, &update).await?;
    info!(national_id = %client.national_id, "client updated");

    Ok(Json(json!({ "message": "client updated" })))
}

/// DELETE /clientes/{nationalId}
pub async fn delete_client(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_client(&national_id).await?;
    info!(%national_id, "client deleted");

    Ok(Json(json!({ "message": "client deleted" })))
}

/// POST /simulacion
pub async fn simulate_mortgage(
    payload: Result<Json<SimulationPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;
    let input = validation::validate_simulation_payload(payload)?;

    let payment = mortgage::monthly_payment(input.capital, input.rate, input.term_years);

    Ok(Json(json!({ "monthlyPayment": payment })))
}
