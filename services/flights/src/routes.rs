//! Flights service routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{error::ApiError, models::CreateFlightRequest, state::AppState};

/// Path of the flight collection
pub const FLIGHTS_PATH: &str = "/flights";

/// Location of a single flight
pub fn flight_location(id: i32) -> String {
    format!("{}/{}", FLIGHTS_PATH, id)
}

/// Create the router for the flights service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(FLIGHTS_PATH, get(get_flights).post(create_flight))
        .route("/flights/:id", get(get_flight_by_id))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "flights-service"
    }))
}

/// Create a new flight
pub async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    state.flight_controller.create_flight(request).await
}

/// Get flights with available seats
pub async fn get_flights(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.flight_controller.get_flights().await
}

/// Get a flight by ID
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.flight_controller.get_flight_by_id(id).await
}
