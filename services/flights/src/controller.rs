//! Flight controller
//!
//! Validates incoming payloads, makes exactly one repository call per
//! operation and maps the outcome onto an HTTP status and body. Routing lives
//! in [`crate::routes`]; this type knows nothing about extractors.

use std::sync::Arc;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateFlightRequest, Flight, FlightDto},
    repositories::{FlightRepository, RepositoryError},
    routes::flight_location,
    validation::validate_flight,
};

/// Name of the action that fetches a single flight
pub const GET_FLIGHT_BY_ID: &str = "GetFlightById";

/// A 201 response that points the caller at the action serving the new resource
#[derive(Debug, Clone)]
pub struct CreatedAtAction<T> {
    pub action_name: &'static str,
    pub id: i32,
    pub value: T,
}

impl<T> CreatedAtAction<T> {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::CREATED
    }

    pub fn location(&self) -> String {
        flight_location(self.id)
    }
}

impl<T: Serialize> IntoResponse for CreatedAtAction<T> {
    fn into_response(self) -> Response {
        let location = self.location();
        (
            self.status_code(),
            [(header::LOCATION, location)],
            Json(self.value),
        )
            .into_response()
    }
}

/// Handles flight requests on top of a repository
#[derive(Clone)]
pub struct FlightController {
    repository: Arc<dyn FlightRepository>,
}

impl FlightController {
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new flight
    pub async fn create_flight(
        &self,
        request: CreateFlightRequest,
    ) -> ApiResult<CreatedAtAction<FlightDto>> {
        let flight = validate_flight(request).map_err(ApiError::InvalidModel)?;

        let id = self
            .repository
            .create_flight(&flight)
            .await
            .map_err(|e| match e {
                RepositoryError::Storage(e) => {
                    error!("Failed to save flight: {}", e);
                    ApiError::SaveFailed
                }
                RepositoryError::Unknown(e) => {
                    error!("Unexpected error while creating flight: {}", e);
                    ApiError::Internal
                }
            })?;

        info!("Created flight {}", id);

        Ok(CreatedAtAction {
            action_name: GET_FLIGHT_BY_ID,
            id,
            value: flight.with_id(id),
        })
    }

    /// List flights that still have seats available
    pub async fn get_flights(&self) -> ApiResult<Json<Vec<Flight>>> {
        let flights = self.repository.get_all_flights().await.map_err(|e| {
            error!("Failed to get flights: {}", e);
            ApiError::Unexpected
        })?;

        let available = flights
            .into_iter()
            .filter(Flight::has_available_seats)
            .collect();

        Ok(Json(available))
    }

    /// Get a flight by ID
    pub async fn get_flight_by_id(&self, id: i32) -> ApiResult<Json<Flight>> {
        let flight = self
            .repository
            .get_flight_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to get flight {}: {}", id, e);
                ApiError::Internal
            })?
            .ok_or(ApiError::NotFound(id))?;

        Ok(Json(flight))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use common::error::DatabaseError;

    use super::*;
    use crate::{
        models::{FlightDestination, NewFlight},
        repositories::RepositoryResult,
    };

    /// Outcome a stub operation should produce
    enum Stub<T> {
        Return(T),
        Storage,
        Unknown(&'static str),
    }

    impl<T: Clone> Stub<T> {
        fn resolve(&self) -> RepositoryResult<T> {
            match self {
                Stub::Return(value) => Ok(value.clone()),
                Stub::Storage => Err(RepositoryError::Storage(DatabaseError::Query(
                    sqlx::Error::PoolTimedOut,
                ))),
                Stub::Unknown(msg) => Err(RepositoryError::Unknown(anyhow::anyhow!(*msg))),
            }
        }
    }

    struct StubRepository {
        create: Stub<i32>,
        list: Stub<Vec<Flight>>,
        by_id: Stub<Option<Flight>>,
        calls: AtomicUsize,
        created: Mutex<Vec<NewFlight>>,
    }

    impl Default for StubRepository {
        fn default() -> Self {
            Self {
                create: Stub::Return(1),
                list: Stub::Return(Vec::new()),
                by_id: Stub::Return(None),
                calls: AtomicUsize::new(0),
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FlightRepository for StubRepository {
        async fn create_flight(&self, flight: &NewFlight) -> RepositoryResult<i32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.created.lock().unwrap().push(flight.clone());
            self.create.resolve()
        }

        async fn get_all_flights(&self) -> RepositoryResult<Vec<Flight>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.list.resolve()
        }

        async fn get_flight_by_id(&self, _id: i32) -> RepositoryResult<Option<Flight>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.by_id.resolve()
        }
    }

    fn controller_with(repo: StubRepository) -> (FlightController, Arc<StubRepository>) {
        let repo = Arc::new(repo);
        (FlightController::new(repo.clone()), repo)
    }

    fn valid_request() -> CreateFlightRequest {
        CreateFlightRequest {
            flight_from: Some("BEOGRAD".to_string()),
            flight_to: Some("KRALJEVO".to_string()),
            flight_date: Some(NaiveDateTime::default()),
            num_of_layovers: Some(0),
            num_of_seats: Some(30),
        }
    }

    fn flight(id: i32, seats: i32) -> Flight {
        Flight {
            flight_id: id,
            flight_from: FlightDestination::Beograd,
            flight_to: FlightDestination::Kraljevo,
            flight_date: NaiveDateTime::default(),
            num_of_layovers: 0,
            num_of_seats: seats,
            flight_status: "approved".to_string(),
        }
    }

    #[tokio::test]
    async fn create_flight_invalid_model_returns_bad_request() {
        let (controller, repo) = controller_with(StubRepository::default());

        let request = CreateFlightRequest {
            flight_from: None,
            ..valid_request()
        };
        let err = controller.create_flight(request).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            ApiError::InvalidModel(errors) => {
                assert_eq!(errors.get("flight_from"), Some(&["Required".to_string()][..]));
            }
            other => panic!("expected invalid model, got {other:?}"),
        }
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_flight_valid_model_returns_created_at_action() {
        let (controller, repo) = controller_with(StubRepository {
            create: Stub::Return(42),
            ..Default::default()
        });

        let created = controller.create_flight(valid_request()).await.unwrap();

        assert_eq!(created.status_code(), StatusCode::CREATED);
        assert_eq!(created.action_name, GET_FLIGHT_BY_ID);
        assert_eq!(created.value.flight_id, 42);
        assert_eq!(created.value.flight_from, FlightDestination::Beograd);
        assert_eq!(created.value.num_of_seats, 30);
        assert_eq!(created.location(), "/flights/42");

        let stored = repo.created.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].flight_to, FlightDestination::Kraljevo);
    }

    #[tokio::test]
    async fn create_flight_storage_error_returns_500() {
        let (controller, _) = controller_with(StubRepository {
            create: Stub::Storage,
            ..Default::default()
        });

        let err = controller.create_flight(valid_request()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to save flight");
    }

    #[tokio::test]
    async fn create_flight_unknown_error_returns_500() {
        let (controller, _) = controller_with(StubRepository {
            create: Stub::Unknown("Unknown error"),
            ..Default::default()
        });

        let err = controller.create_flight(valid_request()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An internal error occurred");
    }

    #[tokio::test]
    async fn get_flights_failure_returns_500() {
        for stub in [
            Stub::Unknown("Unexpected error fetching flights"),
            Stub::Storage,
        ] {
            let (controller, _) = controller_with(StubRepository {
                list: stub,
                ..Default::default()
            });

            let err = controller.get_flights().await.unwrap_err();

            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.to_string(), "An unexpected error occurred");
        }
    }

    #[tokio::test]
    async fn get_flights_returns_flights_with_available_seats_only() {
        let (controller, _) = controller_with(StubRepository {
            list: Stub::Return(vec![flight(1, 10), flight(2, 0), flight(3, 5)]),
            ..Default::default()
        });

        let Json(flights) = controller.get_flights().await.unwrap();

        assert_eq!(flights.len(), 2);
        assert!(flights.iter().all(|f| f.num_of_seats > 0));
        let ids: Vec<_> = flights.iter().map(|f| f.flight_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn get_flights_is_idempotent() {
        let (controller, repo) = controller_with(StubRepository {
            list: Stub::Return(vec![flight(1, 0), flight(2, 7)]),
            ..Default::default()
        });

        let Json(first) = controller.get_flights().await.unwrap();
        let Json(second) = controller.get_flights().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn get_flight_by_id_found() {
        let (controller, _) = controller_with(StubRepository {
            by_id: Stub::Return(Some(flight(9, 0))),
            ..Default::default()
        });

        let Json(found) = controller.get_flight_by_id(9).await.unwrap();
        assert_eq!(found, flight(9, 0));
    }

    #[tokio::test]
    async fn get_flight_by_id_missing_returns_404() {
        let (controller, _) = controller_with(StubRepository::default());

        let err = controller.get_flight_by_id(9).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Flight 9 not found");
    }

    #[tokio::test]
    async fn get_flight_by_id_failure_returns_500() {
        let (controller, _) = controller_with(StubRepository {
            by_id: Stub::Storage,
            ..Default::default()
        });

        let err = controller.get_flight_by_id(9).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An internal error occurred");
    }
}
