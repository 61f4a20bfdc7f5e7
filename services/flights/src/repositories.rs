//! Repositories for flight persistence

use async_trait::async_trait;
use common::error::DatabaseError;
use thiserror::Error;

use crate::models::{Flight, NewFlight};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryFlightRepository;
pub use postgres::PgFlightRepository;

/// Failure reported by a flight repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The underlying data store rejected or failed the operation
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),

    /// Anything else
    #[error("Unknown error: {0}")]
    Unknown(#[from] anyhow::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if DatabaseError::is_storage_failure(&err) {
            RepositoryError::Storage(DatabaseError::Query(err))
        } else {
            RepositoryError::Unknown(err.into())
        }
    }
}

/// Type alias for repository results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence capability the flight controller depends on
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Store a new flight and return the identifier assigned to it
    async fn create_flight(&self, flight: &NewFlight) -> RepositoryResult<i32>;

    /// Get every stored flight
    async fn get_all_flights(&self) -> RepositoryResult<Vec<Flight>>;

    /// Find a flight by ID
    async fn get_flight_by_id(&self, id: i32) -> RepositoryResult<Option<Flight>>;
}
