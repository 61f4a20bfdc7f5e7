//! PostgreSQL flight repository

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::{
    models::{DEFAULT_FLIGHT_STATUS, Flight, FlightDestination, NewFlight},
    repositories::{FlightRepository, RepositoryError, RepositoryResult},
};

/// Flight repository backed by the `flights` table
#[derive(Clone)]
pub struct PgFlightRepository {
    pool: PgPool,
}

impl PgFlightRepository {
    /// Create a new flight repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn destination(row: &PgRow, column: &str) -> RepositoryResult<FlightDestination> {
    let name: String = row.try_get(column)?;
    name.parse()
        .map_err(|e| RepositoryError::Unknown(anyhow::Error::new(e)))
}

fn flight_from_row(row: &PgRow) -> RepositoryResult<Flight> {
    Ok(Flight {
        flight_id: row.try_get("flight_id")?,
        flight_from: destination(row, "flight_from")?,
        flight_to: destination(row, "flight_to")?,
        flight_date: row.try_get("flight_date")?,
        num_of_layovers: row.try_get("num_of_layovers")?,
        num_of_seats: row.try_get("num_of_seats")?,
        flight_status: row.try_get("flight_status")?,
    })
}

#[async_trait]
impl FlightRepository for PgFlightRepository {
    async fn create_flight(&self, flight: &NewFlight) -> RepositoryResult<i32> {
        info!(
            "Creating flight {} -> {} on {}",
            flight.flight_from, flight.flight_to, flight.flight_date
        );

        let flight_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO flights (flight_from, flight_to, flight_date, num_of_layovers, num_of_seats, flight_status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING flight_id
            "#,
        )
        .bind(flight.flight_from.as_str())
        .bind(flight.flight_to.as_str())
        .bind(flight.flight_date)
        .bind(flight.num_of_layovers)
        .bind(flight.num_of_seats)
        .bind(DEFAULT_FLIGHT_STATUS)
        .fetch_one(&self.pool)
        .await?;

        Ok(flight_id)
    }

    async fn get_all_flights(&self) -> RepositoryResult<Vec<Flight>> {
        let rows = sqlx::query(
            r#"
            SELECT flight_id, flight_from, flight_to, flight_date,
                   num_of_layovers, num_of_seats, flight_status
            FROM flights
            ORDER BY flight_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(flight_from_row).collect()
    }

    async fn get_flight_by_id(&self, id: i32) -> RepositoryResult<Option<Flight>> {
        info!("Finding flight by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT flight_id, flight_from, flight_to, flight_date,
                   num_of_layovers, num_of_seats, flight_status
            FROM flights
            WHERE flight_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(flight_from_row).transpose()
    }
}
