//! In-process flight repository
//!
//! Keeps flights in a vector for tests and for running the service without a
//! database. Nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    models::{DEFAULT_FLIGHT_STATUS, Flight, NewFlight},
    repositories::{FlightRepository, RepositoryResult},
};

#[derive(Debug)]
struct Store {
    next_id: i32,
    flights: Vec<Flight>,
}

/// Flight repository held in memory
#[derive(Debug)]
pub struct InMemoryFlightRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryFlightRepository {
    fn default() -> Self {
        Self::with_flights(Vec::new())
    }
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository; new identifiers continue after the highest one given
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        let next_id = flights.iter().map(|f| f.flight_id).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(Store { next_id, flights }),
        }
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn create_flight(&self, flight: &NewFlight) -> RepositoryResult<i32> {
        let mut store = self.store.write().await;

        let flight_id = store.next_id;
        store.next_id += 1;
        store.flights.push(Flight {
            flight_id,
            flight_from: flight.flight_from,
            flight_to: flight.flight_to,
            flight_date: flight.flight_date,
            num_of_layovers: flight.num_of_layovers,
            num_of_seats: flight.num_of_seats,
            flight_status: DEFAULT_FLIGHT_STATUS.to_string(),
        });

        Ok(flight_id)
    }

    async fn get_all_flights(&self) -> RepositoryResult<Vec<Flight>> {
        Ok(self.store.read().await.flights.clone())
    }

    async fn get_flight_by_id(&self, id: i32) -> RepositoryResult<Option<Flight>> {
        let store = self.store.read().await;
        Ok(store.flights.iter().find(|f| f.flight_id == id).cloned())
    }
}
