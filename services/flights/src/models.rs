//! API models for request and response payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod flight;

pub use flight::{DEFAULT_FLIGHT_STATUS, Flight, FlightDestination};

/// Request for flight creation
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation error for that field rather than a generic JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFlightRequest {
    pub flight_from: Option<String>,
    pub flight_to: Option<String>,
    pub flight_date: Option<NaiveDateTime>,
    pub num_of_layovers: Option<i32>,
    pub num_of_seats: Option<i32>,
}

/// Validated flight payload handed to the repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFlight {
    pub flight_from: FlightDestination,
    pub flight_to: FlightDestination,
    pub flight_date: NaiveDateTime,
    pub num_of_layovers: i32,
    pub num_of_seats: i32,
}

impl NewFlight {
    /// Attach the identifier the repository assigned
    pub fn with_id(self, flight_id: i32) -> FlightDto {
        FlightDto {
            flight_id,
            flight_from: self.flight_from,
            flight_to: self.flight_to,
            flight_date: self.flight_date,
            num_of_layovers: self.num_of_layovers,
            num_of_seats: self.num_of_seats,
        }
    }
}

/// Response for flight creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDto {
    pub flight_id: i32,
    pub flight_from: FlightDestination,
    pub flight_to: FlightDestination,
    pub flight_date: NaiveDateTime,
    pub num_of_layovers: i32,
    pub num_of_seats: i32,
}
