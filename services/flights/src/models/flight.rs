//! Flight entity and the destinations it can connect

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status given to flights created through the API
pub const DEFAULT_FLIGHT_STATUS: &str = "pending";

/// Airports served by the airline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightDestination {
    Beograd,
    Nis,
    Kraljevo,
    Kragujevac,
    NoviSad,
    Podgorica,
    Sarajevo,
    Split,
    Skoplje,
    Ljubljana,
}

impl FlightDestination {
    pub const ALL: [FlightDestination; 10] = [
        FlightDestination::Beograd,
        FlightDestination::Nis,
        FlightDestination::Kraljevo,
        FlightDestination::Kragujevac,
        FlightDestination::NoviSad,
        FlightDestination::Podgorica,
        FlightDestination::Sarajevo,
        FlightDestination::Split,
        FlightDestination::Skoplje,
        FlightDestination::Ljubljana,
    ];

    /// Wire and storage name of the destination
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightDestination::Beograd => "BEOGRAD",
            FlightDestination::Nis => "NIS",
            FlightDestination::Kraljevo => "KRALJEVO",
            FlightDestination::Kragujevac => "KRAGUJEVAC",
            FlightDestination::NoviSad => "NOVI_SAD",
            FlightDestination::Podgorica => "PODGORICA",
            FlightDestination::Sarajevo => "SARAJEVO",
            FlightDestination::Split => "SPLIT",
            FlightDestination::Skoplje => "SKOPLJE",
            FlightDestination::Ljubljana => "LJUBLJANA",
        }
    }
}

impl fmt::Display for FlightDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known destination
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid destination")]
pub struct UnknownDestination(pub String);

impl FromStr for FlightDestination {
    type Err = UnknownDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightDestination::ALL
            .into_iter()
            .find(|destination| destination.as_str() == s)
            .ok_or_else(|| UnknownDestination(s.to_string()))
    }
}

/// Flight entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: i32,
    pub flight_from: FlightDestination,
    pub flight_to: FlightDestination,
    pub flight_date: NaiveDateTime,
    pub num_of_layovers: i32,
    pub num_of_seats: i32,
    pub flight_status: String,
}

impl Flight {
    /// Whether at least one seat can still be booked
    pub fn has_available_seats(&self) -> bool {
        self.num_of_seats > 0
    }
}
