//! Input validation for flight payloads

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CreateFlightRequest, FlightDestination, NewFlight};

const REQUIRED: &str = "Required";

/// Field-level validation failures, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Validate a destination name
pub fn validate_destination(value: Option<&str>) -> Result<FlightDestination, String> {
    let value = value.ok_or_else(|| REQUIRED.to_string())?;

    if value.trim().is_empty() {
        return Err(REQUIRED.to_string());
    }

    value.parse::<FlightDestination>().map_err(|e| e.to_string())
}

/// Validate a count that must be present and not negative
pub fn validate_count(value: Option<i32>) -> Result<i32, String> {
    match value {
        None => Err(REQUIRED.to_string()),
        Some(count) if count < 0 => Err("Must not be negative".to_string()),
        Some(count) => Ok(count),
    }
}

/// Validate a creation request, reporting every failing field at once
pub fn validate_flight(request: CreateFlightRequest) -> Result<NewFlight, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let flight_from = validate_destination(request.flight_from.as_deref())
        .map_err(|e| errors.add("flight_from", e))
        .ok();
    let flight_to = validate_destination(request.flight_to.as_deref())
        .map_err(|e| errors.add("flight_to", e))
        .ok();
    let flight_date = request.flight_date.or_else(|| {
        errors.add("flight_date", REQUIRED);
        None
    });
    let num_of_layovers = validate_count(request.num_of_layovers)
        .map_err(|e| errors.add("num_of_layovers", e))
        .ok();
    let num_of_seats = validate_count(request.num_of_seats)
        .map_err(|e| errors.add("num_of_seats", e))
        .ok();

    match (flight_from, flight_to, flight_date, num_of_layovers, num_of_seats) {
        (
            Some(flight_from),
            Some(flight_to),
            Some(flight_date),
            Some(num_of_layovers),
            Some(num_of_seats),
        ) if errors.is_empty() => Ok(NewFlight {
            flight_from,
            flight_to,
            flight_date,
            num_of_layovers,
            num_of_seats,
        }),
        _ => Err(errors),
    }
}
