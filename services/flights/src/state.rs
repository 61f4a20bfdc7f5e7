//! Application state shared across handlers

use std::sync::Arc;

use crate::{controller::FlightController, repositories::FlightRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub flight_controller: FlightController,
}

impl AppState {
    /// Build the state around an already configured repository
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        Self {
            flight_controller: FlightController::new(repository),
        }
    }
}
