//! Flights service
//!
//! A small REST API to create, list and fetch airline flights. The
//! [`controller::FlightController`] holds the request handling logic and talks
//! to storage through the [`repositories::FlightRepository`] trait.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

pub use state::AppState;
