//! Async wrappers around a mapping provider.
//!
//! [`MapService`] is the entry point. It holds an optional [`MapsProvider`]
//! handle and turns every provider call into a plain value: failures degrade
//! to an empty list, `None` or a sentinel string instead of an error.

pub mod config;
mod error;
pub mod services;

pub use config::MapsConfig;
pub use error::MapServiceError;
pub use services::{
    map_service::{MapService, BIAS_RADIUS_METERS, UNKNOWN_LOCATION},
    provider::MapsProvider,
    Coordinates, PlaceDetail, PlaceSummary, Waypoint,
};

pub type GenericError = Box<dyn std::error::Error + Send + Sync>;
