use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

pub mod geometry;
pub mod google;
pub mod map_service;
pub mod places;
pub mod provider;
pub mod test_support;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display)]
#[display(fmt = "{},{}", lat, lng)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }
}

impl FromStr for Coordinates {
    type Err = std::num::ParseFloatError;

    /// Parses `lat,lng`. Whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').unwrap_or((s, ""));
        Ok(Coordinates {
            lat: lat.trim().parse()?,
            lng: lng.trim().parse()?,
        })
    }
}

/// A route endpoint. Addresses are resolved by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Display, From)]
#[serde(untagged)]
pub enum Waypoint {
    Address(String),
    Coordinates(Coordinates),
}

impl From<&str> for Waypoint {
    fn from(address: &str) -> Self {
        Waypoint::Address(address.to_string())
    }
}

impl Waypoint {
    /// Reads free-form user input: `lat,lng` becomes coordinates, anything
    /// else is kept as an address.
    pub fn parse(input: &str) -> Self {
        match input.parse::<Coordinates>() {
            Ok(coordinates) => Waypoint::Coordinates(coordinates),
            Err(_) => Waypoint::Address(input.trim().to_string()),
        }
    }
}

/// Flattened autocomplete prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub main_text: String,
    pub secondary_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub name: String,
    pub location: Coordinates,
    pub formatted_address: String,
    /// Attribution markup the provider requires to be shown with this result.
    pub attributions: Vec<String>,
}
