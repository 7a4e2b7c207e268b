use log::*;

use crate::{MapServiceError, MapsConfig};

use super::{
    geometry,
    google::GoogleMapsService,
    places::Prediction,
    provider::{
        AutocompleteRequest, BiasCircle, DirectionsRequest, MapsProvider, PlaceDetailsRequest,
        PlaceField,
    },
    Coordinates, PlaceDetail, PlaceSummary, Waypoint,
};

/// Returned by [`MapService::reverse_geocode`] when no address is available.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Radius of the bias circle attached to location-biased searches.
pub const BIAS_RADIUS_METERS: u32 = 50_000;

const DETAIL_FIELDS: [PlaceField; 3] = [
    PlaceField::Name,
    PlaceField::Geometry,
    PlaceField::FormattedAddress,
];

/// Best-effort mapping operations over an optional provider.
///
/// None of the operations fail. A missing provider, a provider error and an
/// empty answer all resolve to the same default: `0.0`, an empty list, `None`
/// or [`UNKNOWN_LOCATION`].
pub struct MapService<P> {
    provider: Option<P>,
}

impl<P: MapsProvider> MapService<P> {
    pub fn new(provider: P) -> Self {
        MapService {
            provider: Some(provider),
        }
    }

    /// A service with no provider behind it.
    pub fn unavailable() -> Self {
        MapService { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Surface distance in meters, or `0.0` without a provider.
    pub fn calculate_distance(&self, from: Coordinates, to: Coordinates) -> f64 {
        if self.provider.is_none() {
            error!("{} Returning zero distance.", MapServiceError::ClientUnavailable);
            return 0.0;
        }
        geometry::distance_between(from, to)
    }

    pub async fn place_predictions(&self, query: &str) -> Vec<PlaceSummary> {
        self.search_places(query, None).await
    }

    /// Autocomplete `query`, optionally weighted toward `near`.
    ///
    /// Results keep the provider's relevance order.
    pub async fn search_places(&self, query: &str, near: Option<Coordinates>) -> Vec<PlaceSummary> {
        let Some(provider) = &self.provider else {
            return Vec::new();
        };

        let request = AutocompleteRequest {
            input: query.to_string(),
            bias: near.map(|center| BiasCircle {
                center,
                radius_meters: BIAS_RADIUS_METERS,
            }),
        };

        match provider.autocomplete(&request).await {
            Ok(predictions) => predictions.into_iter().map(summarize).collect(),
            Err(why) => {
                debug!("Place search for {:?} failed: {}", query, why);
                Vec::new()
            }
        }
    }

    pub async fn place_details(&self, place_id: &str) -> Option<PlaceDetail> {
        let provider = self.provider.as_ref()?;
        let request = PlaceDetailsRequest {
            place_id: place_id.to_string(),
            fields: DETAIL_FIELDS.to_vec(),
        };

        match provider.place_details(&request).await {
            Ok(place) => Some(place),
            Err(why) => {
                debug!("Place details for {} unavailable: {}", place_id, why);
                None
            }
        }
    }

    /// Driving directions between two waypoints.
    pub async fn directions(
        &self,
        origin: impl Into<Waypoint>,
        destination: impl Into<Waypoint>,
    ) -> Option<P::Route> {
        let provider = self.provider.as_ref()?;
        let request = DirectionsRequest {
            origin: origin.into(),
            destination: destination.into(),
        };

        match provider.directions(&request).await {
            Ok(route) => Some(route),
            Err(why) => {
                error!(
                    "Directions request from {} to {} failed due to {}",
                    request.origin, request.destination, why
                );
                None
            }
        }
    }

    /// The best formatted address for `location`, or [`UNKNOWN_LOCATION`].
    pub async fn reverse_geocode(&self, location: Coordinates) -> String {
        let Some(provider) = &self.provider else {
            return UNKNOWN_LOCATION.to_string();
        };

        match provider.reverse_geocode(location).await {
            Ok(addresses) => match addresses.into_iter().next() {
                Some(address) => address,
                None => {
                    error!("Geocoder failed due to: no results for {}", location);
                    UNKNOWN_LOCATION.to_string()
                }
            },
            Err(why) => {
                error!("Geocoder failed due to: {}", why);
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}

impl MapService<GoogleMapsService> {
    /// Builds a Google-backed service from the environment, or an unavailable
    /// one if the API key is missing.
    pub fn from_env() -> Self {
        match MapsConfig::from_env() {
            Ok(config) => MapService::new(GoogleMapsService::new(&config)),
            Err(why) => {
                warn!("Google Maps not configured ({}), running without a mapping client.", why);
                MapService::unavailable()
            }
        }
    }
}

fn summarize(prediction: Prediction) -> PlaceSummary {
    PlaceSummary {
        id: prediction.place_id,
        name: prediction.description,
        main_text: prediction.structured_formatting.main_text,
        secondary_text: prediction.structured_formatting.secondary_text,
    }
}
