use async_trait::async_trait;
use google_maps::{prelude::*, GoogleMapsClient, LatLng};
use log::*;
use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::{GenericError, MapServiceError, MapsConfig};

use super::{
    places::{PlacesClient, Prediction},
    provider::{AutocompleteRequest, DirectionsRequest, MapsProvider, PlaceDetailsRequest},
    Coordinates, PlaceDetail, Waypoint,
};

/// Google-backed provider. Directions and geocoding use the `google_maps`
/// client; autocomplete and place details go through [`PlacesClient`].
pub struct GoogleMapsService {
    client: GoogleMapsClient,
    places: PlacesClient,
}

impl GoogleMapsService {
    pub fn new(config: &MapsConfig) -> Self {
        GoogleMapsService {
            client: GoogleMapsClient::new(&config.api_key),
            places: PlacesClient::new(config),
        }
    }
}

fn to_latlng(coordinates: Coordinates) -> Result<LatLng, GenericError> {
    let invalid = || MapServiceError::InvalidCoordinates {
        lat: coordinates.lat,
        lng: coordinates.lng,
    };
    let lat = Decimal::from_f64(coordinates.lat).ok_or_else(invalid)?;
    let lng = Decimal::from_f64(coordinates.lng).ok_or_else(invalid)?;
    Ok(LatLng::try_from_dec(lat, lng)?)
}

fn to_location(waypoint: &Waypoint) -> Result<Location, GenericError> {
    match waypoint {
        Waypoint::Address(address) => Ok(Location::Address(address.clone())),
        Waypoint::Coordinates(coordinates) => Ok(Location::LatLng(to_latlng(*coordinates)?)),
    }
}

#[async_trait]
impl MapsProvider for GoogleMapsService {
    /// The directions response, serialised as-is.
    type Route = serde_json::Value;

    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Prediction>, GenericError> {
        self.places.autocomplete(request).await
    }

    async fn place_details(
        &self,
        request: &PlaceDetailsRequest,
    ) -> Result<PlaceDetail, GenericError> {
        self.places.details(request).await
    }

    async fn directions(&self, request: &DirectionsRequest) -> Result<Self::Route, GenericError> {
        let origin = to_location(&request.origin)?;
        let destination = to_location(&request.destination)?;
        let response = self
            .client
            .directions(origin, destination)
            .with_travel_mode(TravelMode::Driving)
            .execute()
            .await?;
        trace!("Received route from Google Maps directions API.");
        Ok(serde_json::to_value(response)?)
    }

    async fn reverse_geocode(&self, location: Coordinates) -> Result<Vec<String>, GenericError> {
        let response = self
            .client
            .reverse_geocoding(to_latlng(location)?)
            .execute()
            .await?;
        trace!("Received addresses from Google Maps geocoding API.");
        Ok(response
            .results
            .into_iter()
            .map(|result| result.formatted_address)
            .collect())
    }
}
