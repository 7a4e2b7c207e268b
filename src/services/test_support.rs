//! Test utilities for code built on [`MapService`](super::map_service::MapService).
//!
//! [`StubMapsProvider`] answers every call from pre-configured replies and
//! records the requests it receives, so tests can check what would have been
//! sent to the provider without any network access.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{GenericError, MapServiceError};

use super::{
    places::{Prediction, StructuredFormatting},
    provider::{AutocompleteRequest, DirectionsRequest, MapsProvider, PlaceDetailsRequest},
    Coordinates, PlaceDetail,
};

type Reply<T> = Result<T, MapServiceError>;

/// Deterministic [`MapsProvider`] double.
///
/// # Example
///
/// ```
/// use maps_adapter::services::test_support::StubMapsProvider;
/// use maps_adapter::{Coordinates, MapService};
///
/// let provider = StubMapsProvider::new().with_addresses(vec!["Pyrmont NSW 2009".to_string()]);
/// let service = MapService::new(provider);
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let address = runtime.block_on(service.reverse_geocode(Coordinates::new(-33.86, 151.19)));
/// assert_eq!(address, "Pyrmont NSW 2009");
/// ```
#[derive(Debug)]
pub struct StubMapsProvider {
    predictions: Reply<Vec<Prediction>>,
    place: Reply<PlaceDetail>,
    route: Reply<String>,
    addresses: Reply<Vec<String>>,
    autocomplete_requests: Mutex<Vec<AutocompleteRequest>>,
    details_requests: Mutex<Vec<PlaceDetailsRequest>>,
    directions_requests: Mutex<Vec<DirectionsRequest>>,
    geocode_requests: Mutex<Vec<Coordinates>>,
}

impl Default for StubMapsProvider {
    fn default() -> Self {
        StubMapsProvider::new()
    }
}

impl StubMapsProvider {
    /// A provider that finds nothing: empty prediction and address lists,
    /// `NOT_FOUND` for details and `ZERO_RESULTS` for directions.
    pub fn new() -> Self {
        StubMapsProvider {
            predictions: Ok(Vec::new()),
            place: Err(MapServiceError::status("NOT_FOUND")),
            route: Err(MapServiceError::status("ZERO_RESULTS")),
            addresses: Ok(Vec::new()),
            autocomplete_requests: Mutex::new(Vec::new()),
            details_requests: Mutex::new(Vec::new()),
            directions_requests: Mutex::new(Vec::new()),
            geocode_requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider that answers every call with `error`.
    pub fn failing(error: MapServiceError) -> Self {
        StubMapsProvider {
            predictions: Err(error.clone()),
            place: Err(error.clone()),
            route: Err(error.clone()),
            addresses: Err(error),
            ..StubMapsProvider::new()
        }
    }

    pub fn with_predictions(mut self, predictions: Vec<Prediction>) -> Self {
        self.predictions = Ok(predictions);
        self
    }

    pub fn with_place(mut self, place: PlaceDetail) -> Self {
        self.place = Ok(place);
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Ok(route.into());
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<String>) -> Self {
        self.addresses = Ok(addresses);
        self
    }

    pub fn autocomplete_requests(&self) -> Vec<AutocompleteRequest> {
        recorded(&self.autocomplete_requests)
    }

    pub fn details_requests(&self) -> Vec<PlaceDetailsRequest> {
        recorded(&self.details_requests)
    }

    pub fn directions_requests(&self) -> Vec<DirectionsRequest> {
        recorded(&self.directions_requests)
    }

    pub fn geocode_requests(&self) -> Vec<Coordinates> {
        recorded(&self.geocode_requests)
    }
}

/// Builds a prediction the way the Places service shapes one.
pub fn prediction(place_id: &str, main_text: &str, secondary_text: &str) -> Prediction {
    Prediction {
        place_id: place_id.to_string(),
        description: format!("{main_text}, {secondary_text}"),
        structured_formatting: StructuredFormatting {
            main_text: main_text.to_string(),
            secondary_text: Some(secondary_text.to_string()),
        },
    }
}

fn recorded<T: Clone>(log: &Mutex<Vec<T>>) -> Vec<T> {
    log.lock().map(|requests| requests.clone()).unwrap_or_default()
}

fn record<T>(log: &Mutex<Vec<T>>, request: T) {
    if let Ok(mut requests) = log.lock() {
        requests.push(request);
    }
}

fn reply<T: Clone>(reply: &Reply<T>) -> Result<T, GenericError> {
    reply.clone().map_err(Into::into)
}

#[async_trait]
impl MapsProvider for StubMapsProvider {
    type Route = String;

    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Prediction>, GenericError> {
        record(&self.autocomplete_requests, request.clone());
        reply(&self.predictions)
    }

    async fn place_details(
        &self,
        request: &PlaceDetailsRequest,
    ) -> Result<PlaceDetail, GenericError> {
        record(&self.details_requests, request.clone());
        reply(&self.place)
    }

    async fn directions(&self, request: &DirectionsRequest) -> Result<Self::Route, GenericError> {
        record(&self.directions_requests, request.clone());
        reply(&self.route)
    }

    async fn reverse_geocode(&self, location: Coordinates) -> Result<Vec<String>, GenericError> {
        record(&self.geocode_requests, location);
        reply(&self.addresses)
    }
}
