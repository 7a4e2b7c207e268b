use async_trait::async_trait;
use derive_more::Display;

use crate::GenericError;

use super::{places::Prediction, Coordinates, PlaceDetail, Waypoint};

/// A circle that weights autocomplete results toward a location without
/// excluding results outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCircle {
    pub center: Coordinates,
    pub radius_meters: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteRequest {
    pub input: String,
    pub bias: Option<BiasCircle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceField {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "geometry")]
    Geometry,
    #[display(fmt = "formatted_address")]
    FormattedAddress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailsRequest {
    pub place_id: String,
    pub fields: Vec<PlaceField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
}

/// Mapping backend consumed by [`MapService`](super::map_service::MapService).
///
/// Implementations report every failure as an error, including non-OK
/// provider statuses. Folding failures into defaults is the caller's job.
#[async_trait]
pub trait MapsProvider: Send + Sync {
    /// Route result handed back to callers without inspection.
    type Route: Send;

    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Prediction>, GenericError>;

    async fn place_details(&self, request: &PlaceDetailsRequest)
        -> Result<PlaceDetail, GenericError>;

    async fn directions(&self, request: &DirectionsRequest) -> Result<Self::Route, GenericError>;

    /// Formatted addresses for `location`, best match first.
    async fn reverse_geocode(&self, location: Coordinates) -> Result<Vec<String>, GenericError>;
}
