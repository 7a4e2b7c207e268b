//! Client for the Places web service (autocomplete and place details).
//!
//! Responses are JSON objects carrying a `status` string next to the payload.
//! Anything but `OK` is turned into [`MapServiceError::Status`].

use derive_more::Display;
use log::*;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{GenericError, MapServiceError, MapsConfig};

use super::{
    provider::{AutocompleteRequest, PlaceDetailsRequest},
    Coordinates, PlaceDetail,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacesStatus {
    #[display(fmt = "OK")]
    Ok,
    #[display(fmt = "ZERO_RESULTS")]
    ZeroResults,
    #[display(fmt = "NOT_FOUND")]
    NotFound,
    #[display(fmt = "INVALID_REQUEST")]
    InvalidRequest,
    #[display(fmt = "OVER_QUERY_LIMIT")]
    OverQueryLimit,
    #[display(fmt = "REQUEST_DENIED")]
    RequestDenied,
    #[display(fmt = "UNKNOWN_ERROR")]
    UnknownError,
    #[serde(other)]
    #[display(fmt = "UNRECOGNIZED")]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub place_id: String,
    pub description: String,
    #[serde(default)]
    pub structured_formatting: StructuredFormatting,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StructuredFormatting {
    #[serde(default)]
    pub main_text: String,
    pub secondary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    predictions: Option<Vec<Prediction>>,
    status: PlacesStatus,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    html_attributions: Vec<String>,
    result: Option<PlaceResult>,
    status: PlacesStatus,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    #[serde(default)]
    name: String,
    #[serde(default)]
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

fn check_status(status: PlacesStatus, error_message: Option<String>) -> Result<(), MapServiceError> {
    match status {
        PlacesStatus::Ok => Ok(()),
        status => Err(MapServiceError::Status {
            status: status.to_string(),
            message: error_message,
        }),
    }
}

fn autocomplete_params(request: &AutocompleteRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![("input", request.input.clone())];
    if let Some(bias) = request.bias {
        params.push((
            "locationbias",
            format!("circle:{}@{}", bias.radius_meters, bias.center),
        ));
    }
    params
}

fn details_params(request: &PlaceDetailsRequest) -> Vec<(&'static str, String)> {
    let fields = request
        .fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    vec![("place_id", request.place_id.clone()), ("fields", fields)]
}

fn into_predictions(response: AutocompleteResponse) -> Result<Vec<Prediction>, MapServiceError> {
    check_status(response.status, response.error_message)?;
    response.predictions.ok_or(MapServiceError::NoResults)
}

fn into_place_detail(response: DetailsResponse) -> Result<PlaceDetail, MapServiceError> {
    check_status(response.status, response.error_message)?;
    let place = response.result.ok_or(MapServiceError::NoResults)?;
    Ok(PlaceDetail {
        name: place.name,
        location: place.geometry.location,
        formatted_address: place.formatted_address,
        attributions: response.html_attributions,
    })
}

pub struct PlacesClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(config: &MapsConfig) -> Self {
        PlacesClient {
            http: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.places_base_url.clone(),
        }
    }

    pub async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Prediction>, GenericError> {
        let response: AutocompleteResponse = self
            .get("autocomplete", &autocomplete_params(request))
            .await?;
        let predictions = into_predictions(response)?;
        trace!(
            "Received {} predictions from Places autocomplete.",
            predictions.len()
        );
        Ok(predictions)
    }

    pub async fn details(&self, request: &PlaceDetailsRequest) -> Result<PlaceDetail, GenericError> {
        let response: DetailsResponse = self.get("details", &details_params(request)).await?;
        let detail = into_place_detail(response)?;
        trace!("Received details for place {}.", request.place_id);
        Ok(detail)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, GenericError> {
        let url = format!("{}/{}/json", self.base_url, endpoint);
        debug!("Calling Places {} endpoint.", endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
