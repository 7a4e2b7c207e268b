//! Behavioural tests for [`MapService`] driven through [`StubMapsProvider`].

use maps_adapter::services::provider::{BiasCircle, PlaceField};
use maps_adapter::services::test_support::{prediction, StubMapsProvider};
use maps_adapter::{
    Coordinates, MapService, MapServiceError, PlaceDetail, Waypoint, BIAS_RADIUS_METERS,
    UNKNOWN_LOCATION,
};
use rstest::rstest;

fn sydney() -> Coordinates {
    Coordinates::new(-33.8688, 151.2093)
}

fn opera_house() -> PlaceDetail {
    PlaceDetail {
        name: "Sydney Opera House".to_string(),
        location: Coordinates::new(-33.8568, 151.2153),
        formatted_address: "Bennelong Point, Sydney NSW 2000, Australia".to_string(),
        attributions: Vec::new(),
    }
}

// --- Unavailable client ---

#[tokio::test]
async fn unavailable_service_degrades_every_operation() {
    let service: MapService<StubMapsProvider> = MapService::unavailable();

    assert!(!service.is_available());
    assert_eq!(service.calculate_distance(sydney(), Coordinates::new(0.0, 0.0)), 0.0);
    assert!(service.place_predictions("opera").await.is_empty());
    assert!(service.search_places("opera", Some(sydney())).await.is_empty());
    assert_eq!(service.place_details("place-1").await, None);
    assert_eq!(service.directions("Sydney", "Melbourne").await, None);
    assert_eq!(service.reverse_geocode(sydney()).await, UNKNOWN_LOCATION);
}

// --- Distance ---

#[test]
fn distance_uses_spherical_geometry_when_available() {
    let service = MapService::new(StubMapsProvider::new());
    let d = service.calculate_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
    assert!((d - 111_195.0).abs() < 1.0, "got {d}");
}

#[rstest]
#[case(Coordinates::new(52.52, 13.405), Coordinates::new(48.8566, 2.3522))]
#[case(Coordinates::new(-33.8688, 151.2093), Coordinates::new(-37.8136, 144.9631))]
fn distance_is_symmetric(#[case] a: Coordinates, #[case] b: Coordinates) {
    let service = MapService::new(StubMapsProvider::new());
    let forward = service.calculate_distance(a, b);
    let backward = service.calculate_distance(b, a);
    assert!((forward - backward).abs() < 1e-6);
    assert!(service.calculate_distance(a, a).abs() < 1e-6);
}

// --- Place predictions ---

#[tokio::test]
async fn predictions_keep_provider_order() {
    let provider = StubMapsProvider::new().with_predictions(vec![
        prediction("p3", "Sydney Opera House", "Bennelong Point"),
        prediction("p1", "Opera Bar", "Circular Quay"),
        prediction("p2", "Opera Australia", "Surry Hills"),
    ]);
    let service = MapService::new(provider);

    let results = service.place_predictions("opera").await;

    let ids: Vec<_> = results.iter().map(|place| place.id.as_str()).collect();
    assert_eq!(ids, ["p3", "p1", "p2"]);
    assert_eq!(results[0].name, "Sydney Opera House, Bennelong Point");
    assert_eq!(results[0].main_text, "Sydney Opera House");
    assert_eq!(results[0].secondary_text.as_deref(), Some("Bennelong Point"));
}

#[tokio::test]
async fn biased_search_sends_fixed_radius_circle() {
    let service = MapService::new(StubMapsProvider::new());

    service.search_places("cafe", Some(sydney())).await;

    let requests = service.provider().unwrap().autocomplete_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].input, "cafe");
    assert_eq!(
        requests[0].bias,
        Some(BiasCircle {
            center: sydney(),
            radius_meters: 50_000,
        })
    );
    assert_eq!(BIAS_RADIUS_METERS, 50_000);
}

#[tokio::test]
async fn unbiased_search_sends_no_circle() {
    let service = MapService::new(StubMapsProvider::new());

    service.place_predictions("cafe").await;

    let requests = service.provider().unwrap().autocomplete_requests();
    assert_eq!(requests[0].bias, None);
}

#[rstest]
#[case(MapServiceError::status("ZERO_RESULTS"))]
#[case(MapServiceError::status("OVER_QUERY_LIMIT"))]
#[case(MapServiceError::NoResults)]
#[tokio::test]
async fn failed_search_is_empty(#[case] error: MapServiceError) {
    let service = MapService::new(StubMapsProvider::failing(error));
    assert!(service.search_places("cafe", None).await.is_empty());
}

// --- Place details ---

#[tokio::test]
async fn details_return_the_provider_record() {
    let service = MapService::new(StubMapsProvider::new().with_place(opera_house()));

    let detail = service.place_details("ChIJ3S-JXmauEmsRUcIaWtf4MzE").await;

    assert_eq!(detail, Some(opera_house()));
    let requests = service.provider().unwrap().details_requests();
    assert_eq!(requests[0].place_id, "ChIJ3S-JXmauEmsRUcIaWtf4MzE");
    assert_eq!(
        requests[0].fields,
        [
            PlaceField::Name,
            PlaceField::Geometry,
            PlaceField::FormattedAddress
        ]
    );
}

#[rstest]
#[case(MapServiceError::status("NOT_FOUND"))]
#[case(MapServiceError::status("UNKNOWN_ERROR"))]
#[tokio::test]
async fn failed_details_are_absent(#[case] error: MapServiceError) {
    let service = MapService::new(StubMapsProvider::failing(error));
    assert_eq!(service.place_details("missing").await, None);
}

// --- Directions ---

#[tokio::test]
async fn directions_pass_waypoints_through() {
    let service = MapService::new(StubMapsProvider::new().with_route("route-1"));

    let route = service.directions("Central Station, Sydney", sydney()).await;

    assert_eq!(route.as_deref(), Some("route-1"));
    let requests = service.provider().unwrap().directions_requests();
    assert_eq!(
        requests[0].origin,
        Waypoint::Address("Central Station, Sydney".to_string())
    );
    assert_eq!(requests[0].destination, Waypoint::Coordinates(sydney()));
}

#[tokio::test]
async fn failed_directions_are_absent() {
    let service = MapService::new(StubMapsProvider::new());
    assert_eq!(service.directions("Sydney", "Atlantis").await, None);
}

// --- Reverse geocoding ---

#[tokio::test]
async fn reverse_geocode_returns_first_address() {
    let provider = StubMapsProvider::new().with_addresses(vec![
        "1 Macquarie St, Sydney NSW 2000, Australia".to_string(),
        "Sydney NSW 2000, Australia".to_string(),
    ]);
    let service = MapService::new(provider);

    let address = service.reverse_geocode(sydney()).await;

    assert_eq!(address, "1 Macquarie St, Sydney NSW 2000, Australia");
    assert_eq!(service.provider().unwrap().geocode_requests(), [sydney()]);
}

#[tokio::test]
async fn reverse_geocode_without_results_is_unknown() {
    let service = MapService::new(StubMapsProvider::new());
    assert_eq!(service.reverse_geocode(sydney()).await, "Unknown Location");
}

#[tokio::test]
async fn reverse_geocode_failure_is_unknown() {
    let service = MapService::new(StubMapsProvider::failing(MapServiceError::status(
        "REQUEST_DENIED",
    )));
    assert_eq!(service.reverse_geocode(sydney()).await, "Unknown Location");
}
