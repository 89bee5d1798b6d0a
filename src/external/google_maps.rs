use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::env;

use crate::{
    entities::{Coordinates, Placemark, RouteCandidate, RouteRequest, TransportType},
    error::{invalid_input_error, upstream_error, Error},
    external::{Directions, Geocoder},
};

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    formatted_address: Option<String>,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct AddressComponent {
    long_name: String,
    types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Measure,
    duration: Measure,
    steps: Vec<Step>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Measure {
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Step {
    start_location: Coordinates,
    end_location: Coordinates,
}

impl GeocodeResult {
    fn component(&self, kind: &str) -> Option<String> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.clone())
    }
}

impl From<GeocodeResult> for Placemark {
    fn from(result: GeocodeResult) -> Self {
        Placemark {
            coordinates: result.geometry.location,
            thoroughfare: result.component("route"),
            sub_thoroughfare: result.component("street_number"),
            formatted_address: result.formatted_address,
        }
    }
}

impl From<DirectionsRoute> for RouteCandidate {
    fn from(route: DirectionsRoute) -> Self {
        let mut polyline: Vec<Coordinates> = vec![];

        for step in route.legs.iter().flat_map(|leg| leg.steps.iter()) {
            if polyline.last() != Some(&step.start_location) {
                polyline.push(step.start_location);
            }
            polyline.push(step.end_location);
        }

        RouteCandidate {
            polyline,
            distance: route.legs.iter().map(|leg| leg.distance.value).sum(),
            expected_travel_time: route.legs.iter().map(|leg| leg.duration.value).sum(),
        }
    }
}

fn mode(transport_type: TransportType) -> &'static str {
    match transport_type {
        TransportType::Automobile => "driving",
    }
}

fn check_status_code(status_code: u16) -> Result<(), Error> {
    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

/// `ZERO_RESULTS` is an empty answer, not a failure.
fn check_api_status(status: &str) -> Result<(), Error> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        _ => Err(upstream_error()),
    }
}

impl GoogleMaps {
    pub fn new(api_base: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            key,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        Ok(Self::new(api_base, key))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response<T>, Error> {
        let url = format!("https://{}/maps/api/{}/json", self.api_base, path);

        let res = self
            .client
            .get(url)
            .query(&[("key", &self.key)])
            .query(query)
            .send()
            .await?;

        check_status_code(res.status().as_u16())?;

        let data: Response<T> = res.json().await?;

        check_api_status(&data.status).map_err(|err| {
            tracing::warn!("{} responded with status {}", path, data.status);
            err
        })?;

        Ok(data)
    }
}

#[async_trait]
impl Geocoder for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error> {
        let data: Response<Vec<GeocodeResult>> = self
            .get("geocode", &[("address", address.to_string())])
            .await?;

        let results = data.results.unwrap_or_default();

        Ok(results.into_iter().map(Placemark::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<Placemark>, Error> {
        let data: Response<Vec<GeocodeResult>> = self
            .get("geocode", &[("latlng", coordinates.into())])
            .await?;

        let results = data.results.unwrap_or_default();

        Ok(results.into_iter().map(Placemark::from).collect())
    }
}

#[async_trait]
impl Directions for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn route(&self, request: RouteRequest) -> Result<Vec<RouteCandidate>, Error> {
        let data: Response<Vec<DirectionsRoute>> = self
            .get(
                "directions",
                &[
                    ("origin", request.origin.into()),
                    ("destination", request.destination.into()),
                    ("mode", mode(request.transport_type).into()),
                    ("alternatives", request.requests_alternate_routes.to_string()),
                ],
            )
            .await?;

        let routes = data.routes.unwrap_or_default();

        Ok(routes.into_iter().map(RouteCandidate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn geocode_result_into_placemark() {
        let result: GeocodeResult = serde_json::from_value(json!({
            "formatted_address": "Khreshchatyk St, 22, Kyiv, Ukraine",
            "geometry": { "location": { "lat": 50.4477, "lng": 30.5225 } },
            "address_components": [
                { "long_name": "22", "types": ["street_number"] },
                { "long_name": "Khreshchatyk Street", "types": ["route"] },
                { "long_name": "Kyiv", "types": ["locality", "political"] }
            ]
        }))
        .unwrap();

        let placemark: Placemark = result.into();
        assert_eq!(placemark.coordinates, Coordinates::new(50.4477, 30.5225));
        assert_eq!(
            placemark.address_line().as_deref(),
            Some("Khreshchatyk Street, 22")
        );
    }

    #[test]
    fn directions_route_into_candidate() {
        let route: DirectionsRoute = serde_json::from_value(json!({
            "legs": [{
                "distance": { "value": 5400.0 },
                "duration": { "value": 720.0 },
                "steps": [
                    {
                        "start_location": { "lat": 50.0, "lng": 30.0 },
                        "end_location": { "lat": 50.1, "lng": 30.1 }
                    },
                    {
                        "start_location": { "lat": 50.1, "lng": 30.1 },
                        "end_location": { "lat": 50.2, "lng": 30.2 }
                    }
                ]
            }]
        }))
        .unwrap();

        let candidate: RouteCandidate = route.into();
        assert_eq!(candidate.polyline.len(), 3);
        assert_eq!(candidate.summary().distance_km, "5.4");
        assert_eq!(candidate.summary().minutes, 12);
    }

    #[test]
    fn http_status_codes() {
        assert_eq!(check_status_code(200), Ok(()));
        assert_eq!(check_status_code(400), Err(invalid_input_error()));
        assert_eq!(check_status_code(403), Err(invalid_input_error()));
        assert_eq!(check_status_code(499), Err(invalid_input_error()));
        assert_eq!(check_status_code(204), Err(upstream_error()));
        assert_eq!(check_status_code(302), Err(upstream_error()));
        assert_eq!(check_status_code(500), Err(upstream_error()));
        assert_eq!(check_status_code(503), Err(upstream_error()));
    }

    #[test]
    fn api_status_strings() {
        assert_eq!(check_api_status("OK"), Ok(()));
        assert_eq!(check_api_status("ZERO_RESULTS"), Ok(()));
        assert_eq!(check_api_status("OVER_QUERY_LIMIT"), Err(upstream_error()));
        assert_eq!(check_api_status("REQUEST_DENIED"), Err(upstream_error()));
        assert_eq!(check_api_status("NOT_FOUND"), Err(upstream_error()));
    }

    #[test]
    fn zero_results_response() {
        let data: Response<Vec<GeocodeResult>> =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS", "results": [] })).unwrap();

        assert!(data.results.unwrap().is_empty());
    }
}
