use serde::{Deserialize, Serialize};

use crate::entities::{BoundingBox, Coordinates};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Automobile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub transport_type: TransportType,
    pub requests_alternate_routes: bool,
}

impl RouteRequest {
    pub fn driving(origin: Coordinates, destination: Coordinates) -> Self {
        Self {
            origin,
            destination,
            transport_type: TransportType::Automobile,
            requests_alternate_routes: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub polyline: Vec<Coordinates>,
    /// meters
    pub distance: f64,
    /// seconds
    pub expected_travel_time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: String,
    pub minutes: i64,
}

impl RouteCandidate {
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            distance_km: format!("{:.1}", self.distance / 1000.0),
            minutes: (self.expected_travel_time / 60.0).round() as i64,
        }
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.polyline)
    }
}

#[test]
fn summary_formats_km_and_minutes() {
    let candidate = RouteCandidate {
        polyline: vec![],
        distance: 12_345.0,
        expected_travel_time: 1_500.0,
    };

    let summary = candidate.summary();
    assert_eq!(summary.distance_km, "12.3");
    assert_eq!(summary.minutes, 25);
}
