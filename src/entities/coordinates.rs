use geo::HaversineDistance;
use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in meters.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let from: Point<f64> = (*self).into();
        let to: Point<f64> = (*other).into();

        from.haversine_distance(&to)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

#[test]
fn distance_between_nearby_centers() {
    let a = Coordinates::new(50.4501, 30.5234);
    let b = Coordinates::new(50.4505, 30.5238);
    let c = Coordinates::new(50.4502, 30.5235);

    let ab = a.distance_to(&b);
    assert!(ab > 50.0 && ab < 55.0, "{}", ab);

    let bc = b.distance_to(&c);
    assert!(bc < 50.0, "{}", bc);

    assert_eq!(a.distance_to(&a), 0.0);
}

#[test]
fn query_string_form() {
    let s: String = Coordinates::new(50.45, 30.52).into();
    assert_eq!(s, "50.45,30.52");
}
