pub mod google_maps;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    entities::{Coordinates, Placemark, RouteCandidate, RouteRequest},
    error::Error,
};

pub use google_maps::GoogleMaps;

/// Forward and reverse geocoding. An empty vector means no match.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error>;
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<Placemark>, Error>;
}

#[async_trait]
pub trait Directions {
    async fn route(&self, request: RouteRequest) -> Result<Vec<RouteCandidate>, Error>;
}

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynDirections = Arc<dyn Directions + Send + Sync>;
