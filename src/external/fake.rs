use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::{
    entities::{Coordinates, Placemark, RouteCandidate, RouteRequest},
    error::{upstream_error, Error},
    external::{Directions, Geocoder},
};

/// Scripted maps service. Each call may be held back by a queued delay,
/// which lets tests decide the order in which completions arrive.
#[derive(Default)]
pub struct FakeMaps {
    pub addresses: HashMap<String, Coordinates>,
    pub fail_geocoding: bool,
    pub no_routes: bool,
    pub reverse_delays: Mutex<VecDeque<Duration>>,
    pub route_delays: Mutex<VecDeque<Duration>>,
    pub geocode_calls: Mutex<Vec<String>>,
    pub reverse_calls: Mutex<Vec<Coordinates>>,
    pub route_calls: Mutex<Vec<RouteRequest>>,
}

impl FakeMaps {
    pub fn with_address(mut self, address: &str, coordinates: Coordinates) -> Self {
        self.addresses.insert(address.into(), coordinates);
        self
    }

    pub fn with_reverse_delays(self, delays: &[u64]) -> Self {
        *self.reverse_delays.lock().unwrap() = Self::seconds(delays);
        self
    }

    pub fn with_route_delays(self, delays: &[u64]) -> Self {
        *self.route_delays.lock().unwrap() = Self::seconds(delays);
        self
    }

    fn seconds(delays: &[u64]) -> VecDeque<Duration> {
        delays.iter().copied().map(Duration::from_secs).collect()
    }

    pub fn address_of(coordinates: Coordinates) -> String {
        format!("{:.4}, {:.4}", coordinates.lat, coordinates.lng)
    }

    pub fn geocode_calls(&self) -> Vec<String> {
        self.geocode_calls.lock().unwrap().clone()
    }

    pub fn reverse_calls(&self) -> Vec<Coordinates> {
        self.reverse_calls.lock().unwrap().clone()
    }

    pub fn route_calls(&self) -> Vec<RouteRequest> {
        self.route_calls.lock().unwrap().clone()
    }

    async fn hold(queue: &Mutex<VecDeque<Duration>>) {
        let delay = queue.lock().unwrap().pop_front();

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Geocoder for FakeMaps {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error> {
        self.geocode_calls.lock().unwrap().push(address.into());

        if self.fail_geocoding {
            return Err(upstream_error());
        }

        Ok(self
            .addresses
            .get(address)
            .map(|coordinates| {
                let mut placemark = Placemark::at(*coordinates);
                placemark.formatted_address = Some(address.into());
                vec![placemark, Placemark::at(Coordinates::new(0.0, 0.0))]
            })
            .unwrap_or_default())
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<Placemark>, Error> {
        self.reverse_calls.lock().unwrap().push(coordinates);
        Self::hold(&self.reverse_delays).await;

        if self.fail_geocoding {
            return Err(upstream_error());
        }

        let mut placemark = Placemark::at(coordinates);
        placemark.formatted_address = Some(Self::address_of(coordinates));

        Ok(vec![placemark])
    }
}

#[async_trait]
impl Directions for FakeMaps {
    async fn route(&self, request: RouteRequest) -> Result<Vec<RouteCandidate>, Error> {
        self.route_calls.lock().unwrap().push(request.clone());
        Self::hold(&self.route_delays).await;

        if self.no_routes {
            return Ok(vec![]);
        }

        let direct = RouteCandidate {
            polyline: vec![request.origin, request.destination],
            distance: request.origin.distance_to(&request.destination),
            expected_travel_time: 600.0,
        };
        let detour = RouteCandidate {
            polyline: vec![request.origin, Coordinates::new(0.0, 0.0), request.destination],
            distance: direct.distance * 2.0,
            expected_travel_time: 1200.0,
        };

        Ok(vec![direct, detour])
    }
}
