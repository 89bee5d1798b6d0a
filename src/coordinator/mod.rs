//! Per-session coordination between the map surface and the external
//! geocoding and routing services.

mod authorization_gate;
mod in_flight;
mod placemark_resolver;
mod route_request;
mod user_tracking;

pub use authorization_gate::{evaluate, services_disabled, BlockedReason, GateAction, SessionMode};
pub use in_flight::InFlight;
pub use placemark_resolver::{resolve, reverse_address, PlacemarkResolver};
pub use route_request::{RouteRendering, RouteRequestCoordinator, RouteState};
pub use user_tracking::{TrackingDecision, UserTrackingCoordinator};

use crate::{
    entities::{Coordinates, RouteCandidate},
    error::Error,
};

/// Results of spawned work, tagged with the generation that requested them.
#[derive(Debug)]
pub enum Completion {
    Geocoded {
        generation: u64,
        result: Result<Option<Coordinates>, Error>,
    },
    ReverseGeocoded {
        generation: u64,
        result: Result<Option<String>, Error>,
    },
    Routed {
        generation: u64,
        result: Result<Vec<RouteCandidate>, Error>,
    },
    RecenterDue {
        generation: u64,
    },
}
