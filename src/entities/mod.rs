mod authorization;
mod coordinates;
mod map;
mod place;
mod placemark;
mod route;

pub use authorization::AuthorizationState;
pub use coordinates::Coordinates;
pub use map::{Annotation, BoundingBox, MapCommand, Region};
pub use place::{Place, PlaceDraft, DEFAULT_RESTAURANT_NAMES};
pub use placemark::Placemark;
pub use route::{RouteCandidate, RouteRequest, RouteSummary, TransportType};
