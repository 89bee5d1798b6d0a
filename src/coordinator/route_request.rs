use async_channel::Sender;

use crate::{
    coordinator::{Completion, InFlight},
    entities::{Coordinates, MapCommand, RouteCandidate, RouteRequest, RouteSummary},
    error::{
        current_location_unavailable_error, destination_missing_error, route_unavailable_error,
        Error,
    },
    external::DynDirections,
};

#[derive(Clone, Debug, PartialEq)]
pub enum RouteState {
    Idle,
    Requesting { destination: Coordinates },
    Rendered { summaries: Vec<RouteSummary> },
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteRendering {
    pub commands: Vec<MapCommand>,
    pub summaries: Vec<RouteSummary>,
}

pub struct RouteRequestCoordinator {
    directions: DynDirections,
    in_flight: InFlight,
    state: RouteState,
}

impl RouteRequestCoordinator {
    pub fn new(directions: DynDirections) -> Self {
        Self {
            directions,
            in_flight: InFlight::new(),
            state: RouteState::Idle,
        }
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn is_requesting(&self) -> bool {
        self.in_flight.is_outstanding()
    }

    /// Supersedes any outstanding request. Returns the commands that clear
    /// the map for the new route.
    #[tracing::instrument(skip(self, completions))]
    pub fn request_route(
        &mut self,
        origin: Option<Coordinates>,
        destination: Option<Coordinates>,
        completions: &Sender<Completion>,
    ) -> Result<Vec<MapCommand>, Error> {
        let origin = origin.ok_or_else(current_location_unavailable_error)?;
        let destination = destination.ok_or_else(destination_missing_error)?;

        let generation = self.in_flight.begin();
        let directions = self.directions.clone();
        let completions = completions.clone();
        let request = RouteRequest::driving(origin, destination);

        self.in_flight.attach(tokio::spawn(async move {
            let result = directions.route(request).await;
            let _ = completions
                .send(Completion::Routed { generation, result })
                .await;
        }));

        self.state = RouteState::Requesting { destination };

        Ok(vec![MapCommand::RemoveOverlays])
    }

    /// `None` when the completion belongs to a superseded or cancelled request.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<RouteCandidate>, Error>,
    ) -> Option<Result<RouteRendering, Error>> {
        if !self.in_flight.settle(generation) {
            tracing::debug!("dropping stale route result for generation {}", generation);
            return None;
        }

        let candidates = match result {
            Ok(candidates) if !candidates.is_empty() => candidates,
            Ok(_) => {
                self.state = RouteState::Failed;
                return Some(Err(route_unavailable_error()));
            }
            Err(err) => {
                tracing::warn!("route calculation failed: {}", err);
                self.state = RouteState::Failed;
                return Some(Err(route_unavailable_error()));
            }
        };

        let mut commands = vec![];
        let mut summaries = vec![];

        for candidate in candidates {
            let summary = candidate.summary();
            tracing::info!(
                "distance: {} km, time to destination {} min",
                summary.distance_km,
                summary.minutes
            );

            if let Some(bounds) = candidate.bounds() {
                commands.push(MapCommand::AddOverlay {
                    generation,
                    polyline: candidate.polyline,
                });
                commands.push(MapCommand::SetVisibleRect { bounds });
            }
            summaries.push(summary);
        }

        self.state = RouteState::Rendered {
            summaries: summaries.clone(),
        };

        Some(Ok(RouteRendering {
            commands,
            summaries,
        }))
    }

    /// Aborts any outstanding request and clears rendered routes.
    pub fn cancel(&mut self) -> Vec<MapCommand> {
        self.in_flight.cancel();
        self.state = RouteState::Idle;

        vec![MapCommand::RemoveOverlays]
    }
}
