use async_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::{
    config::SessionConfig,
    coordinator::{
        evaluate, services_disabled, BlockedReason, Completion, GateAction, InFlight,
        PlacemarkResolver, RouteRequestCoordinator, SessionMode, TrackingDecision,
        UserTrackingCoordinator,
    },
    entities::{Annotation, AuthorizationState, Coordinates, MapCommand, Region, RouteSummary},
    error::{current_location_unavailable_error, Error, PERMISSION_BLOCKED},
    external::{DynDirections, DynGeocoder},
};

/// Everything the platform reports to a map session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum MapEvent {
    LocationServicesChanged { enabled: bool },
    AuthorizationChanged { state: AuthorizationState },
    UserLocationUpdated { coordinates: Coordinates },
    ViewportChanged { center: Coordinates },
    ShowUserLocation,
    DirectionsRequested,
    Dismissed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub code: i32,
    pub title: String,
    pub message: String,
}

impl From<Error> for Advisory {
    fn from(err: Error) -> Self {
        Self {
            code: err.code,
            title: "Error".into(),
            message: err.message,
        }
    }
}

impl From<BlockedReason> for Advisory {
    fn from(reason: BlockedReason) -> Self {
        Self {
            code: PERMISSION_BLOCKED,
            title: reason.title,
            message: reason.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum SessionOutput {
    Command { command: MapCommand },
    RequestPermission,
    Advisory { advisory: Advisory },
    AddressResolved { address: String },
    RouteSummaries { summaries: Vec<RouteSummary> },
}

/// One map screen. All state lives on the task running [`MapSession::run`];
/// slow work runs on spawned tasks that report back through `completions`.
pub struct MapSession {
    config: SessionConfig,
    mode: SessionMode,
    resolver: PlacemarkResolver,
    tracking: UserTrackingCoordinator,
    routes: RouteRequestCoordinator,
    recenter: InFlight,
    recenter_when_located: bool,
    user_location: Option<Coordinates>,
    place_coordinates: Option<Coordinates>,
    outputs: Sender<SessionOutput>,
    completions: (Sender<Completion>, Receiver<Completion>),
}

impl MapSession {
    pub fn new(
        config: SessionConfig,
        mode: SessionMode,
        geocoder: DynGeocoder,
        directions: DynDirections,
        outputs: Sender<SessionOutput>,
    ) -> Self {
        Self {
            config,
            mode,
            resolver: PlacemarkResolver::new(geocoder),
            tracking: UserTrackingCoordinator::new(config.tracking_threshold_meters),
            routes: RouteRequestCoordinator::new(directions),
            recenter: InFlight::new(),
            recenter_when_located: false,
            user_location: None,
            place_coordinates: None,
            outputs,
            completions: async_channel::unbounded(),
        }
    }

    pub fn spawn(self, events: Receiver<MapEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    #[tracing::instrument(name = "MapSession::run", skip_all)]
    pub async fn run(mut self, events: Receiver<MapEvent>) {
        self.setup_placemark();

        let completions = self.completions.1.clone();

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Ok(MapEvent::Dismissed) | Err(_) => break,
                    Ok(event) => self.handle_event(event).await,
                },
                Ok(completion) = completions.recv() => self.handle_completion(completion).await,
            }
        }

        self.dismiss();
    }

    fn setup_placemark(&mut self) {
        if let SessionMode::ShowPlace(place) = &self.mode {
            let address = place.address().map(str::to_string);
            self.resolver
                .start_resolve(address.as_deref(), &self.completions.0);
        }
    }

    fn dismiss(&mut self) {
        tracing::info!("map session dismissed");

        self.resolver.cancel();
        self.routes.cancel();
        self.recenter.cancel();
    }

    async fn emit(&self, output: SessionOutput) {
        if self.outputs.send(output).await.is_err() {
            tracing::debug!("map surface is gone, dropping output");
        }
    }

    async fn command(&self, command: MapCommand) {
        self.emit(SessionOutput::Command { command }).await;
    }

    async fn advise(&self, advisory: impl Into<Advisory>) {
        self.emit(SessionOutput::Advisory {
            advisory: advisory.into(),
        })
        .await;
    }

    async fn handle_event(&mut self, event: MapEvent) {
        tracing::debug!("event: {:?}", event);

        match event {
            MapEvent::LocationServicesChanged { enabled: false } => {
                self.apply_gate(services_disabled()).await;
            }
            MapEvent::LocationServicesChanged { enabled: true } => {}
            MapEvent::AuthorizationChanged { state } => {
                self.apply_gate(evaluate(Some(state), &self.mode)).await;
            }
            MapEvent::UserLocationUpdated { coordinates } => {
                self.user_location = Some(coordinates);

                if self.recenter_when_located {
                    self.recenter_when_located = false;
                    self.show_user_location().await;
                }
            }
            MapEvent::ViewportChanged { center } => self.viewport_changed(center).await,
            MapEvent::ShowUserLocation => self.show_user_location().await,
            MapEvent::DirectionsRequested => self.request_directions().await,
            MapEvent::Dismissed => {}
        }
    }

    async fn apply_gate(&mut self, action: GateAction) {
        match action {
            GateAction::RequestPermission => self.emit(SessionOutput::RequestPermission).await,
            GateAction::ShowBlockedMessage(reason) => self.advise(reason).await,
            GateAction::EnableMapLocationLayer { recenter } => {
                self.command(MapCommand::ShowUserLocation { enabled: true })
                    .await;

                if recenter {
                    if self.user_location.is_some() {
                        self.show_user_location().await;
                    } else {
                        self.recenter_when_located = true;
                    }
                }
            }
            GateAction::NoOp => {}
        }
    }

    async fn show_user_location(&self) {
        if let Some(location) = self.user_location {
            let region = Region::square(location, self.config.region_span_meters);
            self.command(MapCommand::SetRegion { region }).await;
        }
    }

    async fn viewport_changed(&mut self, center: Coordinates) {
        match self.tracking.on_viewport_changed(center) {
            TrackingDecision::Ignore => {}
            TrackingDecision::Resolve { center, recenter } => {
                if matches!(self.mode, SessionMode::CaptureAddress) {
                    self.resolver.start_reverse(center, &self.completions.0);
                }

                if recenter {
                    self.schedule_recenter();
                }
            }
        }
    }

    fn schedule_recenter(&mut self) {
        let generation = self.recenter.begin();
        let delay = self.config.recenter_delay;
        let completions = self.completions.0.clone();

        self.recenter.attach(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = completions.send(Completion::RecenterDue { generation }).await;
        }));
    }

    async fn request_directions(&mut self) {
        let origin = match self.user_location {
            Some(origin) => origin,
            None => return self.advise(current_location_unavailable_error()).await,
        };

        self.tracking.reset_reference(origin);

        match self
            .routes
            .request_route(Some(origin), self.place_coordinates, &self.completions.0)
        {
            Ok(commands) => {
                for command in commands {
                    self.command(command).await;
                }
            }
            Err(err) => self.advise(err).await,
        }
    }

    async fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Geocoded { generation, result } => {
                if !self.resolver.accept_forward(generation) {
                    return;
                }

                match result {
                    Ok(Some(coordinates)) => self.show_place(coordinates).await,
                    Ok(None) => {}
                    Err(err) => self.advise(err).await,
                }
            }
            Completion::ReverseGeocoded { generation, result } => {
                if !self.resolver.accept_reverse(generation) {
                    tracing::debug!("dropping stale address for generation {}", generation);
                    return;
                }

                match result {
                    Ok(Some(address)) => {
                        self.emit(SessionOutput::AddressResolved { address }).await
                    }
                    Ok(None) => {}
                    Err(err) => tracing::warn!("address at map center not resolved: {}", err),
                }
            }
            Completion::Routed { generation, result } => {
                match self.routes.complete(generation, result) {
                    Some(Ok(rendering)) => {
                        for command in rendering.commands {
                            self.command(command).await;
                        }
                        self.emit(SessionOutput::RouteSummaries {
                            summaries: rendering.summaries,
                        })
                        .await;
                    }
                    Some(Err(err)) => self.advise(err).await,
                    None => {}
                }
            }
            Completion::RecenterDue { generation } => {
                if self.recenter.settle(generation) {
                    self.show_user_location().await;
                }
            }
        }
    }

    async fn show_place(&mut self, coordinates: Coordinates) {
        self.place_coordinates = Some(coordinates);

        if let SessionMode::ShowPlace(place) = &self.mode {
            let annotation = Annotation::for_place(place, coordinates);

            self.command(MapCommand::ShowAnnotations {
                annotations: vec![annotation.clone()],
            })
            .await;
            self.command(MapCommand::SelectAnnotation { annotation })
                .await;
        }
    }
}
