use crate::entities::{AuthorizationState, Place};

const PERMISSION_HINT: &str = "To give permission go: Settings -> MyPlaces -> Location";
const SERVICES_HINT: &str =
    "To enable it go: Settings -> Privacy -> Location -> Location Services. And turn On";

/// What the map was opened for.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionMode {
    ShowPlace(Place),
    CaptureAddress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockedReason {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateAction {
    RequestPermission,
    ShowBlockedMessage(BlockedReason),
    EnableMapLocationLayer { recenter: bool },
    NoOp,
}

pub fn evaluate(state: Option<AuthorizationState>, mode: &SessionMode) -> GateAction {
    let blocked = |title: &str| {
        GateAction::ShowBlockedMessage(BlockedReason {
            title: title.into(),
            message: PERMISSION_HINT.into(),
        })
    };

    match state {
        Some(AuthorizationState::Undetermined) => GateAction::RequestPermission,
        Some(AuthorizationState::Denied) => blocked("Access to your location is denied"),
        Some(AuthorizationState::Restricted) => blocked("Access to your location is restricted"),
        Some(state) if state.is_granted() => GateAction::EnableMapLocationLayer {
            recenter: *mode == SessionMode::CaptureAddress,
        },
        _ => GateAction::NoOp,
    }
}

pub fn services_disabled() -> GateAction {
    GateAction::ShowBlockedMessage(BlockedReason {
        title: "Location services are disabled".into(),
        message: SERVICES_HINT.into(),
    })
}
