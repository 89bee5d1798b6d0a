use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackingDecision {
    Ignore,
    /// Resolve the address at `center`; re-center on the user after the
    /// settle delay when `recenter` is set.
    Resolve { center: Coordinates, recenter: bool },
}

#[derive(Clone, Debug)]
pub struct UserTrackingCoordinator {
    threshold_meters: f64,
    last_reference_point: Option<Coordinates>,
}

impl UserTrackingCoordinator {
    pub fn new(threshold_meters: f64) -> Self {
        Self {
            threshold_meters,
            last_reference_point: None,
        }
    }

    pub fn on_viewport_changed(&mut self, center: Coordinates) -> TrackingDecision {
        let reference = match self.last_reference_point {
            Some(reference) => reference,
            None => {
                self.last_reference_point = Some(center);
                return TrackingDecision::Resolve {
                    center,
                    recenter: false,
                };
            }
        };

        if center.distance_to(&reference) <= self.threshold_meters {
            return TrackingDecision::Ignore;
        }

        self.last_reference_point = Some(center);

        TrackingDecision::Resolve {
            center,
            recenter: true,
        }
    }

    /// Used when following the user along a route.
    pub fn reset_reference(&mut self, point: Coordinates) {
        self.last_reference_point = Some(point);
    }

    pub fn last_reference_point(&self) -> Option<Coordinates> {
        self.last_reference_point
    }
}
