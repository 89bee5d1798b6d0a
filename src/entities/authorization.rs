use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    Undetermined,
    Denied,
    Restricted,
    GrantedWhileInUse,
    GrantedAlways,
}

impl AuthorizationState {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::GrantedWhileInUse | Self::GrantedAlways)
    }
}
