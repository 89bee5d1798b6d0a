use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug};

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

pub const INVALID_INPUT: i32 = 100;
pub const NOT_FOUND: i32 = 101;
pub const PERMISSION_BLOCKED: i32 = 110;
pub const GEOCODE_FAILED: i32 = 111;
pub const GEOCODE_NO_MATCH: i32 = 112;
pub const CURRENT_LOCATION_UNAVAILABLE: i32 = 113;
pub const DESTINATION_MISSING: i32 = 114;
pub const ROUTE_UNAVAILABLE: i32 = 115;

impl Error {
    /// Advisory errors are shown to the user and never end a session.
    pub fn is_advisory(&self) -> bool {
        self.code >= 100
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            NOT_FOUND => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT,
        message: "invalid input".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND,
        message: "not found".into(),
    }
}

pub fn geocode_failed_error() -> Error {
    Error {
        code: GEOCODE_FAILED,
        message: "Address could not be resolved".into(),
    }
}

pub fn geocode_no_match_error() -> Error {
    Error {
        code: GEOCODE_NO_MATCH,
        message: "Address is not found".into(),
    }
}

pub fn current_location_unavailable_error() -> Error {
    Error {
        code: CURRENT_LOCATION_UNAVAILABLE,
        message: "Current location is not found".into(),
    }
}

pub fn destination_missing_error() -> Error {
    Error {
        code: DESTINATION_MISSING,
        message: "Destination is not found".into(),
    }
}

pub fn route_unavailable_error() -> Error {
    Error {
        code: ROUTE_UNAVAILABLE,
        message: "Destination is not available".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::warn!("database error: {:?}", err);

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!("reqwest error: {:?}", err);

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

#[test]
fn response_status_by_code() {
    assert_eq!(not_found_error().into_response().status(), StatusCode::NOT_FOUND);
    assert_eq!(
        upstream_error().into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        database_error("closed").into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        invalid_input_error().into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        destination_missing_error().into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn error_code_classes() {
    assert!(!upstream_error().is_advisory());
    assert!(route_unavailable_error().is_advisory());
    assert_ne!(
        current_location_unavailable_error(),
        destination_missing_error()
    );
    assert_ne!(destination_missing_error(), route_unavailable_error());
}
