use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, PlacemarkAPI};
use crate::entities::Coordinates;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct ResolveParams {
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub coordinates: Option<Coordinates>,
}

pub async fn resolve(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<ResolveResponse>, Error> {
    let coordinates = api.resolve_address(params.address).await?;

    Ok(ResolveResponse { coordinates }.into())
}
