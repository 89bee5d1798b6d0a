use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{DynAPI, PlaceAPI, PlacemarkAPI};
use crate::entities::{Coordinates, Place, PlaceDraft};
use crate::error::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlacemarkResponse {
    pub coordinates: Option<Coordinates>,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places().await?;

    Ok(places.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(draft): Json<PlaceDraft>,
) -> Result<(StatusCode, Json<Place>), Error> {
    let place = api.create_place(draft).await?;

    Ok((StatusCode::CREATED, place.into()))
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(id).await?;

    Ok(place.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PlaceDraft>,
) -> Result<Json<Place>, Error> {
    let place = api.update_place(id, draft).await?;

    Ok(place.into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.delete_place(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn placemark(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlacemarkResponse>, Error> {
    let coordinates = api.resolve_place(id).await?;

    Ok(PlacemarkResponse { coordinates }.into())
}
