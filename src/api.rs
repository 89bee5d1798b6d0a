use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, Place, PlaceDraft};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn create_place(&self, draft: PlaceDraft) -> Result<Place, Error>;
    async fn find_place(&self, id: Uuid) -> Result<Place, Error>;
    async fn list_places(&self) -> Result<Vec<Place>, Error>;
    async fn update_place(&self, id: Uuid, draft: PlaceDraft) -> Result<Place, Error>;
    async fn delete_place(&self, id: Uuid) -> Result<(), Error>;
    async fn seed_places(&self) -> Result<usize, Error>;
}

#[async_trait]
pub trait PlacemarkAPI {
    async fn resolve_address(&self, address: Option<String>) -> Result<Option<Coordinates>, Error>;
    async fn resolve_place(&self, id: Uuid) -> Result<Option<Coordinates>, Error>;
}

pub trait API: PlaceAPI + PlacemarkAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
