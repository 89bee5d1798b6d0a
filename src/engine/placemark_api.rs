use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{PlaceAPI, PlacemarkAPI},
    coordinator::resolve,
    entities::Coordinates,
    error::Error,
};

#[async_trait]
impl PlacemarkAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self, address: Option<String>) -> Result<Option<Coordinates>, Error> {
        resolve(&*self.geocoder, address.as_deref()).await
    }

    #[tracing::instrument(skip(self))]
    async fn resolve_place(&self, id: Uuid) -> Result<Option<Coordinates>, Error> {
        let place = self.find_place(id).await?;

        resolve(&*self.geocoder, place.address()).await
    }
}
