mod place_api;
mod placemark_api;

use sqlx::{Executor, Pool};

use crate::{api::API, db::Database, error::Error, external::DynGeocoder};

/// Owns the place store and the geocoder for the lifetime of the process.
pub struct Engine {
    pool: Pool<Database>,
    geocoder: DynGeocoder,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, geocoder: DynGeocoder) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS places (
                id UUID PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL,
                data JSONB NOT NULL
            )",
        )
        .await?;

        Ok(Self { pool, geocoder })
    }
}

impl API for Engine {}
