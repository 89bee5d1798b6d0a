use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::error::Error;

pub type Database = Postgres;

pub struct PgPool(pub Pool<Database>);

impl PgPool {
    #[tracing::instrument(name = "PgPool::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }
}
