use std::sync::Arc;

use myplaces::api::PlaceAPI;
use myplaces::config::Config;
use myplaces::db::PgPool;
use myplaces::engine::Engine;
use myplaces::error::Error;
use myplaces::external::GoogleMaps;
use myplaces::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let maps = Arc::new(GoogleMaps::from_env()?);

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections).await?;

    let engine = Engine::new(pool, maps).await?;
    engine.seed_places().await?;

    serve(engine, config.listen_addr).await
}
