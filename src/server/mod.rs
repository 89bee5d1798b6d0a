mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{geocode, places};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/places", get(places::list).post(places::create))
        .route(
            "/places/:id",
            get(places::find).put(places::update).delete(places::delete),
        )
        .route("/places/:id/placemark", get(places::placemark))
        .route("/geocode", get(geocode::resolve))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
