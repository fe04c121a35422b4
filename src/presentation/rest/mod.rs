use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use middleware::append_global_middlewares;
use state::ArcAppState;
use tokio::net::TcpListener;
use tokio::signal;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

use super::api_response;
use crate::infra::state::AppState;
use crate::utils::Pipe;

mod extract;
mod middleware;
mod song;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Music Library",
        description = "Song catalog with paginated lyrics",
        license(
            name = "MIT",
            url  = "https://opensource.org/licenses/MIT"
        )
    ),
)]
struct ApiDoc;

pub async fn listen(
    listener: TcpListener,
    state: Arc<AppState>,
) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("Unable to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

pub fn router(state: Arc<AppState>) -> Router {
    let state = ArcAppState::new(state);

    let (router, api_doc) = api_router(state.api_version).split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api_doc.clone()))
        .route("/openapi.json", get(move || async move { Json(api_doc) }))
        .fallback(not_found)
        .pipe(append_global_middlewares)
        .with_state(state)
}

fn api_router(version: u8) -> OpenApiRouter<ArcAppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(&format!("/v{version}"), song::router())
        .routes(routes!(health_check))
}

#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200)
    ),
)]
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn not_found() -> api_response::Error {
    api_response::Error::new(("Not Found", StatusCode::NOT_FOUND))
}
