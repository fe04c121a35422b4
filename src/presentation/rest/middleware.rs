use std::any::Any;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderName, Method};
use axum::response::{IntoResponse, Response};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::constant::REQUEST_ID_HEADER;
use crate::presentation::api_response;

/// Outermost first: request id, tracing span, request id echo, panic
/// handler, cors.
pub fn append_global_middlewares<S>(router: Router<S>) -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(cors_layer()),
    )
}

fn make_span(req: &Request) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id,
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!("Handler panicked: {detail}");

    api_response::Error::new("Internal Server Error").into_response()
}

fn cors_layer() -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(methods)
        .allow_headers(AnyOrigin)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}
