use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use utoipa::IntoResponses;
use utoipa::openapi::{RefOr, Response as ResponseDef};

use super::api_response::{self, AsStatusCode, ErrResponseDef};
use crate::domain::song;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Song(#[from] song::Error),
    #[error("Invalid request: {0}")]
    Validation(#[from] garde::Report),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl AsStatusCode for song::Error {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn all_status_codes() -> impl Iterator<Item = StatusCode> {
        [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::CONFLICT,
            StatusCode::INTERNAL_SERVER_ERROR,
        ]
        .into_iter()
    }
}

impl AsStatusCode for ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::Song(err) => err.as_status_code(),
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Json(rejection) => rejection.status(),
            Self::Query(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn all_status_codes() -> impl Iterator<Item = StatusCode> {
        song::Error::all_status_codes().chain([
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            StatusCode::UNPROCESSABLE_ENTITY,
        ])
    }
}

impl IntoResponses for ApiError {
    fn responses() -> BTreeMap<String, RefOr<ResponseDef>> {
        Self::build_err_responses().responses
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Song(song::Error::Infra(err)) => err.print(),
            Self::Song(err) => tracing::debug!("{err}"),
            Self::Validation(report) => {
                tracing::debug!("Validation failed: {report}");
            }
            Self::Json(rejection) => {
                tracing::warn!(
                    "Malformed json body: {}",
                    rejection.body_text()
                );
            }
            Self::Query(rejection) => {
                tracing::warn!("Malformed query: {}", rejection.body_text());
            }
        }

        api_response::Error::from_api_error(&self).into_response()
    }
}
