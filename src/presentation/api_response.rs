use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::Display;
use serde::Serialize;
use utoipa::openapi::{
    ContentBuilder, ObjectBuilder, RefOr, ResponseBuilder, ResponsesBuilder,
    Schema,
};
use utoipa::{PartialSchema, ToSchema, openapi};

use crate::utils::openapi::ContentType;

#[derive(Debug, Serialize, Display)]
enum Status {
    Ok,
    Err,
}

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;

    fn all_status_codes() -> impl Iterator<Item = StatusCode>;
}

#[derive(ToSchema, Serialize)]
pub struct Message {
    #[schema(
        schema_with = status_ok_schema
    )]
    status: Status,
    message: String,
}

impl Message {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: Status::Ok.to_string(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(ToSchema, Serialize)]
pub struct Error {
    #[schema(schema_with = status_err_schema)]
    status: Status,
    message: String,
    #[serde(skip)]
    status_code: StatusCode,
}

trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error {
            status: Status::Err,
            message: self.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T> IntoError for (T, StatusCode)
where
    T: Display,
{
    fn into_error(self) -> Error {
        Error {
            status: Status::Err,
            message: self.0.to_string(),
            status_code: self.1,
        }
    }
}

impl Error {
    #[expect(private_bounds)]
    pub fn new(err: impl IntoError) -> Self {
        err.into_error()
    }

    pub fn from_api_error<T>(err: &T) -> Self
    where
        T: AsStatusCode + Display,
    {
        Self {
            status: Status::Err,
            message: err.to_string(),
            status_code: err.as_status_code(),
        }
    }

    pub fn response_def() -> utoipa::openapi::Response {
        ResponseBuilder::new()
            .content(
                ContentType::Json,
                ContentBuilder::new().schema(Self::schema().into()).build(),
            )
            .build()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

pub trait ErrResponseDef {
    fn build_err_responses() -> utoipa::openapi::Responses;
}

impl<T> ErrResponseDef for T
where
    T: AsStatusCode,
{
    fn build_err_responses() -> utoipa::openapi::Responses {
        ResponsesBuilder::new()
            .responses_from_iter(T::all_status_codes().map(|x| {
                (x.as_u16().to_string(), Error::response_def())
            }))
            .build()
    }
}

pub fn status_ok_schema() -> impl Into<RefOr<Schema>> {
    ObjectBuilder::new()
        .schema_type(openapi::Type::String)
        .enum_values(vec![Status::Ok.to_string()].into())
        .build()
}

pub fn status_err_schema() -> impl Into<RefOr<Schema>> {
    ObjectBuilder::new()
        .schema_type(openapi::Type::String)
        .enum_values(vec![Status::Err.to_string()].into())
        .build()
}
