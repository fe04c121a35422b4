use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Query, Request};
use bytes::Bytes;
use garde::Validate;
use serde::de::DeserializeOwned;

use crate::presentation::error::ApiError;

/// Empty body is `None`, anything else must be valid json.
pub struct MaybeJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for MaybeJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = JsonRejection;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() {
            return Ok(Self(None));
        }

        Json::from_bytes(&bytes).map(|Json(v)| Self(Some(v)))
    }
}

pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate<Context = ()>,
{
    type Rejection = ApiError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Reads the json body when there is one, the query string otherwise.
pub struct QueryOrJson<T>(pub T);

impl<T, S> FromRequest<S> for QueryOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate<Context = ()>,
{
    type Rejection = ApiError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let uri = req.uri().clone();

        let value = match MaybeJson::<T>::from_request(req, state).await? {
            MaybeJson(Some(value)) => value,
            MaybeJson(None) => Query::<T>::try_from_uri(&uri)?.0,
        };

        value.validate()?;

        Ok(Self(value))
    }
}
