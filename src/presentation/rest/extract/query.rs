use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use garde::Validate;
use serde::de::DeserializeOwned;

use crate::presentation::error::ApiError;

pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate<Context = ()>,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        value.validate()?;

        Ok(Self(value))
    }
}
