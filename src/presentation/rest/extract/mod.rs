//! Extractors that reject with
//! [`ApiError`](crate::presentation::error::ApiError)
//! and run `garde` validation on the parsed value.

mod json;
mod query;

pub use json::{MaybeJson, QueryOrJson, ValidJson};
pub use query::ValidQuery;
