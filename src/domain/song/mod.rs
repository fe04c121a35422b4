pub mod error;
pub mod model;
pub mod repo;

pub use error::{Error, InvalidInput};
pub use model::*;
