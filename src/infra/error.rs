use std::borrow::Cow;
use std::error::Error as _;

use derive_more::{Display, From};
use sea_orm::DbErr;

pub type Result<T> = std::result::Result<T, Error>;

/// Note: Don't impl from for variants
#[derive(Debug, Display, From, derive_more::Error)]
pub enum Error {
    Internal(InternalError),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Internal(InternalError::SeaOrm(value))
    }
}

impl Error {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal(InternalError::Custom(message.into()))
    }

    /// Logs the underlying cause. Responses only ever carry the display text.
    pub fn print(&self) {
        match self {
            Self::Internal(err) => err.print(),
        }
    }
}

#[derive(Debug, Display, derive_more::Error, From)]
#[display("Internal Server Error")]
pub enum InternalError {
    SeaOrm(DbErr),
    Custom(#[error(not(source))] Cow<'static, str>),
}

impl InternalError {
    const fn prefix(&self) -> &'static str {
        match self {
            Self::SeaOrm(_) => "Database error",
            Self::Custom(_) => "Custom error",
        }
    }

    fn print(&self) {
        match self {
            Self::Custom(e) => tracing::error!("{}: {}", self.prefix(), e),
            _ => {
                if let Some(source) = self.source() {
                    tracing::error!("{}: {}", self.prefix(), source);
                } else {
                    tracing::error!("{}: {}", self.prefix(), self);
                }
            }
        }
    }
}
