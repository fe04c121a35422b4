use super::model::Song;
use crate::infra;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Song {0} not found")]
    NotFound(Song),
    #[error("Song {0} already exists")]
    Conflict(Song),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error(transparent)]
    Infra(#[from] infra::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("Nothing to update in song")]
    EmptyUpdate,
    #[error("Empty lyrics")]
    EmptyLyrics,
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Infra(value.into())
    }
}
