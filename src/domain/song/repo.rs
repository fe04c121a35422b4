use super::error::Error;
use super::model::{Batch, Song, SongInfo, SongSearch, SongSummary, SongUpdate};
use crate::domain::repository::Connection;

pub trait Repo: Connection {
    /// Song with its lyrics joined into a single text
    async fn info(&self, song: &Song) -> Result<SongInfo, Error>;

    async fn create(&self, song: &Song) -> Result<(), Error>;

    /// Removes the song and every verse it owns
    async fn delete(&self, song: &Song) -> Result<(), Error>;

    /// Applies a patch atomically. The verses are always replaced by the
    /// lyrics of the patch, which may be none
    async fn update(&self, song: &Song, update: &SongUpdate)
    -> Result<(), Error>;

    /// One page of verses in verse order
    async fn lyrics(&self, song: &Song, batch: Batch)
    -> Result<Vec<String>, Error>;

    async fn search(&self, search: &SongSearch)
    -> Result<Vec<SongSummary>, Error>;
}
