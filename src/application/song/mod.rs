use crate::domain::song::repo::Repo;
use crate::domain::song::{
    Batch, Error, Song, SongInfo, SongSearch, SongSummary, SongUpdate,
};

#[derive(Clone)]
pub struct Service<R> {
    pub repo: R,
}

impl<R> Service<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> Service<R>
where
    R: Repo,
{
    pub async fn info(&self, song: &Song) -> Result<SongInfo, Error> {
        self.repo.info(song).await
    }

    pub async fn create(&self, song: &Song) -> Result<(), Error> {
        self.repo.create(song).await
    }

    pub async fn delete(&self, song: &Song) -> Result<(), Error> {
        self.repo.delete(song).await
    }

    pub async fn update(
        &self,
        song: &Song,
        update: &SongUpdate,
    ) -> Result<(), Error> {
        self.repo.update(song, update).await
    }

    pub async fn lyrics(
        &self,
        song: &Song,
        batch: Batch,
    ) -> Result<Vec<String>, Error> {
        self.repo.lyrics(song, batch).await
    }

    pub async fn search(
        &self,
        search: &SongSearch,
    ) -> Result<Vec<SongSummary>, Error> {
        self.repo.search(search).await
    }
}
