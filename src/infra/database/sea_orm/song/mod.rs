use entity::{song, verse};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use uuid::Uuid;

use super::SeaOrmRepository;
use crate::constant::VERSE_SEPARATOR;
use crate::domain::repository::{Connection, Transaction, TransactionManager};
use crate::domain::song::repo::Repo;
use crate::domain::song::{
    Batch, Error, InvalidInput, Song, SongInfo, SongSearch, SongSummary,
    SongUpdate,
};
use crate::infra::database::error::UniqueViolation;

mod query;

const INFO_SQL: &str = r"
SELECT s.group_name,
       s.song,
       s.link,
       s.release_date,
       COALESCE(STRING_AGG(v.verse, $3 ORDER BY v.idx), '') AS lyrics
FROM songs s
LEFT JOIN verses v ON v.song_id = s.id
WHERE s.group_name = $1 AND s.song = $2
GROUP BY s.id";

#[derive(FromQueryResult)]
struct SongInfoRow {
    group_name: String,
    song: String,
    link: Option<String>,
    release_date: Option<chrono::NaiveDate>,
    lyrics: String,
}

impl From<SongInfoRow> for SongInfo {
    fn from(row: SongInfoRow) -> Self {
        Self {
            group: row.group_name,
            song_name: row.song,
            lyrics: row.lyrics,
            release_date: row.release_date,
            link: row.link.unwrap_or_default(),
        }
    }
}

impl From<song::Model> for SongSummary {
    fn from(model: song::Model) -> Self {
        Self {
            group: model.group_name,
            song_name: model.song,
            release_date: model.release_date,
            link: model.link.unwrap_or_default(),
        }
    }
}

impl Repo for SeaOrmRepository {
    async fn info(&self, song: &Song) -> Result<SongInfo, Error> {
        info_impl(song, self.conn()).await
    }

    async fn create(&self, song: &Song) -> Result<(), Error> {
        create_impl(song, self.conn()).await
    }

    async fn delete(&self, song: &Song) -> Result<(), Error> {
        delete_impl(song, self.conn()).await
    }

    async fn update(
        &self,
        song: &Song,
        update: &SongUpdate,
    ) -> Result<(), Error> {
        if update.is_empty() {
            return Err(InvalidInput::EmptyUpdate.into());
        }

        let tx_repo = self.begin().await?;

        update_impl(song, update, tx_repo.conn()).await?;

        tx_repo.commit().await?;

        Ok(())
    }

    async fn lyrics(
        &self,
        song: &Song,
        batch: Batch,
    ) -> Result<Vec<String>, Error> {
        let tx_repo = self.begin_snapshot().await?;

        let verses = lyrics_impl(song, batch, tx_repo.conn()).await?;

        tx_repo.commit().await?;

        Ok(verses)
    }

    async fn search(
        &self,
        search: &SongSearch,
    ) -> Result<Vec<SongSummary>, Error> {
        let songs = query::search_songs(search).all(self.conn()).await?;

        Ok(songs.into_iter().map(Into::into).collect())
    }
}

fn conflict_or_infra(err: DbErr, song: Song) -> Error {
    match UniqueViolation::try_from(err) {
        Ok(_) => Error::Conflict(song),
        Err(err) => err.into(),
    }
}

async fn find_id(
    song: &Song,
    lock: bool,
    db: &impl ConnectionTrait,
) -> Result<Uuid, Error> {
    let select = song::Entity::find().filter(query::identity(song));
    let select = if lock { select.lock_exclusive() } else { select };

    select
        .one(db)
        .await?
        .map(|model| model.id)
        .ok_or_else(|| Error::NotFound(song.clone()))
}

async fn info_impl(
    song: &Song,
    db: &impl ConnectionTrait,
) -> Result<SongInfo, Error> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        INFO_SQL,
        [
            song.group.as_str().into(),
            song.song_name.as_str().into(),
            VERSE_SEPARATOR.into(),
        ],
    );

    SongInfoRow::find_by_statement(stmt)
        .one(db)
        .await?
        .map(Into::into)
        .ok_or_else(|| Error::NotFound(song.clone()))
}

async fn create_impl(
    song: &Song,
    db: &impl ConnectionTrait,
) -> Result<(), Error> {
    let model = song::ActiveModel {
        id: Set(Uuid::new_v4()),
        group_name: Set(song.group.clone()),
        song: Set(song.song_name.clone()),
        link: Set(None),
        release_date: Set(None),
    };

    song::Entity::insert(model)
        .exec_without_returning(db)
        .await
        .map_err(|err| conflict_or_infra(err, song.clone()))?;

    Ok(())
}

async fn delete_impl(
    song: &Song,
    db: &impl ConnectionTrait,
) -> Result<(), Error> {
    let res = song::Entity::delete_many()
        .filter(query::identity(song))
        .exec(db)
        .await?;

    if res.rows_affected == 0 {
        return Err(Error::NotFound(song.clone()));
    }

    Ok(())
}

async fn update_impl(
    song: &Song,
    update: &SongUpdate,
    tx: &impl ConnectionTrait,
) -> Result<(), Error> {
    let song_id = find_id(song, true, tx).await?;

    match query::update_song(song, update) {
        Ok(stmt) => {
            stmt.exec(tx)
                .await
                .map_err(|err| conflict_or_infra(err, update.target(song)))?;
        }
        // Lyrics only
        Err(InvalidInput::EmptyUpdate) => {}
        Err(err) => return Err(err.into()),
    }

    // Verses are replaced as a whole, a patch without lyrics leaves none
    verse::Entity::delete_many()
        .filter(verse::Column::SongId.eq(song_id))
        .exec(tx)
        .await?;

    if let Some(verses) = update.verses() {
        query::insert_verses(song_id, verses)?
            .exec_without_returning(tx)
            .await?;
    }

    Ok(())
}

async fn lyrics_impl(
    song: &Song,
    batch: Batch,
    tx: &impl ConnectionTrait,
) -> Result<Vec<String>, Error> {
    let song_id = find_id(song, false, tx).await?;

    let verses = verse::Entity::find()
        .filter(verse::Column::SongId.eq(song_id))
        .order_by_asc(verse::Column::Idx)
        .limit(batch.limit)
        .offset(batch.offset)
        .all(tx)
        .await?;

    Ok(verses.into_iter().map(|model| model.verse).collect())
}
