//! Statements whose shape depends on the request.

use entity::{song, verse};
use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::{Expr, IntoColumnRef, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Insert, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, UpdateMany,
};
use uuid::Uuid;

use crate::domain::song::{
    FieldValue, InvalidInput, Song, SongField, SongSearch, SongUpdate,
};
use crate::utils::like_pattern;

const fn column_of(field: SongField) -> song::Column {
    match field {
        SongField::Group => song::Column::GroupName,
        SongField::SongName => song::Column::Song,
        SongField::Link => song::Column::Link,
        SongField::ReleaseDate => song::Column::ReleaseDate,
    }
}

fn value_of(value: FieldValue<'_>) -> SimpleExpr {
    match value {
        FieldValue::Text(text) => Expr::value(text.map(str::to_owned)),
        FieldValue::Date(date) => Expr::value(date),
    }
}

pub fn identity(song: &Song) -> Condition {
    Condition::all()
        .add(song::Column::GroupName.eq(song.group.as_str()))
        .add(song::Column::Song.eq(song.song_name.as_str()))
}

/// One assignment per present field, then the identity filter.
pub fn update_song(
    song: &Song,
    update: &SongUpdate,
) -> Result<UpdateMany<song::Entity>, InvalidInput> {
    let changes = update.changes();

    if changes.is_empty() {
        return Err(InvalidInput::EmptyUpdate);
    }

    let query = changes
        .into_iter()
        .fold(song::Entity::update_many(), |query, (field, value)| {
            query.col_expr(column_of(field), value_of(value))
        })
        .filter(identity(song));

    Ok(query)
}

pub fn insert_verses(
    song_id: Uuid,
    verses: &[String],
) -> Result<Insert<verse::ActiveModel>, InvalidInput> {
    if verses.is_empty() {
        return Err(InvalidInput::EmptyLyrics);
    }

    let models = (0..).zip(verses).map(|(idx, text)| verse::ActiveModel {
        song_id: Set(song_id),
        idx: Set(idx),
        verse: Set(text.clone()),
    });

    Ok(verse::Entity::insert_many(models))
}

pub fn search_songs(search: &SongSearch) -> Select<song::Entity> {
    let mut cond = Condition::all();

    if let Some(group) = &search.by_group {
        cond = cond.add(ilike((song::Entity, song::Column::GroupName), group));
    }
    if let Some(name) = &search.by_song_name {
        cond = cond.add(ilike((song::Entity, song::Column::Song), name));
    }
    if let Some(lyrics) = &search.by_lyrics {
        cond = cond.add(Expr::exists(
            Query::select()
                .column((verse::Entity, verse::Column::SongId))
                .from(verse::Entity)
                .and_where(
                    Expr::col((verse::Entity, verse::Column::SongId))
                        .equals((song::Entity, song::Column::Id)),
                )
                .and_where(ilike(
                    (verse::Entity, verse::Column::Verse),
                    lyrics,
                ))
                .to_owned(),
        ));
    }
    if let Some(link) = &search.by_link {
        cond = cond.add(ilike((song::Entity, song::Column::Link), link));
    }
    if let Some(from) = search.date_from {
        cond = cond.add(song::Column::ReleaseDate.gte(from));
    }
    if let Some(to) = search.date_to {
        cond = cond.add(song::Column::ReleaseDate.lte(to));
    }

    let batch = search.batch();

    song::Entity::find()
        .filter(cond)
        .order_by_asc(song::Column::GroupName)
        .order_by_asc(song::Column::Song)
        .limit(batch.limit)
        .offset(batch.offset)
}

fn ilike(column: impl IntoColumnRef, term: &str) -> SimpleExpr {
    Expr::col(column).binary(PgBinOper::ILike, like_pattern(term))
}
