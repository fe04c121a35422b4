use sea_orm::entity::prelude::*;

/// One line of lyrics. `idx` is the 0-based position inside the song.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub song_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub idx: i32,
    #[sea_orm(column_type = "Text")]
    pub verse: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::song::Entity",
        from = "Column::SongId",
        to = "super::song::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Song,
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
