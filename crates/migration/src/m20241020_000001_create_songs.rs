use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(uuid(Songs::Id).primary_key())
                    .col(string(Songs::GroupName))
                    .col(string(Songs::Song))
                    .col(string_null(Songs::Link))
                    .col(date_null(Songs::ReleaseDate))
                    .index(
                        Index::create()
                            .name("songs_group_name_song_key")
                            .col(Songs::GroupName)
                            .col(Songs::Song)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Verses::Table)
                    .if_not_exists()
                    .col(uuid(Verses::SongId))
                    .col(integer(Verses::Idx))
                    .col(text(Verses::Verse))
                    .primary_key(
                        Index::create().col(Verses::SongId).col(Verses::Idx),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("verses_song_id_fkey")
                            .from(Verses::Table, Verses::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Verses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Songs {
    Table,
    Id,
    GroupName,
    Song,
    Link,
    ReleaseDate,
}

#[derive(DeriveIden)]
enum Verses {
    Table,
    SongId,
    Idx,
    Verse,
}
